use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Relay client setup failed: {0}")]
    Client(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to read upstream body: {0}")]
    Body(String),
}
