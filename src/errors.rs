// errors.rs
use crate::lottery::LotteryError;
use crate::relay::RelayError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input) or downstream layers (relay, ticker).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Failed to fetch image")]
    Relay(#[from] RelayError),
    #[error("Lottery error: {0}")]
    Lottery(#[from] LotteryError),
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Relay(_) | ServerError::Lottery(_) | ServerError::Internal(_) => 500,
        }
    }

    /// Text safe to show the visitor.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::NotFound => "Not Found".into(),
            ServerError::BadRequest(msg) => msg.clone(),
            ServerError::Relay(_) => "Failed to fetch image".into(),
            ServerError::Lottery(_) | ServerError::Internal(_) => "Internal Server Error".into(),
        }
    }
}
