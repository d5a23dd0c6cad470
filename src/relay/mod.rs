mod client;
mod relay_error;

pub use client::{ImageRelay, RelayedImage};
pub use relay_error::RelayError;
