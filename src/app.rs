use crate::config::Config;
use crate::lottery::{Lottery, LotteryConfig};
use crate::relay::{ImageRelay, RelayError};
use std::time::Duration;

/// Everything a request handler can reach.
#[derive(Clone)]
pub struct App {
    pub lottery: Lottery,
    pub relay: ImageRelay,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, RelayError> {
        Self::with_parts(config.lottery, config.relay_timeout)
    }

    pub fn with_parts(lottery: LotteryConfig, relay_timeout: Duration) -> Result<Self, RelayError> {
        Ok(Self {
            lottery: Lottery::new(lottery),
            relay: ImageRelay::new(relay_timeout)?,
        })
    }
}
