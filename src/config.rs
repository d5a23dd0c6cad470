use crate::lottery::LotteryConfig;
use std::net::SocketAddr;
use std::time::Duration;
use std::{env, fmt::Display, str::FromStr};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub lottery: LotteryConfig,
    pub relay_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = LotteryConfig::default();

        let lottery = LotteryConfig {
            fast_tick: Duration::from_millis(positive(
                &lookup,
                "LOTTERY_FAST_TICK_MS",
                defaults.fast_tick.as_millis() as u64,
            )?),
            slow_tick: Duration::from_millis(positive(
                &lookup,
                "LOTTERY_SLOW_TICK_MS",
                defaults.slow_tick.as_millis() as u64,
            )?),
            winner_display: Duration::from_millis(try_load(
                &lookup,
                "LOTTERY_WINNER_DISPLAY_MS",
                defaults.winner_display.as_millis() as u64,
            )?),
            ..defaults
        };

        Ok(Self {
            addr: try_load(&lookup, "LOTTERY_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
            max_workers: positive(&lookup, "LOTTERY_MAX_WORKERS", 8)?,
            lottery,
            relay_timeout: Duration::from_secs(positive(&lookup, "LOTTERY_RELAY_TIMEOUT_SECS", 10)?),
        })
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };

    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }
    })
}

// Zero periods would spin the ticker and zero workers would serve nothing.
fn positive<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display + PartialOrd + Default,
    T::Err: Display,
{
    let value = try_load(lookup, key, default)?;
    if value > T::default() {
        Ok(value)
    } else {
        warn!("Invalid {key} value: must be greater than zero");
        Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "must be greater than zero".into(),
        })
    }
}
