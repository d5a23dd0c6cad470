mod config;
mod scheduler;
mod sequencer;
mod session;
mod state;

pub use config::LotteryConfig;
pub use session::{Lottery, LotteryError};
pub use state::{LotterySnapshot, Phase};
