use std::time::Duration;

pub const COUNTDOWN_LENGTH: u32 = 5;

/// Timing of one lottery run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotteryConfig {
    /// Countdown steps before the winner is drawn.
    pub countdown_length: u32,
    /// Period of the cosmetic preview flicker.
    pub fast_tick: Duration,
    /// Period of one countdown step.
    pub slow_tick: Duration,
    /// How long the celebration overlay stays up after the reveal.
    pub winner_display: Duration,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            countdown_length: COUNTDOWN_LENGTH,
            fast_tick: Duration::from_millis(100),
            slow_tick: Duration::from_millis(1000),
            winner_display: Duration::from_millis(5000),
        }
    }
}
