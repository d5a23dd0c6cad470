use crate::domain::CommentRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Countdown,
    Revealed,
}

/// Mutable state of the selection sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotteryState {
    pub phase: Phase,
    pub ticks_remaining: u32,
    pub preview: Option<CommentRecord>,
    pub winner: Option<CommentRecord>,
}

impl LotteryState {
    pub fn idle(countdown_length: u32) -> Self {
        Self {
            phase: Phase::Idle,
            ticks_remaining: countdown_length,
            preview: None,
            winner: None,
        }
    }
}

/// Read-only view handed to the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LotterySnapshot {
    pub phase: Phase,
    pub ticks_remaining: u32,
    pub preview: Option<CommentRecord>,
    pub winner: Option<CommentRecord>,
    pub record_count: usize,
    /// True while the celebration overlay should still be shown.
    pub celebrating: bool,
}
