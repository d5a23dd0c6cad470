// src/lottery/sequencer.rs

use crate::domain::RecordCollection;
use crate::lottery::config::LotteryConfig;
use crate::lottery::scheduler::{Tick, TickFlow};
use crate::lottery::state::{LotterySnapshot, LotteryState, Phase};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::info;

/// The lottery state machine.
///
/// Idle --start--> Countdown(n) --n ticks--> Revealed --start--> Countdown(n)
///
/// `reset` and `load` return to Idle from anywhere. Each `start` opens a new
/// run; ticks are tagged with the run they were scheduled for and ticks from
/// an ended run are ignored.
pub struct Sequencer<R = StdRng> {
    config: LotteryConfig,
    records: RecordCollection,
    state: LotteryState,
    run: u64,
    revealed_at: Option<Instant>,
    rng: R,
}

impl Sequencer<StdRng> {
    pub fn from_entropy(config: LotteryConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Sequencer<R> {
    pub fn new(config: LotteryConfig, rng: R) -> Self {
        Self {
            config,
            records: RecordCollection::default(),
            state: LotteryState::idle(config.countdown_length),
            run: 0,
            revealed_at: None,
            rng,
        }
    }

    /// Replace the record collection. Any running countdown is abandoned
    /// before the new records become visible.
    pub fn load(&mut self, records: RecordCollection) {
        self.reset();
        self.records = records;
    }

    /// Begin a countdown and return the id of the new run.
    ///
    /// Returns `None` without touching state when there is nothing to draw
    /// from or a countdown is already under way.
    pub fn start(&mut self) -> Option<u64> {
        if self.records.is_empty() || self.state.phase == Phase::Countdown {
            return None;
        }

        self.run += 1;
        self.revealed_at = None;
        self.state = LotteryState {
            phase: Phase::Countdown,
            ticks_remaining: self.config.countdown_length,
            preview: None,
            winner: None,
        };

        if self.state.ticks_remaining == 0 {
            self.reveal();
        }

        Some(self.run)
    }

    pub fn reset(&mut self) {
        self.run += 1;
        self.revealed_at = None;
        self.state = LotteryState::idle(self.config.countdown_length);
    }

    /// Apply a tick scheduled for `run`. Ticks from any other run are stale.
    pub fn apply_for(&mut self, run: u64, tick: Tick) -> TickFlow {
        if run != self.run {
            return TickFlow::Stop;
        }
        self.apply(tick)
    }

    pub fn apply(&mut self, tick: Tick) -> TickFlow {
        if self.state.phase != Phase::Countdown {
            return TickFlow::Stop;
        }

        match tick {
            Tick::Preview => {
                self.state.preview = self.records.pick(&mut self.rng).cloned();
                TickFlow::Continue
            }
            Tick::Countdown => {
                self.state.ticks_remaining = self.state.ticks_remaining.saturating_sub(1);
                if self.state.ticks_remaining == 0 {
                    self.reveal();
                    TickFlow::Stop
                } else {
                    TickFlow::Continue
                }
            }
        }
    }

    // Independent draw; the last preview has no bearing on the winner.
    fn reveal(&mut self) {
        self.state.winner = self.records.pick(&mut self.rng).cloned();
        self.state.preview = None;
        self.state.phase = Phase::Revealed;
        self.revealed_at = Some(Instant::now());

        if let Some(winner) = &self.state.winner {
            info!(
                run = self.run,
                comment_id = winner.comment_id(),
                username = winner.username(),
                "winner revealed"
            );
        }
    }

    pub fn state(&self) -> &LotteryState {
        &self.state
    }

    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    pub fn run_id(&self) -> u64 {
        self.run
    }

    pub fn snapshot(&self) -> LotterySnapshot {
        let celebrating = self.state.phase == Phase::Revealed
            && self
                .revealed_at
                .map(|at| at.elapsed() < self.config.winner_display)
                .unwrap_or(false);

        LotterySnapshot {
            phase: self.state.phase,
            ticks_remaining: self.state.ticks_remaining,
            preview: self.state.preview.clone(),
            winner: self.state.winner.clone(),
            record_count: self.records.len(),
            celebrating,
        }
    }
}
