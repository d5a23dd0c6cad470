// src/lottery/scheduler.rs

use crate::lottery::config::LotteryConfig;
use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Fast, cosmetic: show another random record.
    Preview,
    /// Slow: one step of the countdown.
    Countdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

/// Drives both tick kinds from a single worker thread.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    preview_every: Duration,
    countdown_every: Duration,
}

/// Cancels the worker, and with it both tick kinds, when cancelled or dropped.
#[derive(Debug)]
pub struct TickHandle {
    _stop: Sender<()>,
}

impl TickHandle {
    pub fn cancel(self) {
        drop(self);
    }
}

impl TickScheduler {
    pub fn new(preview_every: Duration, countdown_every: Duration) -> Self {
        Self {
            preview_every,
            countdown_every,
        }
    }

    pub fn from_config(config: &LotteryConfig) -> Self {
        Self::new(config.fast_tick, config.slow_tick)
    }

    /// Start emitting ticks into `on_tick` until it returns `TickFlow::Stop`
    /// or the returned handle goes away.
    pub fn spawn<F>(&self, mut on_tick: F) -> io::Result<TickHandle>
    where
        F: FnMut(Tick) -> TickFlow + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let preview_every = self.preview_every;
        let countdown_every = self.countdown_every;

        thread::Builder::new()
            .name("lottery-ticker".into())
            .spawn(move || {
                let started = Instant::now();
                let mut next_preview = started + preview_every;
                let mut next_countdown = started + countdown_every;

                loop {
                    let due = next_preview.min(next_countdown);
                    let wait = due.saturating_duration_since(Instant::now());

                    // Nothing is ever sent; the handle hangs up to cancel.
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {}
                        _ => {
                            debug!("ticker cancelled");
                            return;
                        }
                    }

                    let now = Instant::now();

                    if now >= next_preview {
                        next_preview += preview_every;
                        if on_tick(Tick::Preview) == TickFlow::Stop {
                            break;
                        }
                    }

                    if now >= next_countdown {
                        next_countdown += countdown_every;
                        if on_tick(Tick::Countdown) == TickFlow::Stop {
                            break;
                        }
                    }
                }

                debug!("ticker finished");
            })?;

        Ok(TickHandle { _stop: stop_tx })
    }
}
