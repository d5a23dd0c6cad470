// src/lottery/session.rs

use crate::domain::RecordCollection;
use crate::lottery::config::LotteryConfig;
use crate::lottery::scheduler::{TickFlow, TickHandle, TickScheduler};
use crate::lottery::sequencer::Sequencer;
use crate::lottery::state::{LotterySnapshot, Phase};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LotteryError {
    #[error("could not start the countdown ticker: {0}")]
    Scheduler(#[from] std::io::Error),
}

struct Shared {
    sequencer: Sequencer,
    ticker: Option<TickHandle>,
}

impl Shared {
    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.cancel();
        }
    }
}

// The state machine never leaves a transition half-applied, so a panic in
// another holder does not invalidate it.
fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The one interactive lottery this server hosts.
///
/// Every transition and every scheduled tick goes through the same lock, so
/// once `load` or `reset` returns, ticks from the abandoned run can no longer
/// touch state.
#[derive(Clone)]
pub struct Lottery {
    shared: Arc<Mutex<Shared>>,
    scheduler: TickScheduler,
}

impl Lottery {
    pub fn new(config: LotteryConfig) -> Self {
        Self::with_sequencer(config, Sequencer::from_entropy(config))
    }

    pub fn with_sequencer(config: LotteryConfig, sequencer: Sequencer) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                sequencer,
                ticker: None,
            })),
            scheduler: TickScheduler::from_config(&config),
        }
    }

    /// Swap in a freshly uploaded collection, abandoning any running countdown.
    pub fn load(&self, records: RecordCollection) -> LotterySnapshot {
        let mut shared = lock(&self.shared);
        shared.stop_ticker();

        let count = records.len();
        shared.sequencer.load(records);
        info!(records = count, "comments loaded");

        shared.sequencer.snapshot()
    }

    pub fn start(&self) -> Result<LotterySnapshot, LotteryError> {
        let mut shared = lock(&self.shared);

        let Some(run) = shared.sequencer.start() else {
            return Ok(shared.sequencer.snapshot());
        };
        shared.stop_ticker();
        info!(
            run,
            records = shared.sequencer.records().len(),
            "lottery started"
        );

        if shared.sequencer.state().phase == Phase::Countdown {
            let weak = Arc::downgrade(&self.shared);
            let spawned = self.scheduler.spawn(move |tick| {
                let Some(shared) = weak.upgrade() else {
                    return TickFlow::Stop;
                };
                let mut guard = lock(&shared);
                let flow = guard.sequencer.apply_for(run, tick);
                if flow == TickFlow::Stop && guard.sequencer.run_id() == run {
                    guard.ticker = None;
                }
                flow
            });

            match spawned {
                Ok(handle) => shared.ticker = Some(handle),
                Err(e) => {
                    error!("failed to spawn ticker: {e}");
                    shared.sequencer.reset();
                    return Err(e.into());
                }
            }
        }

        Ok(shared.sequencer.snapshot())
    }

    pub fn reset(&self) -> LotterySnapshot {
        let mut shared = lock(&self.shared);
        shared.stop_ticker();
        shared.sequencer.reset();
        info!("lottery reset");
        shared.sequencer.snapshot()
    }

    pub fn snapshot(&self) -> LotterySnapshot {
        lock(&self.shared).sequencer.snapshot()
    }

    #[cfg(test)]
    pub fn is_ticking(&self) -> bool {
        lock(&self.shared).ticker.is_some()
    }
}
