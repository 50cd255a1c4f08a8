//! # Delivery Simulator
//!
//! Drives a [`DeliveryProgress`] with a repeating timer. The timer task owns
//! nothing but a handle to the published state and calls
//! [`DeliveryProgress::tick`] on it, so there is no captured "current step"
//! that can go stale between runs.
//!
//! Each run lives in its own Tokio task. Restarting aborts the previous task
//! before publishing fresh state, and dropping the simulator aborts whatever
//! is still pending, so a torn-down tracker never receives a late tick.

use super::progress::{DeliveryProgress, TickOutcome};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant};
use tracing::{debug, info};

/// Shortest tick the timer accepts.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Timer settings for a tracking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulatorTiming {
    /// Time between two ticks.
    #[serde(with = "crate::lifecycle::config::millis")]
    pub tick_interval: Duration,
    /// How long the completed state stays "tracking" before the run ends.
    #[serde(with = "crate::lifecycle::config::millis")]
    pub terminal_hold: Duration,
}

impl Default for SimulatorTiming {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(3),
            terminal_hold: Duration::from_secs(2),
        }
    }
}

pub struct DeliverySimulator {
    timing: SimulatorTiming,
    state: Arc<watch::Sender<DeliveryProgress>>,
    task: Option<JoinHandle<()>>,
}

impl DeliverySimulator {
    /// Creates an idle tracker. A zero tick interval is raised to
    /// [`MIN_TICK_INTERVAL`].
    pub fn new(timing: SimulatorTiming) -> Self {
        let timing = SimulatorTiming {
            tick_interval: timing.tick_interval.max(MIN_TICK_INTERVAL),
            ..timing
        };
        let (state, _) = watch::channel(DeliveryProgress::default());
        Self {
            timing,
            state: Arc::new(state),
            task: None,
        }
    }

    /// Starts a tracking run from step 0, replacing any run in progress.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&mut self) {
        self.cancel();
        self.state.send_replace(DeliveryProgress::started());
        info!(
            tick_ms = self.timing.tick_interval.as_millis() as u64,
            "Delivery tracking started"
        );
        self.task = Some(tokio::spawn(drive(self.timing, self.state.clone())));
    }

    /// Cancels the pending timer, leaving the published state where it is.
    pub fn stop(&mut self) {
        if self.cancel() {
            info!("Delivery tracking stopped");
        }
    }

    /// A receiver that sees every state the tracker publishes.
    pub fn subscribe(&self) -> watch::Receiver<DeliveryProgress> {
        self.state.subscribe()
    }

    pub fn progress(&self) -> DeliveryProgress {
        self.state.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) if !task.is_finished() => {
                task.abort();
                true
            }
            _ => false,
        }
    }
}

impl Default for DeliverySimulator {
    fn default() -> Self {
        Self::new(SimulatorTiming::default())
    }
}

impl Drop for DeliverySimulator {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn drive(timing: SimulatorTiming, state: Arc<watch::Sender<DeliveryProgress>>) {
    let mut ticks = interval_at(Instant::now() + timing.tick_interval, timing.tick_interval);
    loop {
        ticks.tick().await;
        let mut outcome = TickOutcome::Idle;
        state.send_modify(|progress| outcome = progress.tick());
        match outcome {
            TickOutcome::Advanced => {
                debug!(progress = state.borrow().progress, "Delivery tick");
            }
            TickOutcome::Completed => {
                info!("Delivery complete");
                break;
            }
            TickOutcome::Idle => return,
        }
    }

    sleep(timing.terminal_hold).await;
    state.send_modify(DeliveryProgress::finish);
    debug!("Delivery tracking finished");
}
