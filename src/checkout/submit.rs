//! The seam between a validated form and "sending" it.
//!
//! There is no backend: the production [`SimulatedSubmitter`] waits a fixed
//! delay and reports success. Tests swap in [`InstantSubmitter`] so they never
//! sleep.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

/// Which form is being sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Contact,
    Order,
}

#[async_trait]
pub trait Submitter: Send + Sync {
    /// Sends a validated form. Always resolves; there is no failure path.
    async fn submit(&self, kind: SubmissionKind);
}

/// Sleep-then-succeed stand-in for a network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulatedSubmitter {
    #[serde(with = "crate::lifecycle::config::millis")]
    pub contact_delay: Duration,
    #[serde(with = "crate::lifecycle::config::millis")]
    pub order_delay: Duration,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self {
            contact_delay: Duration::from_millis(1500),
            order_delay: Duration::from_millis(2000),
        }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, kind: SubmissionKind) {
        let delay = match kind {
            SubmissionKind::Contact => self.contact_delay,
            SubmissionKind::Order => self.order_delay,
        };
        debug!(?kind, delay_ms = delay.as_millis() as u64, "Simulating submission");
        tokio::time::sleep(delay).await;
    }
}

/// Zero-delay submitter that counts what it was asked to send.
#[derive(Debug, Default)]
pub struct InstantSubmitter {
    contacts: AtomicUsize,
    orders: AtomicUsize,
}

impl InstantSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> usize {
        self.contacts.load(Ordering::SeqCst)
    }

    pub fn orders(&self) -> usize {
        self.orders.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Submitter for InstantSubmitter {
    async fn submit(&self, kind: SubmissionKind) {
        let counter = match kind {
            SubmissionKind::Contact => &self.contacts,
            SubmissionKind::Order => &self.orders,
        };
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submitter_waits_per_kind() {
        let submitter = SimulatedSubmitter::default();

        let started = Instant::now();
        submitter.submit(SubmissionKind::Contact).await;
        let waited = started.elapsed();
        assert!(waited >= Duration::from_millis(1500) && waited < Duration::from_millis(1600));

        let started = Instant::now();
        submitter.submit(SubmissionKind::Order).await;
        let waited = started.elapsed();
        assert!(waited >= Duration::from_millis(2000) && waited < Duration::from_millis(2100));
    }

    #[tokio::test]
    async fn test_instant_submitter_counts() {
        let submitter = InstantSubmitter::new();
        submitter.submit(SubmissionKind::Order).await;
        submitter.submit(SubmissionKind::Order).await;
        submitter.submit(SubmissionKind::Contact).await;
        assert_eq!(submitter.orders(), 2);
        assert_eq!(submitter.contacts(), 1);
    }
}
