//! Delivery tracker state and the single function that advances it.

use crate::model::DeliveryStep;
use serde::{Deserialize, Serialize};

/// What a call to [`DeliveryProgress::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The cursor moved forward and more steps remain.
    Advanced,
    /// The cursor reached the last step; the timer should stop.
    Completed,
    /// Nothing to do: tracking is not running or already complete.
    Idle,
}

/// Everything the tracker view renders.
///
/// The cursor counts completed steps. Steps with an index below the cursor
/// are complete and `progress` is `cursor / steps * 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryProgress {
    pub steps: Vec<DeliveryStep>,
    pub cursor: usize,
    pub progress: f64,
    pub running: bool,
}

impl Default for DeliveryProgress {
    fn default() -> Self {
        Self {
            steps: DeliveryStep::catalog(),
            cursor: 0,
            progress: 0.0,
            running: false,
        }
    }
}

impl DeliveryProgress {
    /// Fresh state for a new tracking run: all steps incomplete, 0%, running.
    pub fn started() -> Self {
        Self {
            running: true,
            ..Self::default()
        }
    }

    /// Advances the cursor by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.is_complete() {
            return TickOutcome::Idle;
        }
        self.cursor += 1;
        let cursor = self.cursor;
        for (index, step) in self.steps.iter_mut().enumerate() {
            step.completed = index < cursor;
        }
        self.progress = cursor as f64 / self.steps.len() as f64 * 100.0;

        if self.is_complete() {
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced
        }
    }

    /// Ends a run after the terminal hold. Completion flags are kept.
    pub fn finish(&mut self) {
        self.running = false;
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// The step currently in progress, shown pulsing while tracking.
    pub fn current_step(&self) -> Option<&DeliveryStep> {
        if self.running {
            self.steps.get(self.cursor)
        } else {
            None
        }
    }

    /// Progress rounded to a whole percent for the label next to the bar.
    pub fn percent_label(&self) -> String {
        format!("{}%", self.progress.round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeliveryStage;

    #[test]
    fn test_initial_state() {
        let progress = DeliveryProgress::default();
        assert_eq!(progress.steps.len(), 4);
        assert!(progress.steps.iter().all(|s| !s.completed));
        assert_eq!(progress.progress, 0.0);
        assert!(!progress.running);
        assert_eq!(progress.percent_label(), "0%");
    }

    #[test]
    fn test_ticks_complete_steps_in_order() {
        let mut progress = DeliveryProgress::started();
        assert_eq!(progress.current_step().unwrap().stage, DeliveryStage::Placed);

        assert_eq!(progress.tick(), TickOutcome::Advanced);
        assert_eq!(progress.progress, 25.0);
        let done: Vec<_> = progress.steps.iter().map(|s| s.completed).collect();
        assert_eq!(done, [true, false, false, false]);
        assert_eq!(progress.current_step().unwrap().stage, DeliveryStage::Preparing);

        assert_eq!(progress.tick(), TickOutcome::Advanced);
        assert_eq!(progress.tick(), TickOutcome::Advanced);
        assert_eq!(progress.percent_label(), "75%");
        assert_eq!(progress.tick(), TickOutcome::Completed);
        assert_eq!(progress.progress, 100.0);
        assert!(progress.steps.iter().all(|s| s.completed));
    }

    #[test]
    fn test_tick_after_completion_is_idle() {
        let mut progress = DeliveryProgress::started();
        for _ in 0..4 {
            progress.tick();
        }
        let before = progress.clone();
        assert_eq!(progress.tick(), TickOutcome::Idle);
        assert_eq!(progress, before);
    }

    #[test]
    fn test_tick_when_not_running_is_idle() {
        let mut progress = DeliveryProgress::default();
        assert_eq!(progress.tick(), TickOutcome::Idle);
        assert_eq!(progress.cursor, 0);
    }

    #[test]
    fn test_finish_keeps_completion_flags() {
        let mut progress = DeliveryProgress::started();
        for _ in 0..4 {
            progress.tick();
        }
        progress.finish();
        assert!(!progress.running);
        assert!(progress.current_step().is_none());
        assert!(progress.steps.iter().all(|s| s.completed));
    }
}
