//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::DashboardState;

use crate::error_classifier::LogLevel;
use crate::events::{Event as WorkerEvent, EventType, FetchOutcome};
use crate::state::Applied;

impl DashboardState {
    /// Advance the animation tick and process queued worker events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(mut event) = self.pending_events.pop_front() {
            let outcome = event.outcome.take();
            let timestamp = event.timestamp.clone();

            // Add to activity logs for display
            self.add_to_activity_log(event);

            if let Some(outcome) = outcome {
                self.apply_outcome(outcome, timestamp);
            }
        }
    }

    /// Apply fetch progress to the market state and re-render the listing.
    fn apply_outcome(&mut self, outcome: FetchOutcome, timestamp: String) {
        let is_listing = matches!(outcome, FetchOutcome::Loaded { .. });
        match self.market.apply_outcome(outcome) {
            Applied::Applied => {
                if is_listing {
                    self.last_updated = Some(timestamp);
                }
                self.redraw_listing();
            }
            Applied::Stale => {
                self.add_to_activity_log(WorkerEvent::dashboard_with_level(
                    "Dropped a stale fetch result".to_string(),
                    EventType::Refresh,
                    LogLevel::Debug,
                ));
            }
        }
    }
}
