//! src/tasks/submit_task.rs
//! ============================================================================
//! # Submit Task: Simulated Submission Round-Trip
//!
//! After a valid submit the record has already been emitted; this task only
//! stands in for the network round-trip with a fixed-duration sleep, then
//! posts `Action::SubmissionComplete` so the view can move to Success. It is
//! not user-cancellable, matching the behavior being reproduced.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::controller::actions::Action;

/// Spawns the fixed-delay timer for a submitted record.
pub fn spawn_submission_timer(
    id: Uuid,
    delay: Duration,
    action_tx: mpsc::UnboundedSender<Action>,
) {
    debug!(record_id = %id, ?delay, "Starting submission timer");

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(e) = action_tx.send(Action::SubmissionComplete { id }) {
            warn!("Failed to deliver submission completion: {e}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn timer_posts_completion_with_the_record_id() {
        let id = Uuid::new_v4();
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_submission_timer(id, Duration::from_millis(10), tx);

        let action = rx.recv().await.unwrap();
        assert_eq!(action, Action::SubmissionComplete { id });
    }
}
