//! Upload Timer Service
//!
//! Each simulated upload is a tokio task that sleeps for the configured delay
//! and then reports its ticket on a channel drained by the main loop. Tasks
//! are tracked per ticket so they can be aborted individually, and all of
//! them are aborted when the scheduler is dropped.

use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::log_debug;
use crate::messages::Effect;

/// Default time an upload placeholder stays visible
pub const DEFAULT_UPLOAD_DELAY_MS: u64 = 2000;

/// Sent when an upload's delay has elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadExpired {
    pub ticket: u64,
}

pub struct UploadScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<UploadExpired>,
    tasks: HashMap<u64, JoinHandle<()>>,
}

impl UploadScheduler {
    /// Create a scheduler and the receiver its timers report to
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<UploadExpired>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                tasks: HashMap::new(),
            },
            rx,
        )
    }

    /// Carry out an effect requested by the reducer
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleUpload { ticket, name } => self.schedule(ticket, &name),
            Effect::CancelUploads(tickets) => self.cancel(&tickets),
        }
    }

    /// Start the expiry timer for one upload (must run inside a tokio runtime)
    pub fn schedule(&mut self, ticket: u64, name: &str) {
        let tx = self.tx.clone();
        let delay = self.delay;
        log_debug(&format!("scheduling upload #{} ({}) for {:?}", ticket, name, delay));

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(UploadExpired { ticket });
        });

        if let Some(previous) = self.tasks.insert(ticket, handle) {
            previous.abort();
        }
    }

    /// Forget a timer whose expiry has been received
    pub fn acknowledge(&mut self, ticket: u64) {
        self.tasks.remove(&ticket);
    }

    /// Abort the timers of these uploads
    pub fn cancel(&mut self, tickets: &[u64]) {
        for ticket in tickets {
            if let Some(handle) = self.tasks.remove(ticket) {
                handle.abort();
                log_debug(&format!("cancelled upload timer #{}", ticket));
            }
        }
    }

    /// Abort every outstanding timer
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    /// Number of timers not yet acknowledged or cancelled
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for UploadScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_timers_fire_independently() {
        let (mut scheduler, mut rx) = UploadScheduler::new(Duration::from_millis(10));
        scheduler.schedule(0, "a.jpg");
        scheduler.schedule(1, "a.jpg");
        assert_eq!(scheduler.pending(), 2);

        let mut fired = Vec::new();
        for _ in 0..2 {
            let expired = timeout(Duration::from_secs(2), rx.recv())
                .await
                .expect("timer did not fire")
                .expect("channel closed");
            scheduler.acknowledge(expired.ticket);
            fired.push(expired.ticket);
        }
        fired.sort();
        assert_eq!(fired, vec![0, 1]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_timer_never_reports() {
        let (mut scheduler, mut rx) = UploadScheduler::new(Duration::from_millis(50));
        scheduler.schedule(7, "b.jpg");
        scheduler.cancel(&[7]);
        assert_eq!(scheduler.pending(), 0);

        let result = timeout(Duration::from_millis(200), rx.recv()).await;
        assert!(result.is_err(), "cancelled timer reported: {:?}", result);
    }

    #[tokio::test]
    async fn test_apply_effects() {
        let (mut scheduler, mut rx) = UploadScheduler::new(Duration::from_millis(50));
        scheduler.apply(Effect::ScheduleUpload {
            ticket: 1,
            name: "a".to_string(),
        });
        scheduler.apply(Effect::ScheduleUpload {
            ticket: 2,
            name: "b".to_string(),
        });
        scheduler.apply(Effect::CancelUploads(vec![1]));
        assert_eq!(scheduler.pending(), 1);

        let expired = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timer did not fire")
            .expect("channel closed");
        assert_eq!(expired.ticket, 2);
    }

    #[tokio::test]
    async fn test_drop_aborts_timers() {
        let (mut scheduler, mut rx) = UploadScheduler::new(Duration::from_millis(50));
        scheduler.schedule(3, "c.jpg");
        drop(scheduler);

        // All senders are gone once the aborted task is dropped
        let result = timeout(Duration::from_secs(2), rx.recv()).await;
        assert_eq!(result, Ok(None));
    }
}
