//! Recurring policy-refresh task
//!
//! A single restartable background task firing a refresh hook at a
//! fixed cadence. The hook is a placeholder for future policy
//! retrieval; its contract for extension: it runs on the cadence, it
//! must not panic, and failures are logged without breaking the loop.

use crate::error::Result;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

/// Cancellable handle for the recurring refresh task
///
/// `start` replaces any previously running task instead of stacking a
/// second one; `stop` is a no-op when nothing is running. Dropping the
/// scheduler aborts the task.
#[derive(Default)]
pub struct RefreshScheduler {
    task: Option<JoinHandle<()>>,
    interval_ms: Option<u64>,
}

impl RefreshScheduler {
    /// Create a scheduler with no task running
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin firing the refresh hook every `interval_ms` milliseconds,
    /// cancelling any existing task first
    pub fn start(&mut self, interval_ms: u64) {
        self.stop();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_millis(interval_ms));
            // The first interval tick completes immediately; consume it
            // so the hook first fires one full interval after start.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = refresh_policies().await {
                    tracing::warn!(error = %e, "Policy refresh failed");
                }
            }
        });

        self.task = Some(handle);
        self.interval_ms = Some(interval_ms);
        tracing::debug!(interval_ms, "Refresh scheduler started");
    }

    /// Cancel the task if running; no-op otherwise
    pub fn stop(&mut self) {
        if let Some(handle) = self.task.take() {
            handle.abort();
            tracing::debug!("Refresh scheduler stopped");
        }
        self.interval_ms = None;
    }

    /// Whether a refresh task is currently scheduled
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// The cadence of the running task, if any
    pub fn interval_ms(&self) -> Option<u64> {
        self.interval_ms
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Placeholder for the future policy-fetch operation
///
/// In-flight suspension here must not delay the next tick beyond the
/// configured cadence; keep long work out of this hook.
async fn refresh_policies() -> Result<()> {
    tracing::debug!("Policy refresh tick (no-op)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start_and_stop() {
        let mut scheduler = RefreshScheduler::new();
        assert!(!scheduler.is_running());

        scheduler.start(50);
        assert!(scheduler.is_running());
        assert_eq!(scheduler.interval_ms(), Some(50));

        scheduler.stop();
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.interval_ms(), None);
    }

    #[tokio::test]
    async fn test_stop_is_idempotent() {
        let mut scheduler = RefreshScheduler::new();
        scheduler.stop();
        scheduler.stop();
        assert!(!scheduler.is_running());
    }

    #[tokio::test]
    async fn test_restart_replaces_not_stacks() {
        let mut scheduler = RefreshScheduler::new();
        scheduler.start(1_000);
        scheduler.start(25);

        // One task, at the second cadence
        assert!(scheduler.is_running());
        assert_eq!(scheduler.interval_ms(), Some(25));

        scheduler.stop();
    }

    #[tokio::test]
    async fn test_task_survives_ticks() {
        let mut scheduler = RefreshScheduler::new();
        scheduler.start(5);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(scheduler.is_running());
        scheduler.stop();
    }

    #[tokio::test]
    async fn test_refresh_hook_is_noop() {
        assert!(refresh_policies().await.is_ok());
    }
}
