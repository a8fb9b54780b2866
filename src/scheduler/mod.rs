//! Periodic background jobs
//!
//! Each task runs its job immediately, then once per period. A tick awaits
//! the job before the next one starts, so a job never overlaps itself.

use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running periodic task
///
/// Dropping the handle leaves the task running; call [`PeriodicTask::cancel`].
pub struct PeriodicTask {
    name: &'static str,
    cancel_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl PeriodicTask {
    /// Spawn `job` on the current runtime
    pub fn spawn<F, Fut>(name: &'static str, period: Duration, mut job: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        let join = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut detached = false;

            tracing::debug!(task = name, period_secs = period.as_secs_f64(), "Periodic task started");

            loop {
                tokio::select! {
                    biased;

                    changed = cancel_rx.changed(), if !detached => match changed {
                        Ok(()) if *cancel_rx.borrow() => break,
                        Ok(()) => {}
                        // Handle dropped without cancelling
                        Err(_) => detached = true,
                    },

                    _ = interval.tick() => {
                        job().await;
                    }
                }
            }

            tracing::debug!(task = name, "Periodic task stopped");
        });

        Self {
            name,
            cancel_tx,
            join,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Stop after the current job, if any, completes
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Cancel and wait for the task to exit
    pub async fn shutdown(self) {
        self.cancel();
        if let Err(e) = self.join.await {
            tracing::warn!(task = self.name, error = %e, "Periodic task ended abnormally");
        }
    }
}
