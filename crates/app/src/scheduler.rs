//! Tokio-backed [`Scheduler`].

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::ports::Scheduler;

/// Runs each scheduled task on its own tokio task after the delay.
///
/// The deadline is fixed when [`call_later`](Scheduler::call_later) is
/// called, not when the spawned task is first polled. The `JoinHandle` is
/// dropped, so tasks are detached. Must be used from within a tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn call_later<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let deadline = Instant::now() + delay;
        tracing::trace!(delay_secs = delay.as_secs_f64(), "deferred task scheduled");
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task.await;
        });
    }
}
