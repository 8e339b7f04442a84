//! Scheduler port — run a piece of work later, without waiting for it.

use std::future::Future;
use std::time::Duration;

/// Delayed-call primitive.
///
/// Implementations must not run `task` before `delay` has elapsed. The
/// caller gets no handle back: scheduled work cannot be cancelled or joined.
pub trait Scheduler: Send + Sync {
    fn call_later<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static;
}
