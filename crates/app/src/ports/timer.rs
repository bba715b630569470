//! Timer port.

use std::future::Future;
use std::time::Duration;

/// Suspends the calling task without blocking the event loop.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<T: Timer> Timer for std::rc::Rc<T> {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }
}
