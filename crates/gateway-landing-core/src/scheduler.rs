//! Timer capability

use std::time::Duration;

use crate::error::Result;

/// Single-threaded timer source.
///
/// Callbacks run later as their own events, never re-entrantly from inside
/// `set_interval` or `set_timeout`.
pub trait Scheduler {
    /// Cancellation token for a scheduled callback
    type Handle;

    /// Run `callback` every `period`, starting one period from now
    fn set_interval(&self, period: Duration, callback: Box<dyn Fn()>) -> Result<Self::Handle>;

    /// Run `callback` once after `delay`
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Result<Self::Handle>;

    /// Cancel a pending callback. Cancelling a fired timeout is a no-op.
    fn cancel(&self, handle: Self::Handle);
}
