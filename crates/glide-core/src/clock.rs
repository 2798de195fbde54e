//! Cooperative time source for holds and settles.

use std::time::Duration;

use async_trait::async_trait;

/// Time source the loader uses between checkpoints.
///
/// The embedder supplies one driven by its frame loop or timer facility.
#[async_trait(?Send)]
pub trait Clock {
    /// Suspend for roughly `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Clock that returns immediately.
///
/// Used when no timer facility exists, so every hold degrades to an
/// immediate state change, and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantClock;

#[async_trait(?Send)]
impl Clock for InstantClock {
    async fn sleep(&self, _duration: Duration) {}
}
