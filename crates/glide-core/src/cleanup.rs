//! Per-view cleanup registry.

use std::cell::RefCell;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

type Release = Box<dyn FnOnce()>;

/// Registry of release callbacks scoped to the current view.
///
/// Anything that binds a listener, observer, timer, or animation handle
/// registers a release here. The navigation layer drains the registry before
/// the next view starts, so no resource outlives its originating view.
///
/// There is no unregister: releases run at most once and are disposable.
#[derive(Default)]
pub struct CleanupRegistry {
    releases: RefCell<Vec<Release>>,
}

impl CleanupRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a release callback to run on the next flush.
    pub fn register(&self, release: impl FnOnce() + 'static) {
        self.releases.borrow_mut().push(Box::new(release));
    }

    /// Register a release if one was provided; `None` is silently ignored.
    ///
    /// Call sites often hold optional collaborators and hand over whatever
    /// teardown they happen to have.
    pub fn register_optional(&self, release: Option<impl FnOnce() + 'static>) {
        if let Some(release) = release {
            self.register(release);
        }
    }

    /// Number of releases currently queued.
    pub fn len(&self) -> usize {
        self.releases.borrow().len()
    }

    /// Whether the registry holds no releases.
    pub fn is_empty(&self) -> bool {
        self.releases.borrow().is_empty()
    }

    /// Run every queued release in registration order and clear the registry.
    ///
    /// The list is swapped out before draining, so a release that registers
    /// new cleanups lands in a fresh list and survives into the *next* flush.
    /// A panicking release is caught and logged; the remaining releases still
    /// run. This method never panics.
    pub fn flush(&self) {
        let drained = self.releases.take();
        if drained.is_empty() {
            return;
        }
        debug!(count = drained.len(), "flushing view cleanups");
        for release in drained {
            if catch_unwind(AssertUnwindSafe(release)).is_err() {
                warn!("cleanup release panicked; remaining releases still run");
            }
        }
    }
}

impl fmt::Debug for CleanupRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanupRegistry")
            .field("pending", &self.len())
            .finish()
    }
}
