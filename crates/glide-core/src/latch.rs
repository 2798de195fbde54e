//! Single-fire latch around a callback.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Callback = Box<dyn FnOnce()>;

/// A clonable latch wrapping a callback that runs at most once.
///
/// Two independent code paths may race to fire the same latch (a loader
/// timeline reaching its end and a page-hook fallback); whichever arrives
/// first wins and every later call is a no-op. Clones share the same latch.
#[derive(Clone)]
pub struct FireOnce {
    inner: Rc<RefCell<Option<Callback>>>,
}

impl FireOnce {
    /// Wrap a callback in a fresh latch.
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Some(Box::new(callback)))),
        }
    }

    /// A latch that was already consumed; firing it does nothing.
    pub fn spent() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }

    /// Run the callback if it has not run yet.
    pub fn fire(&self) {
        let callback = self.inner.borrow_mut().take();
        if let Some(callback) = callback {
            callback();
        }
    }

    /// Whether the callback has already run.
    pub fn fired(&self) -> bool {
        self.inner.borrow().is_none()
    }
}

impl fmt::Debug for FireOnce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FireOnce").field("fired", &self.fired()).finish()
    }
}
