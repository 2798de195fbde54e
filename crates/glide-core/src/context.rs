//! Shared navigation state and the scroll runtime seam.

use std::cell::{Cell, RefCell};
use std::fmt;

use tracing::debug;

use crate::cleanup::CleanupRegistry;

/// Smooth-scrolling subsystem created per view by the navigation layer.
///
/// Dropping the instance releases whatever the embedder bound (tickers,
/// listeners).
pub trait ScrollRuntime {
    /// Pause scroll updates; the outgoing view is about to leave.
    fn stop(&self);
    /// Resume scroll updates for the active view.
    fn start(&self);
    /// Recompute scroll-position-dependent measurement caches.
    fn refresh(&self);
}

/// Builds fresh scroll runtime instances.
pub trait ScrollRuntimeFactory {
    /// Create a runtime for the incoming view.
    fn create(&self) -> Box<dyn ScrollRuntime>;
}

/// Shared state for the navigation layer.
///
/// Owns what used to be hidden globals: the current scroll runtime and the
/// single in-flight-transition flag. Constructed once at application start
/// and shared by reference into the controller and the pipeline. At most one
/// scroll runtime exists at a time; creation always destroys the previous
/// instance first.
#[derive(Default)]
pub struct NavigationContext {
    cleanups: CleanupRegistry,
    scroll: RefCell<Option<Box<dyn ScrollRuntime>>>,
    transition_in_flight: Cell<bool>,
}

impl NavigationContext {
    /// Create the shared context.
    pub fn new() -> Self {
        Self::default()
    }

    /// The per-view cleanup registry.
    pub fn cleanups(&self) -> &CleanupRegistry {
        &self.cleanups
    }

    /// Claim the in-flight slot. Returns `false` if a transition is already
    /// running; the caller must then reject the request.
    pub fn begin_transition(&self) -> bool {
        if self.transition_in_flight.get() {
            return false;
        }
        self.transition_in_flight.set(true);
        true
    }

    /// Release the in-flight slot once a transition settles.
    pub fn end_transition(&self) {
        self.transition_in_flight.set(false);
    }

    /// Whether a transition is currently running.
    pub fn transition_in_flight(&self) -> bool {
        self.transition_in_flight.get()
    }

    /// Replace the scroll runtime with a fresh instance.
    ///
    /// Any previous instance is stopped and dropped first, so two runtimes
    /// never coexist.
    pub fn install_scroll(&self, factory: &dyn ScrollRuntimeFactory) {
        self.destroy_scroll();
        debug!("installing scroll runtime");
        *self.scroll.borrow_mut() = Some(factory.create());
    }

    /// Stop and drop the current scroll runtime, if any.
    pub fn destroy_scroll(&self) {
        let runtime = self.scroll.borrow_mut().take();
        if let Some(runtime) = runtime {
            runtime.stop();
        }
    }

    /// Pause the current scroll runtime; no-op when absent.
    pub fn stop_scroll(&self) {
        if let Some(runtime) = self.scroll.borrow().as_ref() {
            runtime.stop();
        }
    }

    /// Resume the current scroll runtime; no-op when absent.
    pub fn start_scroll(&self) {
        if let Some(runtime) = self.scroll.borrow().as_ref() {
            runtime.start();
        }
    }

    /// Refresh scroll measurement caches; no-op when absent.
    pub fn refresh_scroll(&self) {
        if let Some(runtime) = self.scroll.borrow().as_ref() {
            runtime.refresh();
        }
    }

    /// Whether a scroll runtime is currently installed.
    pub fn has_scroll(&self) -> bool {
        self.scroll.borrow().is_some()
    }
}

impl fmt::Debug for NavigationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationContext")
            .field("cleanups", &self.cleanups)
            .field("has_scroll", &self.has_scroll())
            .field("transition_in_flight", &self.transition_in_flight.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct RecordingRuntime {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl ScrollRuntime for RecordingRuntime {
        fn stop(&self) {
            self.log.borrow_mut().push(format!("{}:stop", self.name));
        }
        fn start(&self) {
            self.log.borrow_mut().push(format!("{}:start", self.name));
        }
        fn refresh(&self) {
            self.log.borrow_mut().push(format!("{}:refresh", self.name));
        }
    }

    impl Drop for RecordingRuntime {
        fn drop(&mut self) {
            self.log.borrow_mut().push(format!("{}:drop", self.name));
        }
    }

    struct RecordingFactory {
        names: RefCell<Vec<&'static str>>,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl ScrollRuntimeFactory for RecordingFactory {
        fn create(&self) -> Box<dyn ScrollRuntime> {
            let name = self.names.borrow_mut().remove(0);
            Box::new(RecordingRuntime {
                name,
                log: Rc::clone(&self.log),
            })
        }
    }

    // === In-flight flag ===

    #[test]
    fn test_begin_transition_is_test_and_set() {
        let ctx = NavigationContext::new();

        assert!(ctx.begin_transition());
        assert!(ctx.transition_in_flight());
        assert!(!ctx.begin_transition());

        ctx.end_transition();
        assert!(!ctx.transition_in_flight());
        assert!(ctx.begin_transition());
    }

    // === Scroll runtime ownership ===

    #[test]
    fn test_install_destroys_previous_runtime_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let factory = RecordingFactory {
            names: RefCell::new(vec!["first", "second"]),
            log: Rc::clone(&log),
        };
        let ctx = NavigationContext::new();

        ctx.install_scroll(&factory);
        ctx.install_scroll(&factory);

        assert_eq!(*log.borrow(), vec!["first:stop", "first:drop"]);
        assert!(ctx.has_scroll());
    }

    #[test]
    fn test_scroll_calls_are_noops_when_absent() {
        let ctx = NavigationContext::new();

        ctx.stop_scroll();
        ctx.start_scroll();
        ctx.refresh_scroll();
        ctx.destroy_scroll();

        assert!(!ctx.has_scroll());
    }

    #[test]
    fn test_destroy_stops_then_drops() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let factory = RecordingFactory {
            names: RefCell::new(vec!["only"]),
            log: Rc::clone(&log),
        };
        let ctx = NavigationContext::new();

        ctx.install_scroll(&factory);
        ctx.start_scroll();
        ctx.destroy_scroll();

        assert_eq!(
            *log.borrow(),
            vec!["only:start", "only:stop", "only:drop"]
        );
        assert!(!ctx.has_scroll());
    }
}
