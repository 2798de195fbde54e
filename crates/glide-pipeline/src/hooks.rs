//! Route-scoped page hooks.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use glide_core::{Container, ViewContext};
use tracing::debug;

/// Page-specific behaviour for one route namespace.
#[async_trait(?Send)]
pub trait PageHook {
    /// Per-view setup. May be synchronous or suspend; may start the view's
    /// reveal early through `ctx.start_reveal_early()`.
    async fn init(&self, container: &Container, ctx: &ViewContext);

    /// Teardown when navigating away. Most routes rely on the cleanup
    /// registry instead and leave this empty.
    fn destroy(&self, _namespace: &str) {}
}

/// Registry mapping route namespaces to their hooks.
///
/// An unknown namespace simply has no hook; looking it up is not an error.
#[derive(Default)]
pub struct PageHooks {
    hooks: HashMap<String, Rc<dyn PageHook>>,
}

impl PageHooks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook for a namespace.
    pub fn with_hook(mut self, namespace: impl Into<String>, hook: impl PageHook + 'static) -> Self {
        self.hooks.insert(namespace.into(), Rc::new(hook));
        self
    }

    /// The hook for a namespace, if one is registered.
    pub fn get(&self, namespace: &str) -> Option<Rc<dyn PageHook>> {
        self.hooks.get(namespace).cloned()
    }

    /// Run a namespace's init hook; skipped silently when none exists.
    pub async fn run_init(&self, container: &Container, ctx: &ViewContext) {
        match self.get(&ctx.namespace) {
            Some(hook) => hook.init(container, ctx).await,
            None => debug!(namespace = %ctx.namespace, "no page hook registered"),
        }
    }

    /// Run a namespace's destroy hook; skipped silently when none exists.
    pub fn run_destroy(&self, namespace: &str) {
        if let Some(hook) = self.get(namespace) {
            hook.destroy(namespace);
        }
    }
}

impl fmt::Debug for PageHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut namespaces: Vec<&str> = self.hooks.keys().map(|k| k.as_str()).collect();
        namespaces.sort_unstable();
        f.debug_struct("PageHooks")
            .field("namespaces", &namespaces)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct RecordingHook {
        log: Rc<RefCell<Vec<String>>>,
    }

    #[async_trait(?Send)]
    impl PageHook for RecordingHook {
        async fn init(&self, container: &Container, ctx: &ViewContext) {
            self.log
                .borrow_mut()
                .push(format!("init:{}:{}", ctx.namespace, container.id));
        }

        fn destroy(&self, namespace: &str) {
            self.log.borrow_mut().push(format!("destroy:{namespace}"));
        }
    }

    #[tokio::test]
    async fn test_registered_hook_runs() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let hooks = PageHooks::new().with_hook(
            "home",
            RecordingHook {
                log: Rc::clone(&log),
            },
        );
        let container = Container::new("home", "main");
        let ctx = ViewContext::first_load("home");

        hooks.run_init(&container, &ctx).await;
        hooks.run_destroy("home");

        assert_eq!(*log.borrow(), vec!["init:home:main", "destroy:home"]);
    }

    #[tokio::test]
    async fn test_unknown_namespace_is_noop() {
        let hooks = PageHooks::new();
        let container = Container::new("mystery", "main");
        let ctx = ViewContext::navigation("mystery");

        hooks.run_init(&container, &ctx).await;
        hooks.run_destroy("mystery");

        assert!(hooks.get("mystery").is_none());
    }
}
