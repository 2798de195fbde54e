//! Container descriptor and per-view context.

use std::cell::RefCell;
use std::fmt;

use crate::latch::FireOnce;

/// Descriptor for one swappable document container.
///
/// The embedder maps `id` back to the real subtree; Glide only sequences
/// what happens to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Route namespace attached to the container markup.
    pub namespace: String,
    /// Stable identifier for the subtree this container represents.
    pub id: String,
}

impl Container {
    /// Create a container descriptor.
    pub fn new(namespace: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            id: id.into(),
        }
    }
}

/// Per-view context threaded by reference through every pipeline step.
///
/// Created fresh for each container initialization and discarded when the
/// run returns. The reveal starter is attached once, mid-pipeline, so a
/// later-running page hook may begin the load reveal early.
pub struct ViewContext {
    /// Whether this is the very first load of the page.
    pub is_first_load: bool,
    /// Whether this view was reached through an intercepted navigation.
    pub is_navigation: bool,
    /// Route namespace of the active container.
    pub namespace: String,
    reveal_starter: RefCell<Option<FireOnce>>,
}

impl ViewContext {
    /// Context for the very first load of the page.
    pub fn first_load(namespace: impl Into<String>) -> Self {
        Self {
            is_first_load: true,
            is_navigation: false,
            namespace: namespace.into(),
            reveal_starter: RefCell::new(None),
        }
    }

    /// Context for a view reached through navigation.
    pub fn navigation(namespace: impl Into<String>) -> Self {
        Self {
            is_first_load: false,
            is_navigation: true,
            namespace: namespace.into(),
            reveal_starter: RefCell::new(None),
        }
    }

    /// Attach the guarded starter for this view's load reveal.
    pub fn set_reveal_starter(&self, starter: FireOnce) {
        *self.reveal_starter.borrow_mut() = Some(starter);
    }

    /// The guarded starter, if the pipeline has attached one yet.
    pub fn reveal_starter(&self) -> Option<FireOnce> {
        self.reveal_starter.borrow().clone()
    }

    /// Begin the load reveal ahead of the pipeline's own fallback.
    ///
    /// No-op when no starter is attached or it already fired.
    pub fn start_reveal_early(&self) {
        let starter = self.reveal_starter();
        if let Some(starter) = starter {
            starter.fire();
        }
    }
}

impl fmt::Debug for ViewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewContext")
            .field("is_first_load", &self.is_first_load)
            .field("is_navigation", &self.is_navigation)
            .field("namespace", &self.namespace)
            .field("reveal_starter", &self.reveal_starter.borrow())
            .finish()
    }
}
