//! Public SDK for the Glide page transition engine.
//!
//! This crate re-exports the whole engine:
//!
//! ```ignore
//! use glide_sdk::prelude::*;
//!
//! let nav = Rc::new(NavigationContext::new());
//! let pipeline = Rc::new(
//!     ContainerInitPipeline::new(Rc::clone(&nav))
//!         .with_hooks(PageHooks::new().with_hook("home", HomePage)),
//! );
//! let controller = NavigationController::new(
//!     Rc::clone(&nav),
//!     Rc::clone(&pipeline),
//!     Rc::new(SlideChoreographer::new()),
//! );
//!
//! controller.boot(&first_container).await;
//! ```

pub use glide_core;
pub use glide_loader;
pub use glide_nav;
pub use glide_pipeline;

/// Prelude for convenient imports.
pub mod prelude {
    pub use glide_core::*;
    pub use glide_loader::*;
    pub use glide_nav::*;
    pub use glide_pipeline::*;
}
