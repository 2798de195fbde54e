//! Core abstractions for the Glide page transition engine.
//!
//! This crate provides the fundamental types and traits:
//! - `CleanupRegistry` - Per-view resource teardown
//! - `FireOnce` - Single-fire latch wrapping a callback
//! - `ViewContext` / `Container` - Per-view state passed through the pipeline
//! - `NavigationContext` - Shared navigation state (scroll runtime, in-flight flag)
//! - `TransitionPhase` - Transition lifecycle tracking

mod cleanup;
mod clock;
mod context;
mod latch;
mod lifecycle;
mod view;

pub use cleanup::*;
pub use clock::*;
pub use context::*;
pub use latch::*;
pub use lifecycle::*;
pub use view::*;
