//! Container initialization pipeline for the Glide page transition engine.
//!
//! This crate composes independent view-setup steps into one ordered,
//! idempotent sequence:
//! - `RevealConfig` - Typed per-element reveal configuration
//! - `plan_load_reveals` / `plan_group_delays` - Pure reveal planning
//! - `PageHooks` - Route-scoped init/destroy hooks
//! - `ContainerInitPipeline` - The pipeline itself

mod hooks;
mod pipeline;
mod reveal;
mod stages;
mod timing;

pub use hooks::*;
pub use pipeline::*;
pub use reveal::*;
pub use stages::*;
pub use timing::*;
