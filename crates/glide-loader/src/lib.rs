//! Phased boot loader for the Glide page transition engine.
//!
//! This crate drives the first-load loader sequence:
//! - `CheckpointSchedule` - Declarative stepped progress checkpoints
//! - `LoaderSequencer` - Phase engine (show, progress, reveal handoff, fade)
//! - `LoaderStage` trait - Visual surface supplied by the embedder
//! - `LoaderProgressState` - Monotonic progress tracking

mod counter;
mod progress;
mod schedule;
mod sequencer;
mod stage;

pub use counter::*;
pub use progress::*;
pub use schedule::*;
pub use sequencer::*;
pub use stage::*;
