//! Navigation controller for the Glide page transition engine.
//!
//! This crate owns the view lifecycle:
//! - `InterceptPolicy` - Which link clicks become transitions
//! - `TransitionRequest` / `TransitionKind` - One intercepted navigation
//! - `NavigationController` - The leave/enter/settle state machine
//! - `Choreographer` trait - Visual choreography seam, with an instant
//!   degraded implementation

mod choreography;
mod controller;
mod error;
mod policy;
mod transition;

pub use choreography::*;
pub use controller::*;
pub use error::*;
pub use policy::*;
pub use transition::*;
