//! Error types for the navigation controller.

/// Result type for navigation operations.
pub type NavResult<T> = Result<T, NavError>;

/// Errors from the navigation controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// A transition is already running; overlapping transitions produce
    /// undefined visual state, so the new request is dropped at the request
    /// boundary.
    #[error("a transition is already in flight")]
    TransitionInFlight,
}
