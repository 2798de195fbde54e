//! Transition choreography seam.

use async_trait::async_trait;
use glide_core::Container;

/// Visual choreography of a transition, supplied by the embedder.
///
/// The controller only sequences these calls; how a container slides, fades,
/// or scales is not its business. When no animation engine is available,
/// `InstantChoreographer` keeps every transition correct without polish.
#[async_trait(?Send)]
pub trait Choreographer {
    /// Animated leave for the outgoing container.
    async fn leave(&self, outgoing: &Container);

    /// Animated enter for the incoming container.
    async fn enter(&self, incoming: &Container);

    /// Remove the outgoing container without animation.
    fn remove_instant(&self, outgoing: &Container);

    /// Clear transient inline animation properties left on the new
    /// container by the transition.
    fn clear_transition_props(&self, incoming: &Container);

    /// Restore current-page indicator styling on persistent navigation
    /// links.
    fn reset_active_links(&self);

    /// Reset the scroll position policy after the swap.
    fn reset_scroll_position(&self);

    /// Toggle the busy cursor marker while a transition runs.
    fn set_busy(&self, busy: bool);
}

/// Degraded choreography used when no animation engine is available.
///
/// Every step is an immediate synchronous state change: the right container
/// ends up visible, just without the ride.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantChoreographer;

#[async_trait(?Send)]
impl Choreographer for InstantChoreographer {
    async fn leave(&self, _outgoing: &Container) {}

    async fn enter(&self, _incoming: &Container) {}

    fn remove_instant(&self, _outgoing: &Container) {}

    fn clear_transition_props(&self, _incoming: &Container) {}

    fn reset_active_links(&self) {}

    fn reset_scroll_position(&self) {}

    fn set_busy(&self, _busy: bool) {}
}
