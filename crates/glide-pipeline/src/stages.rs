//! Collaborator seams for container initialization.

use glide_core::{Container, ScrollRuntime, ScrollRuntimeFactory};

use crate::reveal::{RevealElement, RevealPlan};
use crate::timing::{ComputedDelay, DelayGroup};

/// Structural text/DOM preparation that later steps depend on (line and
/// letter splitting lives behind this seam).
pub trait TextPreparer {
    /// Prepare the container's markup.
    fn prepare(&self, container: &Container);
}

/// Markup access for reveal planning: what is configured where.
pub trait RevealMarkup {
    /// The container's on-load reveal elements with parsed configuration.
    fn load_reveals(&self, container: &Container) -> Vec<RevealElement>;

    /// The container's delay groups.
    fn delay_groups(&self, container: &Container) -> Vec<DelayGroup>;

    /// Write computed group delays back where the animation layer reads
    /// them.
    fn apply_group_delays(&self, container: &Container, delays: &[ComputedDelay]);
}

/// Prime and play the on-load reveal timeline.
pub trait LoadRevealStage {
    /// Put every planned element into its hidden end-state, before any
    /// loader or animation runs, so nothing flashes visible for a frame.
    fn prime(&self, container: &Container, plan: &RevealPlan);

    /// Begin the primed reveal animations.
    fn play(&self, container: &Container, plan: &RevealPlan);
}

/// Scroll-triggered reveals, attached once content is in the DOM.
pub trait ScrollRevealStage {
    /// Attach scroll-linked reveal triggers for the container.
    fn attach(&self, container: &Container);
}

/// Inert collaborator used when no animation engine is available; the
/// pipeline still runs every step and leaves the view in its final state.
#[derive(Debug, Default, Clone, Copy)]
pub struct InertStages;

impl TextPreparer for InertStages {
    fn prepare(&self, _container: &Container) {}
}

impl RevealMarkup for InertStages {
    fn load_reveals(&self, _container: &Container) -> Vec<RevealElement> {
        Vec::new()
    }

    fn delay_groups(&self, _container: &Container) -> Vec<DelayGroup> {
        Vec::new()
    }

    fn apply_group_delays(&self, _container: &Container, _delays: &[ComputedDelay]) {}
}

impl LoadRevealStage for InertStages {
    fn prime(&self, _container: &Container, _plan: &RevealPlan) {}

    fn play(&self, _container: &Container, _plan: &RevealPlan) {}
}

impl ScrollRevealStage for InertStages {
    fn attach(&self, _container: &Container) {}
}

/// Scroll runtime that does nothing; native scrolling stays in charge.
#[derive(Debug, Default, Clone, Copy)]
pub struct InertScroll;

impl ScrollRuntime for InertScroll {
    fn stop(&self) {}
    fn start(&self) {}
    fn refresh(&self) {}
}

impl ScrollRuntimeFactory for InertScroll {
    fn create(&self) -> Box<dyn ScrollRuntime> {
        Box::new(InertScroll)
    }
}
