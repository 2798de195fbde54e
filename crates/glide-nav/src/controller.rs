//! The navigation transition state machine.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use futures::future;
use glide_core::{
    Container, LifecycleObserver, NavigationContext, TimingContext, TransitionPhase, ViewContext,
};
use glide_pipeline::ContainerInitPipeline;
use tracing::debug;

use crate::choreography::Choreographer;
use crate::error::{NavError, NavResult};
use crate::transition::{TransitionKind, TransitionReport, TransitionRequest};

type KindPredicate = Box<dyn Fn(&TransitionRequest) -> TransitionKind>;

/// Sequences `Idle → Leaving → Entering → Settling → Idle` for every
/// accepted navigation.
///
/// Exactly one transition runs at a time; a request arriving mid-flight is
/// rejected at the request boundary and dropped. An already-running
/// transition always runs to completion.
pub struct NavigationController {
    nav: Rc<NavigationContext>,
    pipeline: Rc<ContainerInitPipeline>,
    choreographer: Rc<dyn Choreographer>,
    kind_for: KindPredicate,
    observer: Option<Rc<dyn LifecycleObserver>>,
    state: Cell<TransitionPhase>,
}

impl NavigationController {
    /// Create a controller over the shared context and pipeline.
    pub fn new(
        nav: Rc<NavigationContext>,
        pipeline: Rc<ContainerInitPipeline>,
        choreographer: Rc<dyn Choreographer>,
    ) -> Self {
        Self {
            nav,
            pipeline,
            choreographer,
            kind_for: Box::new(|request| {
                if request.from_panel {
                    TransitionKind::Panel
                } else {
                    TransitionKind::default()
                }
            }),
            observer: None,
            state: Cell::new(TransitionPhase::Idle),
        }
    }

    /// Replace the predicate that picks a transition kind per request.
    pub fn with_kind_predicate(
        mut self,
        kind_for: impl Fn(&TransitionRequest) -> TransitionKind + 'static,
    ) -> Self {
        self.kind_for = Box::new(kind_for);
        self
    }

    /// Attach a lifecycle observer.
    pub fn with_observer(mut self, observer: impl LifecycleObserver + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    /// The controller's current phase.
    pub fn state(&self) -> TransitionPhase {
        self.state.get()
    }

    /// First-load entry point: initialize the initial container once,
    /// without any transition choreography.
    pub async fn boot(&self, container: &Container) {
        debug!(namespace = %container.namespace, "first load boot");
        self.choreographer.reset_active_links();
        let ctx = ViewContext::first_load(&container.namespace);
        self.pipeline.run(container, &ctx).await;
    }

    /// Run one transition from `outgoing` to `incoming`.
    ///
    /// Rejects immediately with [`NavError::TransitionInFlight`] when a
    /// transition is already running; the rejected request is dropped, not
    /// queued.
    pub async fn navigate(
        &self,
        request: TransitionRequest,
        outgoing: &Container,
        incoming: &Container,
    ) -> NavResult<TransitionReport> {
        if !self.nav.begin_transition() {
            debug!(target = %request.target, "transition in flight; request dropped");
            return Err(NavError::TransitionInFlight);
        }

        let kind = (self.kind_for)(&request);
        let mut timing = TimingContext::new();
        self.choreographer.set_busy(true);

        // Leaving: teardown strictly precedes any choreography so nothing
        // created by the outgoing view survives into the next one.
        self.mark(&mut timing, TransitionPhase::Leaving);
        self.nav.stop_scroll();
        self.nav.cleanups().flush();
        self.nav.destroy_scroll();
        self.pipeline.destroy_route(&outgoing.namespace);

        let ctx = ViewContext::navigation(&incoming.namespace);
        match kind {
            TransitionKind::Panel => {
                self.choreographer.remove_instant(outgoing);
                self.mark(&mut timing, TransitionPhase::Entering);
                self.pipeline.run(incoming, &ctx).await;
            }
            TransitionKind::Standard { sync: false } => {
                self.choreographer.leave(outgoing).await;
                self.mark(&mut timing, TransitionPhase::Entering);
                future::join(
                    self.choreographer.enter(incoming),
                    self.pipeline.run(incoming, &ctx),
                )
                .await;
            }
            TransitionKind::Standard { sync: true } => {
                let leave = self.choreographer.leave(outgoing);
                self.mark(&mut timing, TransitionPhase::Entering);
                future::join3(
                    leave,
                    self.choreographer.enter(incoming),
                    self.pipeline.run(incoming, &ctx),
                )
                .await;
            }
        }

        // Settling: exactly once per transition, whatever kind ran.
        self.mark(&mut timing, TransitionPhase::Settling);
        self.choreographer.reset_active_links();
        self.choreographer.clear_transition_props(incoming);
        self.choreographer.reset_scroll_position();
        self.choreographer.set_busy(false);

        self.mark(&mut timing, TransitionPhase::Idle);
        self.nav.end_transition();

        Ok(TransitionReport {
            kind,
            phases: timing.marks().to_vec(),
            total: timing.elapsed(),
        })
    }

    fn mark(&self, timing: &mut TimingContext, phase: TransitionPhase) {
        self.state.set(phase);
        let elapsed = timing.mark(phase);
        if let Some(observer) = &self.observer {
            observer.on_phase(phase, elapsed);
        }
    }
}

impl fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("state", &self.state.get())
            .field("in_flight", &self.nav.transition_in_flight())
            .finish()
    }
}
