//! Transition lifecycle tracking.

use std::time::{Duration, Instant};

/// Phases of one navigation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Request accepted; outgoing view tearing down.
    Leaving,
    /// Incoming container animating in while its pipeline boots.
    Entering,
    /// Post-swap housekeeping.
    Settling,
    /// Transition finished; controller idle again.
    Idle,
}

/// Timing marks recorded across one transition.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: Vec<(TransitionPhase, Duration)>,
}

impl TimingContext {
    /// Create a new timing context.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: Vec::new(),
        }
    }

    /// Record that a phase was entered.
    pub fn mark(&mut self, phase: TransitionPhase) -> Duration {
        let elapsed = self.start.elapsed();
        self.marks.push((phase, elapsed));
        elapsed
    }

    /// Get elapsed time since the transition began.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time at which a phase was entered, if it was recorded.
    pub fn phase_elapsed(&self, phase: TransitionPhase) -> Option<Duration> {
        self.marks
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, d)| *d)
    }

    /// The recorded phase marks in order.
    pub fn marks(&self) -> &[(TransitionPhase, Duration)] {
        &self.marks
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer trait for transition lifecycle events.
pub trait LifecycleObserver {
    /// Called when a transition enters a phase.
    fn on_phase(&self, phase: TransitionPhase, elapsed: Duration);
}
