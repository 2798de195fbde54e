//! Transition requests, kinds, and reports.

use std::time::Duration;

use glide_core::TransitionPhase;

use crate::policy::LinkSource;

/// How a transition completes visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Skip visual choreography entirely; the outgoing container is removed
    /// immediately. Used for navigations from a persistent side panel.
    Panel,
    /// Animated leave and enter. With `sync`, the enter phase starts
    /// concurrently with the leave instead of waiting for it.
    Standard {
        /// Run leave and enter concurrently.
        sync: bool,
    },
}

impl Default for TransitionKind {
    fn default() -> Self {
        Self::Standard { sync: true }
    }
}

/// One intercepted navigation, consumed by the state machine.
///
/// At most one request is in flight at a time; a request arriving while
/// another runs is rejected, never queued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionRequest {
    /// Target URL or route namespace.
    pub target: String,
    /// The originating element, when the request came from a real click.
    pub source: Option<LinkSource>,
    /// Whether the navigation originated from the persistent side panel.
    pub from_panel: bool,
}

impl TransitionRequest {
    /// A synthetic request with no originating element.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    /// A request originating from a real link click.
    pub fn from_link(target: impl Into<String>, link: LinkSource) -> Self {
        Self {
            target: target.into(),
            source: Some(link),
            from_panel: false,
        }
    }

    /// Mark the request as coming from the persistent side panel.
    pub fn with_panel_origin(mut self) -> Self {
        self.from_panel = true;
        self
    }
}

/// Per-phase timings for a completed transition.
#[derive(Debug, Clone)]
pub struct TransitionReport {
    /// The kind that actually ran.
    pub kind: TransitionKind,
    /// When each phase was entered, relative to the request.
    pub phases: Vec<(TransitionPhase, Duration)>,
    /// Total wall time of the transition.
    pub total: Duration,
}

impl TransitionReport {
    /// When a phase was entered, if it was recorded.
    pub fn phase_elapsed(&self, phase: TransitionPhase) -> Option<Duration> {
        self.phases
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, d)| *d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kind_is_synced_standard() {
        assert_eq!(TransitionKind::default(), TransitionKind::Standard { sync: true });
    }

    #[test]
    fn test_panel_origin_flag() {
        let request = TransitionRequest::new("/work").with_panel_origin();
        assert!(request.from_panel);
        assert_eq!(request.target, "/work");
        assert!(request.source.is_none());
    }
}
