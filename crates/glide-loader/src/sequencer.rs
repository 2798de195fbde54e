//! Loader phase engine.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use glide_core::{Clock, FireOnce};
use tracing::debug;

use crate::progress::{LoaderPhase, LoaderProgressState};
use crate::schedule::{CheckpointSchedule, LoaderTuning};
use crate::stage::{LoaderStage, TravelMetrics};

/// Drives the boot loader through `Hidden → Showing → Progressing → Exiting
/// → Hidden`, at most once per page load.
///
/// The sequencer owns ordering, progress monotonicity, and the single reveal
/// handoff; the stage owns every pixel. One sequencer serves every visual
/// loader variant via its `CheckpointSchedule` and `LoaderTuning`.
pub struct LoaderSequencer {
    stage: Rc<dyn LoaderStage>,
    clock: Rc<dyn Clock>,
    schedule: CheckpointSchedule,
    tuning: LoaderTuning,
    state: RefCell<LoaderProgressState>,
    metrics: Cell<TravelMetrics>,
    reveal: FireOnce,
    ran: Cell<bool>,
}

impl LoaderSequencer {
    /// Create a sequencer with the stock boot schedule and tuning.
    pub fn new(stage: Rc<dyn LoaderStage>, clock: Rc<dyn Clock>) -> Self {
        Self {
            stage,
            clock,
            schedule: CheckpointSchedule::default(),
            tuning: LoaderTuning::default(),
            state: RefCell::new(LoaderProgressState::new()),
            metrics: Cell::new(TravelMetrics::default()),
            reveal: FireOnce::new(|| {}),
            ran: Cell::new(false),
        }
    }

    /// Replace the checkpoint schedule.
    pub fn with_schedule(mut self, schedule: CheckpointSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Replace the settle tuning.
    pub fn with_tuning(mut self, tuning: LoaderTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Set the callback that unblocks content reveal.
    pub fn on_reveal(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.reveal = FireOnce::new(callback);
        self
    }

    /// Share an existing reveal latch instead of wrapping a new callback.
    ///
    /// Lets the container pipeline's guarded starter double as the loader's
    /// handoff, so both producer paths go through one latch.
    pub fn with_reveal_signal(mut self, signal: FireOnce) -> Self {
        self.reveal = signal;
        self
    }

    /// The reveal latch. A fallback path may fire it directly; whichever of
    /// the two producers arrives first wins.
    pub fn reveal_signal(&self) -> FireOnce {
        self.reveal.clone()
    }

    /// Current loader phase.
    pub fn phase(&self) -> LoaderPhase {
        self.state.borrow().phase()
    }

    /// Current progress value in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.state.borrow().value()
    }

    /// Whether the sequence has started (and possibly finished) this load.
    pub fn has_run(&self) -> bool {
        self.ran.get()
    }

    /// Run the full boot sequence.
    ///
    /// No-op when the loader markup is absent or the sequence already ran
    /// this page load. The reveal latch fires before the fade begins, so
    /// content reveal is underway by the time the loader turns transparent.
    pub async fn run(&self) {
        if !self.stage.is_present() {
            debug!("loader markup absent; skipping boot sequence");
            return;
        }
        if self.ran.replace(true) {
            debug!("loader already ran this page load");
            return;
        }

        self.state.borrow_mut().set_phase(LoaderPhase::Showing);
        self.stage.show();
        // Measure only once the loader is actually visible.
        self.metrics.set(self.stage.measure());
        self.apply_offset();

        self.state.borrow_mut().set_phase(LoaderPhase::Progressing);
        for step in self.schedule.steps() {
            let value = self.state.borrow_mut().advance_to(step.value);
            self.apply_offset();
            let percent = (value * 100.0).round() as u32;
            self.stage.settle(percent, &self.tuning).await;
            self.clock.sleep(step.hold).await;
        }

        self.state.borrow_mut().set_phase(LoaderPhase::Exiting);
        self.reveal.fire();
        self.stage.fade_out(&self.tuning).await;
        self.stage.hide();
        self.state.borrow_mut().set_phase(LoaderPhase::Hidden);
    }

    /// Recompute measurements after a viewport resize.
    ///
    /// The counter position is re-derived from the current progress value,
    /// never reset, so a mid-animation resize cannot make it jump.
    pub fn handle_resize(&self) {
        if !self.stage.is_present() {
            return;
        }
        if self.state.borrow().phase() == LoaderPhase::Hidden {
            return;
        }
        self.metrics.set(self.stage.measure());
        self.apply_offset();
    }

    /// Hide the loader immediately.
    ///
    /// Safe to call even if `run` never happened; a page without loader
    /// markup makes this a no-op.
    pub fn hide(&self) {
        if !self.stage.is_present() {
            return;
        }
        self.stage.hide();
        self.state.borrow_mut().set_phase(LoaderPhase::Hidden);
    }

    fn apply_offset(&self) {
        let offset = self.metrics.get().offset_for(self.state.borrow().value());
        self.stage.set_counter_offset(offset);
    }
}

impl fmt::Debug for LoaderSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderSequencer")
            .field("phase", &self.phase())
            .field("progress", &self.progress())
            .field("ran", &self.ran.get())
            .finish()
    }
}
