//! Declarative checkpoint schedule and tuning for the loader phase engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One stepped checkpoint of the progress counter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Progress value in `[0, 1]` the counter settles at.
    pub value: f32,
    /// How long the counter rests on this checkpoint before the next begins.
    pub hold: Duration,
}

impl Checkpoint {
    /// Create a checkpoint.
    pub fn new(value: f32, hold: Duration) -> Self {
        Self { value, hold }
    }

    /// The percent numeral displayed at this checkpoint.
    pub fn percent(&self) -> u32 {
        (self.value * 100.0).round() as u32
    }
}

/// Errors from schedule validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("schedule has no checkpoints")]
    Empty,

    #[error("checkpoint value {0} outside [0, 1]")]
    OutOfRange(f32),

    #[error("checkpoint {next} does not increase over {prev}")]
    NotIncreasing { prev: f32, next: f32 },

    #[error("final checkpoint is {0}, must be 1.0")]
    IncompleteFinal(f32),
}

/// Validated, strictly increasing checkpoint list ending at 1.0.
///
/// One schedule definition drives every loader variant; visual styles differ
/// only in the stage implementation, never in bespoke sequencing code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointSchedule {
    steps: Vec<Checkpoint>,
}

impl CheckpointSchedule {
    /// Validate a checkpoint list.
    pub fn new(steps: Vec<Checkpoint>) -> Result<Self, ScheduleError> {
        let last = match steps.last() {
            Some(last) => last,
            None => return Err(ScheduleError::Empty),
        };

        let mut prev: Option<f32> = None;
        for step in &steps {
            if !(0.0..=1.0).contains(&step.value) {
                return Err(ScheduleError::OutOfRange(step.value));
            }
            if let Some(prev) = prev {
                if step.value <= prev {
                    return Err(ScheduleError::NotIncreasing {
                        prev,
                        next: step.value,
                    });
                }
            }
            prev = Some(step.value);
        }

        if last.value < 1.0 {
            return Err(ScheduleError::IncompleteFinal(last.value));
        }

        Ok(Self { steps })
    }

    /// The stock boot schedule: a chunky four-step counter.
    pub fn boot() -> Self {
        Self {
            steps: vec![
                Checkpoint::new(0.0, Duration::from_millis(450)),
                Checkpoint::new(0.24, Duration::from_millis(550)),
                Checkpoint::new(0.72, Duration::from_millis(600)),
                Checkpoint::new(1.0, Duration::from_millis(550)),
            ],
        }
    }

    /// The checkpoints in order.
    pub fn steps(&self) -> &[Checkpoint] {
        &self.steps
    }
}

impl Default for CheckpointSchedule {
    fn default() -> Self {
        Self::boot()
    }
}

/// Easing and duration parameters shared by every checkpoint settle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderTuning {
    /// Duration of a numeral's enter animation.
    pub enter_duration: Duration,
    /// Duration of a numeral's leave animation.
    pub leave_duration: Duration,
    /// Delay between successive characters of one numeral.
    pub char_stagger: Duration,
    /// Easing name handed to the stage.
    pub ease: String,
}

impl Default for LoaderTuning {
    fn default() -> Self {
        Self {
            enter_duration: Duration::from_millis(900),
            leave_duration: Duration::from_millis(800),
            char_stagger: Duration::from_millis(60),
            ease: "expo.out".to_string(),
        }
    }
}
