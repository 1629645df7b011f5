//! Frame scheduling.
//!
//! The host calls into the game once per display frame with the wall time
//! that passed. The scheduler decides how many simulation steps that frame
//! runs and how long each one is.

use serde::{Deserialize, Serialize};

/// How host frame time turns into simulation steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Timestep {
    /// One step of `nominal` seconds per host frame, whatever the frame
    /// took. Perceived speed follows the display's frame rate.
    PerFrame { nominal: f32 },

    /// Steps of exactly `step` seconds from an accumulator. At most
    /// `max_steps` run per host frame; any backlog beyond that is dropped.
    Fixed { step: f32, max_steps: u32 },

    /// One step of the real elapsed time, capped at `max_delta`.
    Variable { max_delta: f32 },
}

impl Default for Timestep {
    fn default() -> Self {
        Timestep::PerFrame { nominal: 0.016 }
    }
}

/// Steps to run for one host frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    /// Number of simulation steps.
    pub steps: u32,

    /// Length of each step (seconds).
    pub delta: f32,
}

impl StepPlan {
    pub const NONE: StepPlan = StepPlan {
        steps: 0,
        delta: 0.0,
    };
}

/// Turns host frame times into simulation steps.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    timestep: Timestep,
    accumulator: f32,
}

impl FrameScheduler {
    pub fn new(timestep: Timestep) -> Self {
        Self {
            timestep,
            accumulator: 0.0,
        }
    }

    pub fn timestep(&self) -> Timestep {
        self.timestep
    }

    /// Plan the steps for a host frame that took `elapsed` seconds.
    pub fn plan(&mut self, elapsed: f32) -> StepPlan {
        let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };

        match self.timestep {
            Timestep::PerFrame { nominal } => StepPlan {
                steps: 1,
                delta: nominal,
            },
            Timestep::Fixed { step, max_steps } => {
                if step <= 0.0 {
                    return StepPlan::NONE;
                }
                self.accumulator += elapsed;

                let due = (self.accumulator / step).floor() as u32;
                let steps = due.min(max_steps);
                if due > max_steps {
                    log::debug!("dropping {} simulation steps of backlog", due - max_steps);
                    self.accumulator = 0.0;
                } else {
                    self.accumulator -= steps as f32 * step;
                }

                StepPlan { steps, delta: step }
            }
            Timestep::Variable { max_delta } => {
                if elapsed == 0.0 {
                    return StepPlan::NONE;
                }
                StepPlan {
                    steps: 1,
                    delta: elapsed.min(max_delta),
                }
            }
        }
    }

    /// Plan a host frame and run `step` for each simulation step.
    ///
    /// Returns the number of steps run.
    pub fn run<F: FnMut(f32)>(&mut self, elapsed: f32, mut step: F) -> u32 {
        let plan = self.plan(elapsed);
        for _ in 0..plan.steps {
            step(plan.delta);
        }
        plan.steps
    }
}
