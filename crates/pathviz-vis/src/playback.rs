//! Playback controls driving a stepper along the trace timeline.
//!
//! The controller owns *when* to advance; the stepper owns *what* one
//! step means. Nothing here schedules time: the service layer (or any
//! other driver) translates wall-clock pacing into [`Playback::tick`]
//! calls.

use pathviz_engine::TraceEvent;
use serde::{Deserialize, Serialize};

use crate::state::VisualizationState;
use crate::stepper::TraceStepper;

/// Playback speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlaybackSpeed {
    /// Pause playback
    Paused,
    /// 0.25x speed
    QuarterSpeed,
    /// 0.5x speed
    HalfSpeed,
    /// Normal speed (1x)
    Normal,
    /// 2x speed
    Double,
    /// 4x speed
    Quadruple,
    /// 10x speed
    TenX,
    /// Maximum speed (jump straight to the ending state)
    Maximum,
}

impl PlaybackSpeed {
    /// Get the speed multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            PlaybackSpeed::Paused => 0.0,
            PlaybackSpeed::QuarterSpeed => 0.25,
            PlaybackSpeed::HalfSpeed => 0.5,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::Double => 2.0,
            PlaybackSpeed::Quadruple => 4.0,
            PlaybackSpeed::TenX => 10.0,
            PlaybackSpeed::Maximum => f64::INFINITY,
        }
    }

    /// Get milliseconds per step at this speed.
    pub fn ms_per_step(&self, base_ms: u64) -> Option<u64> {
        match self {
            PlaybackSpeed::Paused => None,
            PlaybackSpeed::Maximum => Some(0),
            speed => Some((base_ms as f64 / speed.multiplier()) as u64),
        }
    }
}

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Stopped at the beginning
    Stopped,
    /// Advancing on each tick
    Playing,
    /// Paused mid-run
    Paused,
    /// The trace has been fully consumed
    Finished,
}

/// Playback controller for one run's trace.
pub struct Playback {
    stepper: TraceStepper,
    state: PlaybackState,
    speed: PlaybackSpeed,
}

impl Playback {
    /// Wrap a stepper. An already-exhausted (empty-log) stepper starts
    /// out `Finished`.
    pub fn new(stepper: TraceStepper) -> Self {
        let state = if stepper.is_done() {
            PlaybackState::Finished
        } else {
            PlaybackState::Stopped
        };
        Self {
            stepper,
            state,
            speed: PlaybackSpeed::Normal,
        }
    }

    /// The snapshot to render.
    pub fn snapshot(&self) -> &VisualizationState {
        self.stepper.state()
    }

    /// Number of events already folded.
    pub fn current_step(&self) -> usize {
        self.stepper.cursor()
    }

    /// Total number of events in the trace.
    pub fn total_steps(&self) -> usize {
        self.stepper.len()
    }

    /// Get the current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Get the current playback speed.
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// Start playback. Restarts from the beginning when already finished.
    pub fn play(&mut self) {
        if self.stepper.is_done() {
            self.stepper.reset();
        }
        if self.stepper.is_done() {
            // Empty trace: nothing will ever advance.
            self.state = PlaybackState::Finished;
        } else {
            self.state = PlaybackState::Playing;
        }
    }

    /// Pause playback in place.
    pub fn pause(&mut self) {
        self.state = PlaybackState::Paused;
    }

    /// Stop playback and return to the beginning.
    pub fn stop(&mut self) {
        self.stepper.reset();
        self.state = PlaybackState::Stopped;
    }

    /// Set playback speed.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
        if matches!(speed, PlaybackSpeed::Paused) {
            self.state = PlaybackState::Paused;
        }
    }

    /// Advance one step regardless of playback state.
    ///
    /// Returns the event that was folded, or `None` at the end.
    pub fn step_forward(&mut self) -> Option<&TraceEvent> {
        if self.stepper.is_done() {
            self.state = PlaybackState::Finished;
            return None;
        }

        let index = self.stepper.cursor();
        self.stepper.next();
        if self.stepper.is_done() {
            self.state = PlaybackState::Finished;
        }
        Some(&self.stepper.log()[index])
    }

    /// One driver tick: advances only while playing. At `Maximum` speed
    /// a single tick jumps straight to the ending state.
    pub fn tick(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        if matches!(self.speed, PlaybackSpeed::Maximum) {
            self.fast_forward();
        } else {
            self.step_forward();
        }
    }

    /// Jump to the ending state without folding the intermediate events.
    pub fn fast_forward(&mut self) -> &VisualizationState {
        let state = self.stepper.go_to_end();
        self.state = PlaybackState::Finished;
        state
    }

    /// Seek to an absolute step, clamped to the trace length.
    ///
    /// Refolds from a reset stepper: history is immutable and folds are
    /// cheap, so correctness wins over cleverness here.
    pub fn seek(&mut self, step: usize) {
        let target = step.min(self.stepper.len());
        self.stepper.reset();
        for _ in 0..target {
            self.stepper.next();
        }
        if self.stepper.is_done() {
            self.state = PlaybackState::Finished;
        } else if target == 0 {
            self.state = PlaybackState::Stopped;
        } else {
            self.state = PlaybackState::Paused;
        }
    }

    /// Progress through the trace as a fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.stepper.is_empty() {
            0.0
        } else {
            self.current_step() as f64 / self.total_steps() as f64
        }
    }
}

/// Playback status for sending to a frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub current_step: usize,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub speed: PlaybackSpeed,
    pub progress: f64,
}

impl From<&Playback> for PlaybackStatus {
    fn from(playback: &Playback) -> Self {
        Self {
            current_step: playback.current_step(),
            total_steps: playback.total_steps(),
            state: playback.state,
            speed: playback.speed,
            progress: playback.progress(),
        }
    }
}
