//! Step-by-step playback of a traversal plan.
//!
//! A small state machine driven by timer ticks:
//!
//! ```text
//!          start/toggle            tick reaches last step
//!   Idle ───────────────▶ Playing ───────────────────────▶ Idle
//!    ▲                     │  ▲
//!    │ reset        pause  ▼  │ start/toggle
//!    └──────────────────  Paused
//! ```
//!
//! `reset` returns to `Idle` from any state and rewinds the cursor. The
//! cursor is `None` before the first step, then indexes into the plan.

use std::time::Duration;

use tracing::trace;

use crate::error::{Result, SeekError};
use crate::models::Position;

/// Speed multipliers offered to users.
pub const SUPPORTED_SPEEDS: [f64; 4] = [0.5, 1.0, 2.0, 3.0];

/// Tick interval at 1x speed.
pub const BASE_TICK: Duration = Duration::from_millis(1000);

/// Playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Stopped, either before starting or after reaching the end.
    #[default]
    Idle,
    /// Advancing one step per tick.
    Playing,
    /// Stopped mid-plan; resumes from the cursor.
    Paused,
}

/// Playback cursor over a plan of `step_count` entries.
#[derive(Debug, Clone)]
pub struct Playback {
    step_count: usize,
    cursor: Option<usize>,
    state: PlaybackState,
    speed: f64,
}

impl Playback {
    /// Creates an idle playback at 1x speed, cursor before the first step.
    pub fn new(step_count: usize) -> Self {
        Self {
            step_count,
            cursor: None,
            state: PlaybackState::Idle,
            speed: 1.0,
        }
    }

    /// Sets the speed multiplier.
    pub fn with_speed(mut self, speed: f64) -> Result<Self> {
        self.set_speed(speed)?;
        Ok(self)
    }

    /// Changes the speed multiplier. Must be one of [`SUPPORTED_SPEEDS`].
    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        if !SUPPORTED_SPEEDS.contains(&speed) {
            return Err(SeekError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Delay between ticks at the current speed.
    pub fn tick_interval(&self) -> Duration {
        BASE_TICK.div_f64(self.speed)
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the last shown step, `None` before the first.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of steps in the plan.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Whether the cursor sits on the last step (or the plan is empty).
    pub fn is_at_end(&self) -> bool {
        match self.step_count {
            0 => true,
            n => self.cursor == Some(n - 1),
        }
    }

    /// Starts or resumes playing.
    pub fn start(&mut self) {
        self.transition(PlaybackState::Playing);
    }

    /// Pauses if playing.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.transition(PlaybackState::Paused);
        }
    }

    /// Play/pause button.
    ///
    /// At the end of the plan this rewinds and plays again; otherwise it
    /// flips between playing and paused.
    pub fn toggle(&mut self) {
        if self.is_at_end() {
            self.reset();
            self.start();
            return;
        }
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Idle | PlaybackState::Paused => self.start(),
        }
    }

    /// Timer tick: advances one step while playing.
    ///
    /// Reaching the last step moves the playback to `Idle`. Returns the
    /// cursor after the tick.
    pub fn tick(&mut self) -> Option<usize> {
        if self.state != PlaybackState::Playing {
            return self.cursor;
        }
        if !self.is_at_end() {
            self.advance();
        }
        if self.is_at_end() {
            self.transition(PlaybackState::Idle);
        }
        self.cursor
    }

    /// Shows the next step by hand. Pauses a running playback.
    pub fn step_forward(&mut self) -> Option<usize> {
        self.pause();
        if !self.is_at_end() {
            self.advance();
        }
        self.cursor
    }

    /// Shows the previous step by hand. Pauses a running playback.
    pub fn step_back(&mut self) -> Option<usize> {
        self.pause();
        self.cursor = match self.cursor {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
        self.cursor
    }

    /// Stops and rewinds to before the first step.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.transition(PlaybackState::Idle);
    }

    /// The part of `plan` revealed so far.
    pub fn visible<'a>(&self, plan: &'a [Position]) -> &'a [Position] {
        let shown = self.cursor.map_or(0, |i| i + 1).min(plan.len());
        &plan[..shown]
    }

    /// Head position at the cursor.
    pub fn current_position(&self, plan: &[Position]) -> Option<Position> {
        self.cursor.and_then(|i| plan.get(i).copied())
    }

    fn advance(&mut self) {
        self.cursor = Some(self.cursor.map_or(0, |i| i + 1));
    }

    fn transition(&mut self, next: PlaybackState) {
        if self.state != next {
            trace!(from = ?self.state, to = ?next, cursor = ?self.cursor, "playback");
            self.state = next;
        }
    }
}
