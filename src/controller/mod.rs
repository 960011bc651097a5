//! Movement controller - owns the rocket's position and decides which moves
//! are allowed.
//!
//! A move is evaluated in three steps:
//! - clamp the candidate to the viewport
//! - test the clamped rectangle against every obstacle (strict overlap)
//! - commit both axes together, or leave the position untouched
//!
//! Orientation (rotation toward the pointer) and the debounced "moving" flag
//! are derived here too, so renderers only read a `RocketView`.

use crate::core::{Rect, Vec2};
use crate::domain::input::Key;
use crate::domain::settings::ControllerSettings;
use crate::systems::{IdleScheduler, LayoutProbe, TimerToken};

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "input/input.rs"]
mod input;
#[path = "step/propose.rs"]
mod propose;
#[path = "step/clamp.rs"]
mod clamp;
#[path = "step/collision.rs"]
mod collision;
#[path = "step/step.rs"]
mod step;
#[path = "motion/motion.rs"]
mod motion;
#[path = "orient/rotation.rs"]
mod rotation;

pub use clamp::clamp_to_viewport;

/// Offsets of the rocket's top-left corner from the page origin
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// What happened to one key press
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Not a controller key; nothing changed
    Ignored,
    /// Position replaced by the (clamped) candidate
    Committed(Position),
    /// Candidate overlapped the obstacle at this index; position unchanged
    Blocked { obstacle: usize },
    /// The rocket could not be measured; position unchanged
    Unmeasured,
}

/// Everything a renderer needs for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RocketView {
    pub position: Position,
    pub rotation_deg: f64,
    pub moving: bool,
}

pub struct ControllerCore<P: LayoutProbe, S: IdleScheduler> {
    settings: ControllerSettings,
    layout: P,
    scheduler: S,
    movable: P::Handle,
    obstacles: Vec<P::Handle>,

    // State
    position: Position,
    pointer: Vec2,
    moving: bool,
    pending_idle: Option<TimerToken>,
}

impl<P: LayoutProbe, S: IdleScheduler> ControllerCore<P, S> {
    /// Create a controller at (0, 0) with default settings
    pub fn new(layout: P, scheduler: S, movable: P::Handle, obstacles: Vec<P::Handle>) -> Self {
        init::create_controller(layout, scheduler, movable, obstacles, ControllerSettings::default())
    }

    pub fn with_settings(
        layout: P,
        scheduler: S,
        movable: P::Handle,
        obstacles: Vec<P::Handle>,
        settings: ControllerSettings,
    ) -> Self {
        init::create_controller(layout, scheduler, movable, obstacles, settings)
    }

    pub fn position(&self) -> Position { self.position }

    pub fn pointer(&self) -> Vec2 { self.pointer }

    pub fn is_moving(&self) -> bool { self.moving }

    pub fn pending_idle(&self) -> Option<TimerToken> { self.pending_idle }

    pub fn settings(&self) -> &ControllerSettings { &self.settings }

    pub fn layout_mut(&mut self) -> &mut P { &mut self.layout }

    pub fn scheduler(&self) -> &S { &self.scheduler }

    pub fn scheduler_mut(&mut self) -> &mut S { &mut self.scheduler }

    pub fn obstacle_count(&self) -> usize { self.obstacles.len() }

    /// Rocket rectangle at the committed position; `None` while unmeasurable
    pub fn rocket_rect(&self) -> Option<Rect> {
        step::rocket_rect(self)
    }

    /// Replace all tunables at once (validated)
    pub fn set_settings(&mut self, next: ControllerSettings) -> Result<(), String> {
        settings::set_settings(self, next)
    }

    pub fn set_step_px(&mut self, step_px: f64) -> Result<(), String> {
        settings::set_step_px(self, step_px)
    }

    pub fn set_attraction_factor(&mut self, factor: f64) -> Result<(), String> {
        settings::set_attraction_factor(self, factor)
    }

    pub fn set_idle_ms(&mut self, idle_ms: u32) -> Result<(), String> {
        settings::set_idle_ms(self, idle_ms)
    }

    /// Handle a `KeyboardEvent.key` value
    pub fn handle_key_name(&mut self, name: &str) -> MoveOutcome {
        let key = Key::from_key_name(name, &self.settings);
        self.handle_key(key)
    }

    /// Handle one key press: move (or refuse to) and restart the idle timer
    pub fn handle_key(&mut self, key: Key) -> MoveOutcome {
        input::handle_key(self, key)
    }

    /// Record the latest pointer position (viewport coordinates)
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        input::pointer_moved(self, x, y)
    }

    /// Called by the host when a scheduled idle timer fires.
    /// Returns true if the motion flag was cleared.
    pub fn idle_elapsed(&mut self, token: TimerToken) -> bool {
        motion::idle_elapsed(self, token)
    }

    /// Cancel any pending idle timer and drop the motion flag
    pub fn teardown(&mut self) {
        motion::cancel_pending(self);
        self.moving = false;
    }

    /// Propose a raw delta (top, left); goes through clamp, collision and commit
    pub fn try_move_by(&mut self, d_top: f64, d_left: f64) -> MoveOutcome {
        step::try_move_by(self, d_top, d_left)
    }

    /// Orientation in degrees; 0 while the rocket is not measurable
    pub fn rotation_deg(&self) -> f64 {
        rotation::rotation_deg(self)
    }

    pub fn snapshot(&self) -> RocketView {
        RocketView {
            position: self.position,
            rotation_deg: self.rotation_deg(),
            moving: self.moving,
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
