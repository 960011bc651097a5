use crate::core::Vec2;
use crate::domain::input::Key;
use crate::systems::{IdleScheduler, LayoutProbe};

use super::{motion, propose, step, ControllerCore, MoveOutcome};

pub(super) fn handle_key<P: LayoutProbe, S: IdleScheduler>(
    ctrl: &mut ControllerCore<P, S>,
    key: Key,
) -> MoveOutcome {
    if !key.is_recognized() {
        return MoveOutcome::Ignored;
    }

    let outcome = match propose::propose_delta(ctrl, key) {
        Some((d_top, d_left)) => step::try_move_by(ctrl, d_top, d_left),
        None => MoveOutcome::Unmeasured,
    };

    // Accepted or not, the rocket "tried" to move.
    motion::raise(ctrl);

    match outcome {
        MoveOutcome::Blocked { obstacle } => {
            log::debug!("{:?} blocked by obstacle {}", key, obstacle);
        }
        MoveOutcome::Unmeasured => {
            log::debug!("{:?} ignored: rocket not measurable", key);
        }
        _ => {}
    }

    outcome
}

pub(super) fn pointer_moved<P: LayoutProbe, S: IdleScheduler>(
    ctrl: &mut ControllerCore<P, S>,
    x: f64,
    y: f64,
) {
    ctrl.pointer = Vec2::new(x, y);
}
