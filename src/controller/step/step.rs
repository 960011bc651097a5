use crate::core::Rect;
use crate::systems::{IdleScheduler, LayoutProbe};

use super::{clamp::clamp_to_viewport, collision, ControllerCore, MoveOutcome, Position};

/// Clamp, test, commit. Both axes move together or not at all.
pub(super) fn try_move_by<P: LayoutProbe, S: IdleScheduler>(
    ctrl: &mut ControllerCore<P, S>,
    d_top: f64,
    d_left: f64,
) -> MoveOutcome {
    // Only the size is taken from layout; the corner is our own position.
    let Some(size) = ctrl.layout.size(&ctrl.movable) else {
        return MoveOutcome::Unmeasured;
    };

    let proposed = Position::new(ctrl.position.top + d_top, ctrl.position.left + d_left);
    let clamped = clamp_to_viewport(proposed, size, ctrl.layout.viewport());
    let candidate = Rect::new(clamped.left, clamped.top, size.width, size.height);

    if let Some(obstacle) = collision::first_blocking_obstacle(ctrl, &candidate) {
        return MoveOutcome::Blocked { obstacle };
    }

    ctrl.position = clamped;
    MoveOutcome::Committed(clamped)
}

/// The rocket's rectangle at its committed position, using its untransformed size
pub(super) fn rocket_rect<P: LayoutProbe, S: IdleScheduler>(
    ctrl: &ControllerCore<P, S>,
) -> Option<Rect> {
    let size = ctrl.layout.size(&ctrl.movable)?;
    Some(Rect::new(ctrl.position.left, ctrl.position.top, size.width, size.height))
}
