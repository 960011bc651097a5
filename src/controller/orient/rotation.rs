use crate::systems::{IdleScheduler, LayoutProbe};

use super::{step, ControllerCore};

pub(super) fn rotation_deg<P: LayoutProbe, S: IdleScheduler>(ctrl: &ControllerCore<P, S>) -> f64 {
    // From the committed position, not the DOM box, which may still show the
    // previous frame (and is inflated by the rotation itself).
    let Some(rect) = step::rocket_rect(ctrl) else {
        return 0.0;
    };
    (ctrl.pointer - rect.center()).angle_deg() + ctrl.settings.rotation_offset_deg
}
