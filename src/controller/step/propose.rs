use crate::domain::input::Key;
use crate::systems::{IdleScheduler, LayoutProbe};

use super::{step, ControllerCore};

/// Delta (top, left) a key asks for. `None` when the attraction move has no
/// rocket center to start from.
pub(super) fn propose_delta<P: LayoutProbe, S: IdleScheduler>(
    ctrl: &ControllerCore<P, S>,
    key: Key,
) -> Option<(f64, f64)> {
    if let Some((dy, dx)) = key.direction() {
        let step = ctrl.settings.step_px;
        return Some((dy * step, dx * step));
    }

    match key {
        Key::Attract => {
            let center = step::rocket_rect(ctrl)?.center();
            let pull = (ctrl.pointer - center) * ctrl.settings.attraction_factor;
            Some((pull.y, pull.x))
        }
        _ => Some((0.0, 0.0)),
    }
}
