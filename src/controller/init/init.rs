use crate::core::Vec2;
use crate::domain::settings::ControllerSettings;
use crate::systems::{IdleScheduler, LayoutProbe};

use super::{ControllerCore, Position};

pub(super) fn create_controller<P: LayoutProbe, S: IdleScheduler>(
    layout: P,
    scheduler: S,
    movable: P::Handle,
    obstacles: Vec<P::Handle>,
    settings: ControllerSettings,
) -> ControllerCore<P, S> {
    ControllerCore {
        settings,
        layout,
        scheduler,
        movable,
        obstacles,
        position: Position::default(),
        pointer: Vec2::zero(),
        moving: false,
        pending_idle: None,
    }
}
