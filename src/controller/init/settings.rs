use crate::domain::settings::ControllerSettings;
use crate::systems::{IdleScheduler, LayoutProbe};

use super::ControllerCore;

pub(super) fn set_settings<P: LayoutProbe, S: IdleScheduler>(
    ctrl: &mut ControllerCore<P, S>,
    settings: ControllerSettings,
) -> Result<(), String> {
    settings.validate()?;
    ctrl.settings = settings;
    Ok(())
}

pub(super) fn set_step_px<P: LayoutProbe, S: IdleScheduler>(
    ctrl: &mut ControllerCore<P, S>,
    step_px: f64,
) -> Result<(), String> {
    let next = ControllerSettings { step_px, ..ctrl.settings.clone() };
    set_settings(ctrl, next)
}

pub(super) fn set_attraction_factor<P: LayoutProbe, S: IdleScheduler>(
    ctrl: &mut ControllerCore<P, S>,
    attraction_factor: f64,
) -> Result<(), String> {
    let next = ControllerSettings { attraction_factor, ..ctrl.settings.clone() };
    set_settings(ctrl, next)
}

/// Takes effect from the next key press; a timer already pending keeps its deadline.
pub(super) fn set_idle_ms<P: LayoutProbe, S: IdleScheduler>(
    ctrl: &mut ControllerCore<P, S>,
    idle_ms: u32,
) -> Result<(), String> {
    let next = ControllerSettings { idle_ms, ..ctrl.settings.clone() };
    set_settings(ctrl, next)
}
