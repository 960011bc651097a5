use crate::systems::{IdleScheduler, LayoutProbe, TimerToken};

use super::ControllerCore;

/// Set the motion flag and restart the idle timer (cancel first, then schedule).
pub(super) fn raise<P: LayoutProbe, S: IdleScheduler>(ctrl: &mut ControllerCore<P, S>) {
    ctrl.moving = true;
    cancel_pending(ctrl);
    let token = ctrl.scheduler.schedule(ctrl.settings.idle_ms);
    ctrl.pending_idle = Some(token);
}

pub(super) fn cancel_pending<P: LayoutProbe, S: IdleScheduler>(ctrl: &mut ControllerCore<P, S>) {
    if let Some(token) = ctrl.pending_idle.take() {
        ctrl.scheduler.cancel(token);
    }
}

/// Only the most recently scheduled token may clear the flag.
pub(super) fn idle_elapsed<P: LayoutProbe, S: IdleScheduler>(
    ctrl: &mut ControllerCore<P, S>,
    token: TimerToken,
) -> bool {
    if ctrl.pending_idle != Some(token) {
        return false;
    }
    ctrl.pending_idle = None;
    ctrl.moving = false;
    true
}
