use crate::core::Rect;
use crate::systems::{IdleScheduler, LayoutProbe};

use super::ControllerCore;

/// Index of the first obstacle the candidate rectangle overlaps.
/// Obstacles that cannot be measured are skipped.
pub(super) fn first_blocking_obstacle<P: LayoutProbe, S: IdleScheduler>(
    ctrl: &ControllerCore<P, S>,
    candidate: &Rect,
) -> Option<usize> {
    ctrl.obstacles.iter().enumerate().find_map(|(idx, handle)| {
        let obstacle = ctrl.layout.measure(handle)?;
        candidate.overlaps(&obstacle).then_some(idx)
    })
}
