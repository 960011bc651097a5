use crate::core::Size;

use super::Position;

/// Clamp a top-left corner so an element of `size` stays inside `viewport`.
///
/// When the element is larger than the viewport the upper bound is 0, so the
/// corner is pinned to the origin.
pub fn clamp_to_viewport(candidate: Position, size: Size, viewport: Size) -> Position {
    let max_top = (viewport.height - size.height).max(0.0);
    let max_left = (viewport.width - size.width).max(0.0);
    Position {
        top: candidate.top.clamp(0.0, max_top),
        left: candidate.left.clamp(0.0, max_left),
    }
}
