use crate::core::{Rect, Size};

/// Read-only access to on-screen geometry.
///
/// The controller never owns layout: it asks for rectangles every time it
/// evaluates a move. `measure` returns `None` while an element is not
/// mounted.
///
/// The rocket's position, obstacle rectangles, the viewport and the pointer
/// are all assumed to share one frame: the page origin is the viewport origin
/// (no host offset, no scroll).
pub trait LayoutProbe {
    type Handle;

    /// Current on-screen box, transforms included
    fn measure(&self, handle: &Self::Handle) -> Option<Rect>;

    /// Untransformed layout size. A rotated element keeps its own size here
    /// while `measure` reports the larger box around the rotated shape.
    fn size(&self, handle: &Self::Handle) -> Option<Size> {
        self.measure(handle).map(|r| r.size())
    }

    fn viewport(&self) -> Size;
}

/// Fixed rectangles addressed by index. Used by native hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticLayout {
    viewport: Size,
    rects: Vec<Option<Rect>>,
    // Layout sizes that differ from the measured box (rotated elements)
    sizes: Vec<Option<Size>>,
}

impl StaticLayout {
    pub fn new(viewport: Size) -> Self {
        Self { viewport, rects: Vec::new(), sizes: Vec::new() }
    }

    /// Register a rectangle and return its handle
    pub fn insert(&mut self, rect: Rect) -> usize {
        self.rects.push(Some(rect));
        self.sizes.push(None);
        self.rects.len() - 1
    }

    /// Register a slot that has not been laid out yet
    pub fn insert_unmounted(&mut self) -> usize {
        self.rects.push(None);
        self.sizes.push(None);
        self.rects.len() - 1
    }

    pub fn set(&mut self, handle: usize, rect: Option<Rect>) {
        if let Some(slot) = self.rects.get_mut(handle) {
            *slot = rect;
        }
    }

    /// Report `size` as the layout size while `measure` keeps the stored box
    pub fn set_layout_size(&mut self, handle: usize, size: Option<Size>) {
        if let Some(slot) = self.sizes.get_mut(handle) {
            *slot = size;
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }
}

impl LayoutProbe for StaticLayout {
    type Handle = usize;

    fn measure(&self, handle: &usize) -> Option<Rect> {
        self.rects.get(*handle).copied().flatten()
    }

    fn size(&self, handle: &usize) -> Option<Size> {
        let rect = self.measure(handle)?;
        Some(self.sizes.get(*handle).copied().flatten().unwrap_or_else(|| rect.size()))
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}
