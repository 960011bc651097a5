//! Screen-space geometry: everything is measured in CSS pixels with the
//! origin at the top-left of the viewport and `y` growing downwards.

/// 2D vector used for pointer math
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Angle of the vector in degrees, measured clockwise from +x (screen space).
    pub fn angle_deg(&self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle, the shape `getBoundingClientRect` reports
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Build from edges (left, top, right, bottom)
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 80.0, 80.0);
        let right = Rect::new(80.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 80.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn one_pixel_intrusion_overlaps_both_ways() {
        let a = Rect::new(0.0, 0.0, 80.0, 80.0);
        let b = Rect::from_edges(79.0, 79.0, 200.0, 200.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn contained_rect_overlaps() {
        let outer = Rect::from_edges(400.0, 300.0, 700.0, 350.0);
        let inner = Rect::new(500.0, 310.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
    }

    #[test]
    fn center_and_angle() {
        let r = Rect::new(60.0, 60.0, 80.0, 80.0);
        assert_eq!(r.center(), Vec2::new(100.0, 100.0));
        assert_eq!(Vec2::new(10.0, 0.0).angle_deg(), 0.0);
        assert_eq!(Vec2::new(0.0, 10.0).angle_deg(), 90.0);
    }
}
