/// A rectangle in screen pixel coordinates.
///
/// All four edges are **inclusive**: a rect covering a single pixel has
/// `x0 == x1` and `y0 == y1`. The empty rect is represented by the
/// `invalid()` sentinel (`x1 < x0`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Build a rect from an origin and a width/height extent.
    ///
    /// Zero or negative extents yield the empty sentinel.
    #[inline]
    pub const fn from_size(x: i32, y: i32, w: i32, h: i32) -> Self {
        if w <= 0 || h <= 0 {
            return Self::invalid();
        }
        Self {
            x0: x,
            y0: y,
            x1: x + w - 1,
            y1: y + h - 1,
        }
    }

    /// The empty rect sentinel.
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: -1,
            y1: -1,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1
    }

    #[inline]
    pub fn width(&self) -> i32 {
        if self.is_valid() { self.x1 - self.x0 + 1 } else { 0 }
    }

    #[inline]
    pub fn height(&self) -> i32 {
        if self.is_valid() { self.y1 - self.y0 + 1 } else { 0 }
    }

    /// Pixel count covered by this rect. Used as the cost estimate for
    /// pixel-budgeted redraw passes.
    #[inline]
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Bounding box of two rects. An invalid operand contributes nothing.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        if !self.is_valid() {
            return *other;
        }
        if !other.is_valid() {
            return *self;
        }
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Intersection of two rects; the empty sentinel when they are disjoint.
    #[inline]
    pub fn intersect(&self, other: &Self) -> Self {
        let r = Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        };
        if r.is_valid() { r } else { Self::invalid() }
    }

    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.x0 <= other.x1
            && self.x1 >= other.x0
            && self.y0 <= other.y1
            && self.y1 >= other.y0
    }

    /// True when `other` lies entirely inside this rect.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.x0 <= other.x0
            && self.y0 <= other.y0
            && self.x1 >= other.x1
            && self.y1 >= other.y1
    }

    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.is_valid() && x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Clamp this rect to a `width x height` buffer starting at the origin.
    #[inline]
    pub fn clip(&self, width: i32, height: i32) -> Self {
        let r = Self {
            x0: self.x0.max(0),
            y0: self.y0.max(0),
            x1: self.x1.min(width - 1),
            y1: self.y1.min(height - 1),
        };
        if r.is_valid() { r } else { Self::invalid() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_size_and_extents() {
        let r = Rect::from_size(2, 3, 10, 5);
        assert_eq!(r, Rect::new(2, 3, 11, 7));
        assert_eq!(r.width(), 10);
        assert_eq!(r.height(), 5);
        assert_eq!(r.area(), 50);
        assert!(!Rect::from_size(0, 0, 0, 4).is_valid());
        assert_eq!(Rect::invalid().area(), 0);
    }

    #[test]
    fn union_is_bounding_box() {
        let a = Rect::new(0, 0, 9, 9);
        let b = Rect::new(20, 5, 29, 14);
        assert_eq!(a.union(&b), Rect::new(0, 0, 29, 14));
        assert_eq!(a.union(&Rect::invalid()), a);
        assert_eq!(Rect::invalid().union(&b), b);
    }

    #[test]
    fn intersect_disjoint_is_invalid() {
        let a = Rect::new(0, 0, 9, 9);
        let b = Rect::new(10, 0, 19, 9);
        assert!(!a.intersects(&b) || a.intersect(&b).is_valid());
        assert_eq!(a.intersect(&Rect::new(30, 30, 40, 40)), Rect::invalid());
        assert_eq!(a.intersect(&Rect::new(5, 5, 14, 14)), Rect::new(5, 5, 9, 9));
    }

    #[test]
    fn containment() {
        let outer = Rect::new(0, 0, 99, 99);
        let inner = Rect::new(10, 10, 20, 20);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains(&outer));
        assert!(outer.contains_point(0, 99));
        assert!(!outer.contains_point(100, 0));
    }

    #[test]
    fn clip_to_buffer_bounds() {
        let r = Rect::new(-5, -5, 120, 80);
        assert_eq!(r.clip(100, 50), Rect::new(0, 0, 99, 49));
        assert_eq!(Rect::new(200, 200, 300, 300).clip(100, 50), Rect::invalid());
    }
}
