#![forbid(unsafe_code)]

//! Geometric primitives.

/// A cell rectangle: widget areas, hit regions, split results.
///
/// Cell coordinates, origin top-left. Edges saturate at `u16::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// First column.
    pub x: u16,
    /// First row.
    pub y: u16,
    /// Columns.
    pub width: u16,
    /// Rows.
    pub height: u16,
}

impl Rect {
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size anchored at (0, 0).
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// One past the last column.
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// One past the last row.
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// True when no cell is covered.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Half-open containment test.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlap of two rectangles; `Rect::default()` when disjoint.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// Overlap of two rectangles, `None` when disjoint.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let (left, top) = (self.x.max(other.x), self.y.max(other.y));
        let (right, bottom) = (
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        );
        (left < right && top < bottom).then(|| Rect::new(left, top, right - left, bottom - top))
    }

    /// Shrink by `margin`; collapses to zero size instead of underflowing.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect::new(
            self.x.saturating_add(margin.left),
            self.y.saturating_add(margin.top),
            self.width.saturating_sub(margin.left.saturating_add(margin.right)),
            self.height.saturating_sub(margin.top.saturating_add(margin.bottom)),
        )
    }
}

/// Spacing on the four sides of a rectangle (margins and padding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// Same spacing on every side.
    pub const fn all(cells: u16) -> Self {
        Self::new(cells, cells, cells, cells)
    }

    /// Spacing on the left and right only.
    pub const fn horizontal(cells: u16) -> Self {
        Self::new(0, cells, 0, cells)
    }

    /// Spacing on the top and bottom only.
    pub const fn vertical(cells: u16) -> Self {
        Self::new(cells, 0, cells, 0)
    }

    /// Create spacing in CSS order (top, right, bottom, left).
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl From<u16> for Sides {
    fn from(cells: u16) -> Self {
        Self::all(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 5);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 7));
        assert!(!r.contains(5, 8));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn intersection_of_disjoint_is_empty() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 10, 5, 5);
        assert!(a.intersection(&b).is_empty());
        assert_eq!(a.intersection_opt(&b), None);
    }

    #[test]
    fn intersection_of_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Rect::new(5, 5, 5, 5));
    }

    #[test]
    fn inner_saturates() {
        let r = Rect::new(0, 0, 3, 3);
        let inner = r.inner(Sides::all(2));
        assert_eq!(inner.width, 0);
        assert_eq!(inner.height, 0);
        assert!(inner.is_empty());
    }

    #[test]
    fn sides_constructors() {
        assert_eq!(Sides::horizontal(1), Sides::new(0, 1, 0, 1));
        assert_eq!(Sides::vertical(2), Sides::new(2, 0, 2, 0));
        assert_eq!(Sides::from(3), Sides::all(3));
    }

    #[test]
    fn edges_saturate() {
        let r = Rect::from_size(u16::MAX, u16::MAX).inner(Sides::new(0, 0, 0, 10));
        assert_eq!(r.right(), u16::MAX);
        assert_eq!(r.width, u16::MAX - 10);
    }
}
