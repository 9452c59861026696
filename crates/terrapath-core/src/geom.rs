//! Geometry primitives: [`Point`] and [`Range`].

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer grid position. X grows right, Y grows down.
///
/// Points are ordered lexicographically, `x` first and then `y`. The A*
/// frontier breaks ties between equal priorities with this ordering, so
/// changing it changes which of several equal-cost paths gets returned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Grid bounds: the half-open rectangle from `min` (inclusive) to `max`
/// (exclusive).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Bounds of a `width` x `height` grid anchored at the origin. Negative
    /// sizes are clamped to zero.
    pub fn from_size(width: i32, height: i32) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(width.max(0), height.max(0)),
        }
    }

    pub fn size(self) -> Point {
        self.max - self.min
    }

    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// No cells at all.
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Points in row-major order: left to right, then top to bottom.
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: (!self.is_empty()).then_some(self.min),
        }
    }
}

/// Iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: Option<Point>,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let p = self.next?;
        let mut q = Point::new(p.x + 1, p.y);
        if q.x >= self.range.max.x {
            q = Point::new(self.range.min.x, p.y + 1);
        }
        self.next = self.range.contains(q).then_some(q);
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
    }

    #[test]
    fn point_orders_by_x_then_y() {
        assert!(Point::new(0, 5) < Point::new(1, 0));
        assert!(Point::new(1, 0) < Point::new(1, 1));
        let mut pts = vec![Point::new(2, 0), Point::new(0, 2), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, 1), Point::new(0, 2), Point::new(2, 0)]);
    }

    #[test]
    fn point_adjacency() {
        let p = Point::new(3, 3);
        assert!(p.is_adjacent(Point::new(3, 4)));
        assert!(p.is_adjacent(Point::new(2, 3)));
        assert!(!p.is_adjacent(Point::new(4, 4)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(-1, 7).to_string(), "(-1, 7)");
    }

    #[test]
    fn range_from_size() {
        let r = Range::from_size(3, 2);
        assert_eq!(r.size(), Point::new(3, 2));
        assert!(!r.is_empty());
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
        assert_eq!(Range::from_size(-4, 2).size(), Point::new(0, 2));
    }

    #[test]
    fn range_iter_row_major() {
        let pts: Vec<_> = Range::from_size(3, 2).iter().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn empty_range_iter() {
        for r in [Range::from_size(0, 0), Range::from_size(5, 0), Range::from_size(0, 5)] {
            assert!(r.is_empty());
            assert_eq!(r.iter().count(), 0);
        }
    }
}
