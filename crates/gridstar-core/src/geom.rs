//! Geometry primitives: [`Point`] and the 8-way step table.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate. X grows right, Y grows up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// The eight unit steps to Chebyshev-adjacent cells, in edge generation
/// order: `dy` from -1 to 1, and `dx` from -1 to 1 within each row.
pub const STEPS_8: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Absolute per-axis distance to `other`, as `(dx, dy)`.
    #[inline]
    pub fn abs_delta(self, other: Point) -> (u32, u32) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }

    /// Whether `other` differs from `self` by at most one on each axis and
    /// is not `self`.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        let (dx, dy) = self.abs_delta(other);
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }

    /// Whether the step from `self` to `other` changes both coordinates.
    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        self.x != other.x && self.y != other.y
    }

    /// All eight neighbours, in [`STEPS_8`] order. Some may lie outside any
    /// particular grid.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        STEPS_8.map(|d| self + d)
    }
}

// --- trait impls for Point ---

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut pts = vec![Point::new(2, 1), Point::new(0, 1), Point::new(5, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(5, 0), Point::new(0, 1), Point::new(2, 1)]);
    }

    #[test]
    fn adjacency() {
        let p = Point::new(3, 3);
        assert!(p.is_adjacent(Point::new(4, 4)));
        assert!(p.is_adjacent(Point::new(3, 2)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Point::new(5, 3)));
        assert!(p.is_diagonal_to(Point::new(2, 4)));
        assert!(!p.is_diagonal_to(Point::new(2, 3)));
    }

    #[test]
    fn neighbors_8_follow_step_order() {
        let n = Point::new(1, 1).neighbors_8();
        assert_eq!(n[0], Point::new(0, 0));
        assert_eq!(n[3], Point::new(0, 1));
        assert_eq!(n[7], Point::new(2, 2));
        assert!(n.iter().all(|&q| Point::new(1, 1).is_adjacent(q)));
    }

    #[test]
    fn abs_delta_is_symmetric() {
        let a = Point::new(0, 3);
        let b = Point::new(7, 0);
        assert_eq!(a.abs_delta(b), (7, 3));
        assert_eq!(b.abs_delta(a), (7, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(4, -2).to_string(), "(4, -2)");
    }
}
