use std::fmt;

use parlor_core::{GameError, Result};

use crate::Point;

/// The axis an edge runs along.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// An undirected line segment between two orthogonally adjacent points.
///
/// Endpoints are ordered at construction time, so `Edge::between(a, b)` and
/// `Edge::between(b, a)` produce the same value and plain `Eq`/`Hash` give
/// undirected identity. No custom symmetric comparison is needed anywhere.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Edge {
    a: Point,
    b: Point,
}

impl Edge {
    /// Creates the canonical edge between two points.
    ///
    /// # Errors
    /// - `GameError::SamePoint` if both points are equal
    /// - `GameError::NotAdjacent` if the points are not exactly one grid
    ///   step apart along one axis
    pub fn between(p: Point, q: Point) -> Result<Self> {
        if p == q {
            return Err(GameError::SamePoint);
        }
        let adjacent = (p.col == q.col && p.row.abs_diff(q.row) == 1)
            || (p.row == q.row && p.col.abs_diff(q.col) == 1);
        if !adjacent {
            return Err(GameError::NotAdjacent(p.col, p.row, q.col, q.row));
        }
        if p < q {
            Ok(Edge { a: p, b: q })
        } else {
            Ok(Edge { a: q, b: p })
        }
    }

    /// The horizontal edge from (col, row) to (col + 1, row).
    #[inline]
    pub const fn horizontal(col: u8, row: u8) -> Self {
        Edge {
            a: Point::new(col, row),
            b: Point::new(col + 1, row),
        }
    }

    /// The vertical edge from (col, row) to (col, row + 1).
    #[inline]
    pub const fn vertical(col: u8, row: u8) -> Self {
        Edge {
            a: Point::new(col, row),
            b: Point::new(col, row + 1),
        }
    }

    /// Both endpoints in canonical order.
    #[inline]
    pub const fn endpoints(self) -> (Point, Point) {
        (self.a, self.b)
    }

    #[inline]
    pub fn orientation(self) -> Orientation {
        if self.a.row == self.b.row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_equality() {
        let a = Point::new(1, 1);
        let b = Point::new(2, 1);
        assert_eq!(Edge::between(a, b).unwrap(), Edge::between(b, a).unwrap());
    }

    #[test]
    fn test_same_point_rejected() {
        let p = Point::new(1, 1);
        assert_eq!(Edge::between(p, p), Err(GameError::SamePoint));
    }

    #[test]
    fn test_non_adjacent_rejected() {
        // Diagonal
        assert_eq!(
            Edge::between(Point::new(0, 0), Point::new(1, 1)),
            Err(GameError::NotAdjacent(0, 0, 1, 1))
        );
        // Two steps apart
        assert!(Edge::between(Point::new(0, 0), Point::new(2, 0)).is_err());
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Edge::horizontal(0, 0).orientation(), Orientation::Horizontal);
        assert_eq!(Edge::vertical(0, 0).orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_constructors_match_between() {
        assert_eq!(
            Edge::horizontal(2, 3),
            Edge::between(Point::new(3, 3), Point::new(2, 3)).unwrap()
        );
        assert_eq!(
            Edge::vertical(2, 3),
            Edge::between(Point::new(2, 4), Point::new(2, 3)).unwrap()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Edge::horizontal(0, 1).to_string(), "(0, 1)-(1, 1)");
    }
}
