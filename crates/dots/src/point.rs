use std::fmt;

/// A lattice vertex, identified by grid column and row.
///
/// On a board with `g` cells per side the valid coordinates are
/// `0..=g` in both axes (`g + 1` points per side).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Point {
    pub col: u8,
    pub row: u8,
}

impl Point {
    /// Creates a point from column and row coordinates.
    #[inline]
    pub const fn new(col: u8, row: u8) -> Self {
        Point { col, row }
    }

    /// Offset the point by (col_delta, row_delta), returning None if the
    /// result would leave the coordinate range.
    #[inline]
    pub fn offset(self, col_delta: i16, row_delta: i16) -> Option<Self> {
        let col = self.col as i16 + col_delta;
        let row = self.row as i16 + row_delta;
        if (0..=u8::MAX as i16).contains(&col) && (0..=u8::MAX as i16).contains(&row) {
            Some(Point::new(col as u8, row as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
