use std::fmt;

use crate::Edge;

/// One unit cell of the grid, identified by its top-left vertex.
///
/// On a board with `g` cells per side the valid coordinates are `0..g`
/// in both axes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

impl Cell {
    #[inline]
    pub const fn new(col: u8, row: u8) -> Self {
        Cell { col, row }
    }

    /// The four edges bounding this cell: top, bottom, left, right.
    pub const fn edges(self) -> [Edge; 4] {
        [
            Edge::horizontal(self.col, self.row),
            Edge::horizontal(self.col, self.row + 1),
            Edge::vertical(self.col, self.row),
            Edge::vertical(self.col + 1, self.row),
        ]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}
