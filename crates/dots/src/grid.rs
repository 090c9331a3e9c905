use parlor_core::{GameError, Result};

use crate::{Cell, Edge, Orientation, Point};

/// Minimum number of cells per side (5 points per side).
pub const MIN_CELLS: u8 = 4;

/// The square board geometry: a lattice of `(cells + 1)²` points and the
/// edge universe connecting them.
///
/// All operations here are pure functions of coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: u8,
}

impl Grid {
    /// Creates a grid with the given number of cells per side.
    ///
    /// # Errors
    /// Returns `GameError::GridTooSmall` below [`MIN_CELLS`].
    pub fn new(cells: u8) -> Result<Self> {
        if cells < MIN_CELLS {
            return Err(GameError::GridTooSmall {
                got: cells,
                min: MIN_CELLS,
            });
        }
        Ok(Grid { cells })
    }

    #[inline]
    pub const fn cells_per_side(self) -> u8 {
        self.cells
    }

    #[inline]
    pub const fn points_per_side(self) -> u8 {
        self.cells + 1
    }

    /// Total number of cells on the board.
    #[inline]
    pub const fn cell_count(self) -> u32 {
        (self.cells as u32) * (self.cells as u32)
    }

    /// Total number of legal edges: `2 * g * (g + 1)`.
    #[inline]
    pub const fn edge_count(self) -> usize {
        2 * (self.cells as usize) * (self.cells as usize + 1)
    }

    #[inline]
    pub fn contains_point(self, p: Point) -> bool {
        p.col <= self.cells && p.row <= self.cells
    }

    #[inline]
    pub fn contains_cell(self, c: Cell) -> bool {
        c.col < self.cells && c.row < self.cells
    }

    /// True if both endpoints lie on the lattice. Adjacency is already
    /// guaranteed by the `Edge` type.
    pub fn contains_edge(self, edge: Edge) -> bool {
        let (a, b) = edge.endpoints();
        self.contains_point(a) && self.contains_point(b)
    }

    /// Iterator over every legal edge, in a fixed deterministic order:
    /// all horizontal edges row by row, then all vertical edges row by row.
    pub fn all_edges(self) -> impl Iterator<Item = Edge> {
        let g = self.cells;
        let horizontals =
            (0..=g).flat_map(move |row| (0..g).map(move |col| Edge::horizontal(col, row)));
        let verticals =
            (0..g).flat_map(move |row| (0..=g).map(move |col| Edge::vertical(col, row)));
        horizontals.chain(verticals)
    }

    /// Iterator over every cell, row-major.
    pub fn all_cells(self) -> impl Iterator<Item = Cell> {
        let g = self.cells;
        (0..g).flat_map(move |row| (0..g).map(move |col| Cell::new(col, row)))
    }

    /// The in-bounds cells bordered by an edge (0 to 2 entries).
    ///
    /// A horizontal edge borders the cell above and the cell below; a
    /// vertical edge borders the cell to its left and to its right. Cells
    /// outside the grid are filtered out here.
    pub fn neighboring_cells(self, edge: Edge) -> Vec<Cell> {
        let (a, _) = edge.endpoints();
        let mut cells = Vec::with_capacity(2);
        match edge.orientation() {
            Orientation::Horizontal => {
                if a.row > 0 {
                    cells.push(Cell::new(a.col, a.row - 1));
                }
                if a.row < self.cells {
                    cells.push(Cell::new(a.col, a.row));
                }
            }
            Orientation::Vertical => {
                if a.col > 0 {
                    cells.push(Cell::new(a.col - 1, a.row));
                }
                if a.col < self.cells {
                    cells.push(Cell::new(a.col, a.row));
                }
            }
        }
        cells
    }
}
