use std::collections::{HashMap, HashSet};

use parlor_core::{GameError, GameResult, Player, Result};

use crate::{Cell, Edge, Grid, Point};

/// The mutable dots-and-boxes board: the set of drawn edges and the map of
/// completed cells to their owners.
///
/// Invariants:
/// - every completed cell has all four of its edges in the drawn set
/// - the drawn set only grows; edges are never removed
/// - a cell is recorded as completed at most once
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    drawn: HashSet<Edge>,
    completed: HashMap<Cell, Player>,
}

impl Board {
    /// Creates an empty board over the given grid.
    pub fn new(grid: Grid) -> Self {
        Board {
            grid,
            drawn: HashSet::new(),
            completed: HashMap::new(),
        }
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Validates a raw point pair as a move, returning the canonical edge.
    ///
    /// # Errors
    /// - `GameError::SamePoint` / `GameError::NotAdjacent` from edge
    ///   construction
    /// - `GameError::OutOfBounds` if an endpoint leaves the lattice
    /// - `GameError::EdgeAlreadyDrawn` if the edge is already present
    pub fn validate_move(&self, a: Point, b: Point) -> Result<Edge> {
        let edge = Edge::between(a, b)?;
        if !self.grid.contains_edge(edge) {
            return Err(GameError::OutOfBounds);
        }
        if self.is_drawn(edge) {
            return Err(GameError::EdgeAlreadyDrawn);
        }
        Ok(edge)
    }

    /// Draws an edge for `mover`, returning the cells it completed
    /// (0, 1, or 2 - one edge can close two adjacent cells at once).
    ///
    /// # Errors
    /// Fails with `OutOfBounds` or `EdgeAlreadyDrawn` without changing
    /// any state.
    pub fn draw(&mut self, edge: Edge, mover: Player) -> Result<Vec<Cell>> {
        if !self.grid.contains_edge(edge) {
            return Err(GameError::OutOfBounds);
        }
        if !self.drawn.insert(edge) {
            return Err(GameError::EdgeAlreadyDrawn);
        }

        let mut closed = Vec::new();
        for cell in self.grid.neighboring_cells(edge) {
            if self.drawn_sides(cell) == 4 && !self.completed.contains_key(&cell) {
                self.completed.insert(cell, mover);
                closed.push(cell);
            }
        }
        Ok(closed)
    }

    #[inline]
    pub fn is_drawn(&self, edge: Edge) -> bool {
        self.drawn.contains(&edge)
    }

    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.grid.edge_count() - self.drawn.len()
    }

    /// Drawn edges in the grid's deterministic enumeration order
    /// (for a full redraw of the board).
    pub fn drawn_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.grid.all_edges().filter(move |e| self.drawn.contains(e))
    }

    /// Undrawn edges in the grid's deterministic enumeration order.
    pub fn undrawn_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.grid.all_edges().filter(move |e| !self.drawn.contains(e))
    }

    /// How many of the cell's four edges are drawn (0-4).
    pub fn drawn_sides(&self, cell: Cell) -> u8 {
        cell.edges()
            .iter()
            .filter(|e| self.drawn.contains(e))
            .count() as u8
    }

    pub fn is_complete(&self, cell: Cell) -> bool {
        self.completed.contains_key(&cell)
    }

    pub fn owner(&self, cell: Cell) -> Option<Player> {
        self.completed.get(&cell).copied()
    }

    /// The player's score: a direct count of the cells they own.
    pub fn score(&self, player: Player) -> u32 {
        self.completed.values().filter(|&&p| p == player).count() as u32
    }

    pub fn completed_count(&self) -> u32 {
        self.completed.len() as u32
    }

    /// True once every cell on the board is complete.
    pub fn is_terminal(&self) -> bool {
        self.completed_count() == self.grid.cell_count()
    }

    /// The game outcome, or None while cells remain open.
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_terminal() {
            return None;
        }
        let one = self.score(Player::One);
        let two = self.score(Player::Two);
        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameResult::Win(Player::One),
            std::cmp::Ordering::Less => GameResult::Win(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }
}
