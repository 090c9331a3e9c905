use std::cell::RefCell;

use parlor_dots::{Board, Edge};
use rand::Rng;

use crate::{classify, MoveKind};

/// A computer player for dots-and-boxes.
///
/// Implementations are pure with respect to the board: they never mutate
/// it, and `None` means no undrawn edge remains - the end-of-game signal,
/// not an error.
pub trait Strategy {
    fn select(&self, board: &Board) -> Option<Edge>;
}

/// Picks uniformly at random within the best non-empty tier, in priority
/// order completing > safe > dangerous.
///
/// If the same board and RNG state are supplied twice the same edge comes
/// back: candidate tiers are built in the grid's deterministic enumeration
/// order.
pub fn choose_edge<R: Rng>(board: &Board, rng: &mut R) -> Option<Edge> {
    let mut completing = Vec::new();
    let mut safe = Vec::new();
    let mut dangerous = Vec::new();

    for edge in board.undrawn_edges() {
        match classify(board, edge) {
            MoveKind::Completing => completing.push(edge),
            MoveKind::Safe => safe.push(edge),
            MoveKind::Dangerous => dangerous.push(edge),
        }
    }

    let tier = [completing, safe, dangerous]
        .into_iter()
        .find(|tier| !tier.is_empty())?;
    Some(tier[rng.gen_range(0..tier.len())])
}

/// The three-tier heuristic player.
///
/// The RNG is wrapped in a `RefCell` so selection can stay `&self` behind
/// the [`Strategy`] seam.
pub struct Heuristic<R: Rng> {
    rng: RefCell<R>,
}

impl<R: Rng> Heuristic<R> {
    pub fn new(rng: R) -> Self {
        Heuristic {
            rng: RefCell::new(rng),
        }
    }
}

impl<R: Rng> Strategy for Heuristic<R> {
    fn select(&self, board: &Board) -> Option<Edge> {
        choose_edge(board, &mut *self.rng.borrow_mut())
    }
}

/// Baseline player: uniform over every undrawn edge, no classification.
pub struct Random<R: Rng> {
    rng: RefCell<R>,
}

impl<R: Rng> Random<R> {
    pub fn new(rng: R) -> Self {
        Random {
            rng: RefCell::new(rng),
        }
    }
}

impl<R: Rng> Strategy for Random<R> {
    fn select(&self, board: &Board) -> Option<Edge> {
        let remaining = board.remaining_count();
        if remaining == 0 {
            return None;
        }
        let index = self.rng.borrow_mut().gen_range(0..remaining);
        board.undrawn_edges().nth(index)
    }
}
