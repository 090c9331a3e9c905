//! Parlor Strategy - Computer players for dots-and-boxes
//!
//! The scripted opponent classifies every undrawn edge by looking only at
//! the 0-2 cells that edge borders:
//!
//! - **Completing**: some bordering cell is at 3/4 drawn edges, so this
//!   edge closes it
//! - **Dangerous**: no completion, but some bordering cell would be left
//!   at 3/4, handing the opponent a free cell
//! - **Safe**: neither of the above
//!
//! Selection picks uniformly at random within the best non-empty tier,
//! in priority order completing > safe > dangerous. This is a one-ply
//! heuristic on purpose: it does not look at chains of cells, and two
//! heuristic players will happily trade chains away.

mod classify;
mod select;

pub use classify::{classify, MoveKind};
pub use select::{choose_edge, Heuristic, Random, Strategy};
