//! Parlor Dots - Dots-and-boxes engine
//!
//! This crate implements the dots-and-boxes ("timbiriche") rules: a square
//! lattice of points, undirected edges between orthogonally adjacent points,
//! unit cells that complete when their four edges are drawn, and the
//! turn-retention rule (completing a cell grants another move).
//!
//! The engine has no presentation concerns. The [`GameSession`] entry point
//! accepts resolved point pairs from the caller and reports everything a
//! renderer needs through [`GameEvent`] values.

mod board;
mod cell;
mod edge;
mod grid;
mod point;
mod session;

pub use board::Board;
pub use cell::Cell;
pub use edge::{Edge, Orientation};
pub use grid::{Grid, MIN_CELLS};
pub use point::Point;
pub use session::{GameEvent, GameSession, Phase};
