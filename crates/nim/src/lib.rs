//! Parlor Nim - The stick-taking companion game
//!
//! Players alternate removing 1 to `max_take` sticks from a pile; whoever
//! removes the last stick wins. The scripted opponent plays the standard
//! modular strategy: leave the pile at a multiple of `max_take + 1`
//! whenever possible, otherwise take a random amount.

mod game;

pub use game::{Nim, NimEvent};
