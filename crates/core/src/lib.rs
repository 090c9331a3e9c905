//! Parlor Core - Shared types for the parlor game engines
//!
//! This crate provides the types both games (dots-and-boxes and the stick
//! game) have in common: the two-player identity, game outcomes, and the
//! workspace-wide error enum.
//!
//! # Types
//!
//! - [`Player`] - One of the two participants
//! - [`GameResult`] - Win or draw at game end
//! - [`GameError`] - Every failure the engines can report

mod error;
mod player;

pub use error::{GameError, Result};
pub use player::{GameResult, Player};
