use thiserror::Error;

/// Errors that can occur in the parlor game engines.
///
/// Invalid-move errors are recoverable: the engine rejects the interaction
/// and leaves all state unchanged. Configuration errors are fatal to game
/// start and must be resolved before a game can be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("both points are the same")]
    SamePoint,

    #[error("points ({0}, {1}) and ({2}, {3}) are not orthogonally adjacent")]
    NotAdjacent(u8, u8, u8, u8),

    #[error("edge lies outside the board")]
    OutOfBounds,

    #[error("edge is already drawn")]
    EdgeAlreadyDrawn,

    #[error("it is not that player's turn")]
    NotYourTurn,

    #[error("the game is already over")]
    GameOver,

    #[error("must take between 1 and {max} sticks, got {take}")]
    TakeOutOfRange { take: u32, max: u32 },

    #[error("grid must be at least {min} cells per side, got {got}")]
    GridTooSmall { got: u8, min: u8 },

    #[error("player number must be 1 or 2, got {0}")]
    InvalidPlayerNumber(u8),

    #[error("stick count must be greater than zero")]
    InvalidStickCount,

    #[error("maximum take must be greater than zero")]
    InvalidMaxTake,
}

impl GameError {
    /// True for errors that reject a single interaction without changing
    /// any game state (as opposed to configuration errors, which prevent
    /// a game from starting at all).
    pub fn is_invalid_move(&self) -> bool {
        !matches!(
            self,
            GameError::GridTooSmall { .. }
                | GameError::InvalidPlayerNumber(_)
                | GameError::InvalidStickCount
                | GameError::InvalidMaxTake
        )
    }
}

/// Convenience Result type for the game engines.
pub type Result<T> = std::result::Result<T, GameError>;
