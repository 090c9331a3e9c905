use parlor_core::{GameError, GameResult, Player, Result};

use crate::{Board, Cell, Edge, Grid, Point};

/// Where the game stands: waiting for a move, or finished.
///
/// Transitions: a draw that completes at least one cell keeps the same
/// player to move; a draw that completes nothing passes the turn; filling
/// the last cell enters `Terminal` regardless of who moved. There is no
/// transition out of `Terminal`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    AwaitingMove(Player),
    Terminal(GameResult),
}

/// Notifications the presentation layer renders after a move.
///
/// Emitted in order: the drawn edge, each completed cell, the new score
/// (only when something completed), and the final result when the board
/// fills up.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    EdgeDrawn { edge: Edge, by: Player },
    CellCompleted { cell: Cell, owner: Player },
    ScoreChanged { one: u32, two: u32 },
    GameOver { result: GameResult },
}

/// One dots-and-boxes game between a human and the computer.
///
/// The session owns the board and the turn state; nothing game-related
/// lives outside it. The presentation layer forwards resolved point pairs
/// through [`request_move`](GameSession::request_move), plays the
/// computer's strategy-selected edge through
/// [`computer_move`](GameSession::computer_move), and renders the returned
/// events. Player one always moves first.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    phase: Phase,
    human: Player,
}

impl GameSession {
    /// Starts a new game on a board with `cells` cells per side.
    ///
    /// # Errors
    /// Returns `GameError::GridTooSmall` for boards under the minimum size.
    pub fn new(cells: u8, human: Player) -> Result<Self> {
        let grid = Grid::new(cells)?;
        Ok(GameSession {
            board: Board::new(grid),
            phase: Phase::AwaitingMove(Player::One),
            human,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn human(&self) -> Player {
        self.human
    }

    #[inline]
    pub fn computer(&self) -> Player {
        self.human.opposite()
    }

    /// Both scores as (player one, player two).
    pub fn scores(&self) -> (u32, u32) {
        (self.board.score(Player::One), self.board.score(Player::Two))
    }

    /// The player to move, or None once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.phase {
            Phase::AwaitingMove(p) => Some(p),
            Phase::Terminal(_) => None,
        }
    }

    /// True while the session waits for the computer's move. The
    /// presentation layer polls this to schedule the (cancelable) deferred
    /// computer trigger; the delay itself is not an engine concern.
    pub fn computer_turn_pending(&self) -> bool {
        self.current_player() == Some(self.computer())
    }

    /// Applies a human move given as two selected points.
    ///
    /// A failed validation leaves the board and phase untouched and does
    /// not consume the turn.
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game has ended
    /// - `GameError::NotYourTurn` while the computer is to move
    /// - the validation errors of [`Board::validate_move`]
    pub fn request_move(&mut self, a: Point, b: Point) -> Result<Vec<GameEvent>> {
        let mover = self.mover_checked(self.human)?;
        let edge = self.board.validate_move(a, b)?;
        self.apply(edge, mover)
    }

    /// Applies the computer's chosen edge on the computer's turn.
    ///
    /// When the strategy has no edge to offer the caller treats that as
    /// end-of-game, not an error; by then the session is already terminal.
    ///
    /// # Errors
    /// - `GameError::GameOver` / `GameError::NotYourTurn` out of turn
    /// - `GameError::OutOfBounds` / `GameError::EdgeAlreadyDrawn` if the
    ///   edge does not fit the board
    pub fn computer_move(&mut self, edge: Edge) -> Result<Vec<GameEvent>> {
        let mover = self.mover_checked(self.computer())?;
        if !self.board.grid().contains_edge(edge) {
            return Err(GameError::OutOfBounds);
        }
        if self.board.is_drawn(edge) {
            return Err(GameError::EdgeAlreadyDrawn);
        }
        self.apply(edge, mover)
    }

    fn mover_checked(&self, expected: Player) -> Result<Player> {
        match self.phase {
            Phase::Terminal(_) => Err(GameError::GameOver),
            Phase::AwaitingMove(p) if p != expected => Err(GameError::NotYourTurn),
            Phase::AwaitingMove(p) => Ok(p),
        }
    }

    /// Commits a pre-validated edge and advances the turn state.
    fn apply(&mut self, edge: Edge, mover: Player) -> Result<Vec<GameEvent>> {
        let closed = self.board.draw(edge, mover)?;

        let mut events = vec![GameEvent::EdgeDrawn { edge, by: mover }];
        for &cell in &closed {
            events.push(GameEvent::CellCompleted { cell, owner: mover });
        }
        if !closed.is_empty() {
            let (one, two) = self.scores();
            events.push(GameEvent::ScoreChanged { one, two });
        }

        self.phase = if let Some(result) = self.board.result() {
            events.push(GameEvent::GameOver { result });
            Phase::Terminal(result)
        } else if closed.is_empty() {
            Phase::AwaitingMove(mover.opposite())
        } else {
            Phase::AwaitingMove(mover)
        };

        Ok(events)
    }
}
