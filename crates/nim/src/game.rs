use parlor_core::{GameError, Player, Result};
use rand::Rng;

/// Notifications for the presentation layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NimEvent {
    SticksTaken {
        by: Player,
        taken: u32,
        remaining: u32,
    },
    GameOver {
        winner: Player,
    },
}

/// One game of sticks.
///
/// Turns alternate strictly (no retention rule here). `Player::One` moves
/// first; either side can be driven through [`take`](Nim::take), and
/// [`scripted_take`](Nim::scripted_take) plays the computer's move.
#[derive(Clone, Debug, PartialEq)]
pub struct Nim {
    remaining: u32,
    max_take: u32,
    turn: Player,
    winner: Option<Player>,
}

impl Nim {
    /// Starts a game with `sticks` in the pile and at most `max_take`
    /// removed per turn.
    ///
    /// # Errors
    /// Returns `InvalidStickCount` / `InvalidMaxTake` when either is zero.
    pub fn new(sticks: u32, max_take: u32) -> Result<Self> {
        if sticks == 0 {
            return Err(GameError::InvalidStickCount);
        }
        if max_take == 0 {
            return Err(GameError::InvalidMaxTake);
        }
        Ok(Nim {
            remaining: sticks,
            max_take,
            turn: Player::One,
            winner: None,
        })
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn max_take(&self) -> u32 {
        self.max_take
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// The most the current player may take this turn.
    pub fn take_limit(&self) -> u32 {
        self.max_take.min(self.remaining)
    }

    /// Removes `n` sticks for the player on turn. Taking the last stick
    /// wins the game.
    ///
    /// # Errors
    /// - `GameError::GameOver` after the game has ended
    /// - `GameError::TakeOutOfRange` unless `1 <= n <= take_limit()`;
    ///   the state is left unchanged
    pub fn take(&mut self, n: u32) -> Result<Vec<NimEvent>> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        let limit = self.take_limit();
        if n == 0 || n > limit {
            return Err(GameError::TakeOutOfRange { take: n, max: limit });
        }

        self.remaining -= n;
        let by = self.turn;
        let mut events = vec![NimEvent::SticksTaken {
            by,
            taken: n,
            remaining: self.remaining,
        }];

        if self.remaining == 0 {
            self.winner = Some(by);
            events.push(NimEvent::GameOver { winner: by });
        } else {
            self.turn = by.opposite();
        }
        Ok(events)
    }

    /// How many sticks the scripted opponent would take right now: enough
    /// to leave a multiple of `max_take + 1`, or a random amount when the
    /// pile already sits on one.
    pub fn optimal_take<R: Rng>(&self, rng: &mut R) -> u32 {
        let modulus = self.max_take + 1;
        match self.remaining % modulus {
            0 => rng.gen_range(1..=self.take_limit().max(1)),
            winning => winning,
        }
    }

    /// Plays the scripted opponent's move for the player on turn.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` after the game has ended.
    pub fn scripted_take<R: Rng>(&mut self, rng: &mut R) -> Result<Vec<NimEvent>> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        let n = self.optimal_take(rng);
        self.take(n)
    }
}
