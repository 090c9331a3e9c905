//! Property-based tests for the computer player.
//!
//! Random legal playthroughs put the board in arbitrary mid-game shapes,
//! then the selection policy is checked against the classification of
//! every available edge.

use parlor_core::Player;
use parlor_dots::{Board, Grid};
use parlor_strategy::{choose_edge, classify, MoveKind};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build a board by replaying random move indices through legal draws,
/// stopping early so the board usually stays mid-game.
fn arb_midgame() -> impl Strategy<Value = (u8, Vec<usize>)> {
    (4u8..8).prop_flat_map(|cells| {
        let max_moves = 2 * cells as usize * (cells as usize + 1) - 1;
        (
            Just(cells),
            proptest::collection::vec(0usize..256, 0..max_moves),
        )
    })
}

fn replay(cells: u8, moves: &[usize]) -> Board {
    let mut board = Board::new(Grid::new(cells).unwrap());
    let mut mover = Player::One;
    for &index in moves {
        let remaining = board.remaining_count();
        if remaining == 0 {
            break;
        }
        let edge = board
            .undrawn_edges()
            .nth(index % remaining)
            .expect("remaining > 0");
        let closed = board.draw(edge, mover).unwrap();
        if closed.is_empty() {
            mover = mover.opposite();
        }
    }
    board
}

proptest! {
    /// Whenever a completing edge exists, the strategy plays one - never a
    /// safe or dangerous edge while a completion is on the table.
    #[test]
    fn prop_never_ignores_completion((cells, moves) in arb_midgame(), seed in any::<u64>()) {
        let board = replay(cells, &moves);
        let has_completion = board
            .undrawn_edges()
            .any(|e| classify(&board, e) == MoveKind::Completing);
        prop_assume!(has_completion);

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let chosen = choose_edge(&board, &mut rng).expect("edges remain");
        prop_assert_eq!(classify(&board, chosen), MoveKind::Completing);
    }

    /// With no completion available and at least one safe edge, the
    /// strategy never hands over a free cell.
    #[test]
    fn prop_prefers_safe_over_dangerous((cells, moves) in arb_midgame(), seed in any::<u64>()) {
        let board = replay(cells, &moves);
        let kinds: Vec<MoveKind> = board
            .undrawn_edges()
            .map(|e| classify(&board, e))
            .collect();
        prop_assume!(!kinds.is_empty());
        prop_assume!(!kinds.contains(&MoveKind::Completing));
        prop_assume!(kinds.contains(&MoveKind::Safe));

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let chosen = choose_edge(&board, &mut rng).expect("edges remain");
        prop_assert_eq!(classify(&board, chosen), MoveKind::Safe);
    }

    /// The chosen edge is always a legal, undrawn member of the universe.
    #[test]
    fn prop_selection_is_legal((cells, moves) in arb_midgame(), seed in any::<u64>()) {
        let board = replay(cells, &moves);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        match choose_edge(&board, &mut rng) {
            Some(edge) => {
                prop_assert!(board.grid().contains_edge(edge));
                prop_assert!(!board.is_drawn(edge));
            }
            None => prop_assert_eq!(board.remaining_count(), 0),
        }
    }

    /// Classification never depends on the RNG and never mutates the board.
    #[test]
    fn prop_classification_is_pure((cells, moves) in arb_midgame()) {
        let board = replay(cells, &moves);
        let before = board.drawn_count();

        let first: Vec<MoveKind> = board
            .undrawn_edges()
            .map(|e| classify(&board, e))
            .collect();
        let second: Vec<MoveKind> = board
            .undrawn_edges()
            .map(|e| classify(&board, e))
            .collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(board.drawn_count(), before);
    }
}
