use parlor_dots::{Board, Edge};

/// What drawing an edge does to its bordering cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveKind {
    /// Closes a cell that is currently at 3/4 drawn edges.
    Completing,
    /// Leaves no bordering cell at 2/4 or better for the opponent.
    Safe,
    /// Completes nothing but leaves a bordering cell at 3/4.
    Dangerous,
}

/// Classifies an undrawn edge by inspecting its bordering cells only.
///
/// Completion dominates: an edge that closes one cell while setting up the
/// other is still `Completing`. Chain effects beyond the immediate
/// neighbors are deliberately ignored.
pub fn classify(board: &Board, edge: Edge) -> MoveKind {
    let mut dangerous = false;
    for cell in board.grid().neighboring_cells(edge) {
        match board.drawn_sides(cell) {
            3 => return MoveKind::Completing,
            2 => dangerous = true,
            _ => {}
        }
    }
    if dangerous {
        MoveKind::Dangerous
    } else {
        MoveKind::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_core::Player;
    use parlor_dots::{Cell, Grid};

    fn board() -> Board {
        Board::new(Grid::new(4).unwrap())
    }

    /// Draw all but the last of the given edges.
    fn draw_sides(board: &mut Board, cell: Cell, count: usize) {
        for edge in cell.edges().into_iter().take(count) {
            board.draw(edge, Player::One).unwrap();
        }
    }

    #[test]
    fn test_empty_board_is_all_safe() {
        let board = board();
        for edge in board.undrawn_edges() {
            assert_eq!(classify(&board, edge), MoveKind::Safe);
        }
    }

    #[test]
    fn test_final_edge_classifies_completing() {
        let mut board = board();
        let cell = Cell::new(1, 1);
        draw_sides(&mut board, cell, 3);

        let last = cell.edges()[3];
        assert_eq!(classify(&board, last), MoveKind::Completing);
    }

    #[test]
    fn test_third_edge_classifies_dangerous() {
        let mut board = board();
        let cell = Cell::new(1, 1);
        draw_sides(&mut board, cell, 2);

        for edge in cell.edges().into_iter().skip(2) {
            assert_eq!(classify(&board, edge), MoveKind::Dangerous);
        }
    }

    #[test]
    fn test_completion_dominates_danger() {
        let mut board = board();
        // Shared edge between these two cells is vertical(2, 1)
        let left = Cell::new(1, 1);
        let right = Cell::new(2, 1);
        let shared = Edge::vertical(2, 1);

        // Left cell at 3/4, right cell at 2/4, both missing the shared edge
        for edge in left.edges() {
            if edge != shared {
                board.draw(edge, Player::One).unwrap();
            }
        }
        let mut drawn = 0;
        for edge in right.edges() {
            if edge != shared && !board.is_drawn(edge) && drawn < 2 {
                board.draw(edge, Player::One).unwrap();
                drawn += 1;
            }
        }
        assert_eq!(board.drawn_sides(left), 3);
        assert_eq!(board.drawn_sides(right), 2);

        assert_eq!(classify(&board, shared), MoveKind::Completing);
    }

    #[test]
    fn test_border_edge_single_neighbor() {
        let mut board = board();
        // Top and bottom of the corner cell drawn: its left border edge has
        // exactly one neighboring cell, now at 2/4
        let corner = Cell::new(0, 0);
        draw_sides(&mut board, corner, 2);

        let left = Edge::vertical(0, 0);
        assert_eq!(board.grid().neighboring_cells(left), vec![corner]);
        assert_eq!(classify(&board, left), MoveKind::Dangerous);
    }
}
