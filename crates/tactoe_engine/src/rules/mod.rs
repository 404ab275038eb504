//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The terminal check after a move is
//! ordered: the mover's win first, then the draw, so a full board that also
//! completes a line reports the win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_PATTERNS, has_won, winning_pattern};

use super::{Board, Outcome, Player};
use tracing::instrument;

/// Evaluates the board right after `mover` placed a mark.
#[instrument]
pub fn evaluate_after(board: &Board, mover: Player) -> Outcome {
    if has_won(board, mover) {
        Outcome::won_by(mover)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn board_from(cells: &[(usize, Player)]) -> Board {
        cells.iter().fold(Board::new(), |board, (index, player)| {
            board.place_move(*player, *index).expect("distinct cells")
        })
    }

    #[test]
    fn test_full_winning_board_reports_win() {
        // O X O / X O O / X X X
        let board = board_from(&[
            (0, Player::Computer),
            (1, Player::Human),
            (2, Player::Computer),
            (3, Player::Human),
            (4, Player::Computer),
            (5, Player::Computer),
            (6, Player::Human),
            (7, Player::Human),
            (8, Player::Human),
        ]);
        assert!(is_full(&board));
        assert_eq!(evaluate_after(&board, Player::Human), Outcome::HumanWin);
    }

    #[test]
    fn test_in_progress() {
        let board = board_from(&[(0, Player::Human), (4, Player::Computer)]);
        assert_eq!(evaluate_after(&board, Player::Computer), Outcome::InProgress);
        assert!(board.is_occupied(Position::Center));
    }
}
