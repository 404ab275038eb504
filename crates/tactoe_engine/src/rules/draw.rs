//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player};
use super::win::has_won;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == 9
}

/// A full board on which neither player holds a line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_won(board, Player::Human) && !has_won(board, Player::Computer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(human: &[usize], computer: &[usize]) -> Board {
        let board = human.iter().fold(Board::new(), |b, &i| {
            b.place_move(Player::Human, i).expect("distinct cells")
        });
        computer.iter().fold(board, |b, &i| {
            b.place_move(Player::Computer, i).expect("distinct cells")
        })
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from(&[4], &[]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = board_from(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / X O O
        let board = board_from(&[0, 1, 2, 5, 6], &[3, 4, 7, 8]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
