//! History consistency: the move list rebuilds the board exactly.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: replaying the history onto an empty board reproduces the
/// current board, and no replayed move lands on an occupied cell.
///
/// Together these give the board's core guarantee: at most one move per cell
/// and cells never change once set.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let replayed = game.history().iter().try_fold(Board::new(), |board, mv| {
            board.place_move(mv.player, mv.position.to_index())
        });

        matches!(replayed, Ok(board) if board == *game.board())
    }

    fn description() -> &'static str {
        "Move history replays to the current board without overwriting a cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = GameState::new()
            .apply_human_move(0)
            .and_then(|g| g.apply_human_move(4))
            .and_then(|g| g.apply_human_move(8))
            .expect("distinct cells");
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = GameState::new().apply_human_move(4).expect("empty cell");
        game.history.push(Move::new(Player::Computer, Position::Center));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_board_without_history_violates() {
        let mut game = GameState::new();
        game.board = game
            .board
            .place_move(Player::Human, 0)
            .expect("empty cell");
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
