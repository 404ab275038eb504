//! Lock advisory invariant: the board is locked exactly while a computer
//! reply is owed.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `board_locked` is set iff the last move was the human's and
/// the game is still in progress.
pub struct LockAdvisoryInvariant;

impl Invariant<GameState> for LockAdvisoryInvariant {
    fn holds(game: &GameState) -> bool {
        let reply_owed = game.last_move().map(|m| m.player) == Some(Player::Human)
            && !game.evaluate().is_terminal();
        game.is_board_locked() == reply_owed
    }

    fn description() -> &'static str {
        "Board is locked exactly while a computer reply is pending"
    }
}
