//! Outcome consistency: the stored outcome matches the board.

use super::super::rules::evaluate_after;
use super::super::{GameState, Outcome};
use super::Invariant;

/// Invariant: the stored outcome equals the outcome re-derived from the
/// board and the player who moved last.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let expected = match game.last_move() {
            Some(mv) => evaluate_after(game.board(), mv.player),
            None => Outcome::InProgress,
        };
        game.evaluate() == expected
    }

    fn description() -> &'static str {
        "Stored outcome matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(OutcomeConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_missed_win_violates() {
        let mut game = GameState::new()
            .apply_human_move(0)
            .and_then(|g| g.apply_human_move(1))
            .and_then(|g| g.apply_human_move(2))
            .expect("distinct cells");
        assert_eq!(game.evaluate(), Outcome::HumanWin);

        game.outcome = Outcome::InProgress;
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }
}
