//! Immutable game state and the transitions between states.
//!
//! Every transition borrows the current state and returns the next one, so a
//! rejected move leaves the caller holding exactly what it had.

use super::action::{CorruptState, EngineError, InvalidMove, Move};
use super::heuristic::{Decision, explain_computer_move};
use super::invariants::{GameInvariants, InvariantSet, debug_assert_invariants};
use super::rules::evaluate_after;
use super::{Board, Outcome, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game.
///
/// Deserialization checks the full invariant set and rejects any state the
/// transitions could not have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) board_locked: bool,
    pub(crate) outcome: Outcome,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct GameStateRecord {
    board: Board,
    history: Vec<Move>,
    board_locked: bool,
    outcome: Outcome,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = CorruptState;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        let state = GameState {
            board: record.board,
            history: record.history,
            board_locked: record.board_locked,
            outcome: record.outcome,
        };
        GameInvariants::check_all(&state).map_err(|violations| CorruptState::Violations {
            descriptions: violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a new game: empty board, no outcome, input enabled.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            board_locked: false,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Advisory: a computer reply is pending and the view should ignore input.
    ///
    /// The engine itself only rejects occupied cells and finished games.
    pub fn is_board_locked(&self) -> bool {
        self.board_locked
    }

    /// Returns the current outcome.
    pub fn evaluate(&self) -> Outcome {
        self.outcome
    }

    /// Records the human's move at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] for an out-of-range index, an occupied cell or
    /// a finished game.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn apply_human_move(&self, index: usize) -> Result<GameState, InvalidMove> {
        let next = self.record(Player::Human, index)?;
        info!(index, outcome = %next.outcome, "Human moved");
        Ok(next)
    }

    /// Picks and records the computer's reply.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMove`] if the game is already over and
    /// [`EngineError::NoMoveAvailable`] if the board is full.
    #[instrument(skip(self, rng), fields(moves = self.history.len()))]
    pub fn apply_computer_move<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<GameState, EngineError> {
        self.computer_turn(rng).map(|(next, _)| next)
    }

    /// Like [`GameState::apply_computer_move`], also returning the decision.
    ///
    /// # Errors
    ///
    /// Same as [`GameState::apply_computer_move`].
    #[instrument(skip(self, rng), fields(moves = self.history.len()))]
    pub fn computer_turn<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(GameState, Decision), EngineError> {
        if self.outcome.is_terminal() {
            return Err(InvalidMove::GameOver.into());
        }

        let decision = explain_computer_move(&self.board, rng)?;
        let next = self.record(Player::Computer, decision.position.to_index())?;
        info!(
            position = %decision.position,
            rule = %decision.rule,
            outcome = %next.outcome,
            "Computer moved"
        );
        Ok((next, decision))
    }

    /// Returns the initial state, whatever the current one is.
    #[instrument(skip(self), fields(moves = self.history.len(), outcome = %self.outcome))]
    pub fn reset(&self) -> GameState {
        debug!("Resetting game");
        GameState::new()
    }

    fn record(&self, player: Player, index: usize) -> Result<GameState, InvalidMove> {
        if self.outcome.is_terminal() {
            return Err(InvalidMove::GameOver);
        }

        let position = Position::from_index(index).ok_or(InvalidMove::OutOfRange(index))?;
        let board = self.board.place_move(player, index)?;
        let outcome = evaluate_after(&board, player);

        let mut history = self.history.clone();
        history.push(Move::new(player, position));

        let next = GameState {
            board,
            history,
            board_locked: player == Player::Human && !outcome.is_terminal(),
            outcome,
        };
        debug_assert_invariants(&next);
        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
