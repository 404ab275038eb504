//! Moves and the errors raised when recording them.
//!
//! A move is a domain event: created once when a player commits to a cell
//! and never mutated afterwards.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Glyph used to render this move on the board.
    pub fn indicator(&self) -> char {
        self.player.indicator()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A move the engine refuses to record.
///
/// Rejection leaves the state untouched; callers simply ignore the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a move.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The game already has a terminal outcome.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for InvalidMove {}

/// The computer was asked to move on a full board.
///
/// Correct orchestration catches the full board with the draw check first,
/// so this signals a broken caller rather than a user mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("No move available: the board is full")]
pub struct NoMoveAvailable;

/// A deserialized board or game that no sequence of legal moves produces.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CorruptState {
    /// A board slot holds a move recorded for a different cell.
    #[display("Slot {} holds a move for {}", index, position)]
    MisplacedMove {
        /// Slot the move was found in.
        index: usize,
        /// Cell the move claims.
        position: Position,
    },

    /// The game state breaks one or more invariants.
    #[display("Game invariants violated: {}", descriptions)]
    Violations {
        /// Violated invariant descriptions, `; `-separated.
        descriptions: String,
    },
}

impl std::error::Error for CorruptState {}

/// Any failure of an engine transition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum EngineError {
    /// The move could not be recorded.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMove),

    /// No empty cell was left for the computer.
    #[display("{}", _0)]
    NoMoveAvailable(NoMoveAvailable),
}
