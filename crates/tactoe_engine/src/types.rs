//! Core domain types: players, the board and game outcomes.

use super::action::{CorruptState, InvalidMove, Move};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// Participant in the game. The human always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// The person at the keyboard.
    Human,
    /// The heuristic opponent.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Default board glyph for this player.
    pub fn indicator(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

/// 3x3 board: one optional move per cell, in row-major order.
///
/// Boards are values. [`Board::place_move`] returns a new board and never
/// touches the receiver. Deserialization rejects a slot holding a move for
/// another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    squares: [Option<Move>; 9],
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct BoardRecord {
    squares: [Option<Move>; 9],
}

impl TryFrom<BoardRecord> for Board {
    type Error = CorruptState;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let misplaced = record.squares.iter().enumerate().find_map(|(index, square)| {
            square
                .filter(|mv| mv.position.to_index() != index)
                .map(|mv| (index, mv.position))
        });
        match misplaced {
            Some((index, position)) => Err(CorruptState::MisplacedMove { index, position }),
            None => Ok(Self {
                squares: record.squares,
            }),
        }
    }
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self { squares: [None; 9] }
    }

    /// Gets the move recorded at the given position.
    pub fn get(&self, pos: Position) -> Option<Move> {
        self.squares[pos.to_index()]
    }

    /// Checks if some recorded move has this position.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        !self.is_occupied(pos)
    }

    /// All cells currently held by `player`.
    #[instrument(skip(self))]
    pub fn positions_of(&self, player: Player) -> BTreeSet<Position> {
        self.moves()
            .filter(|m| m.player == player)
            .map(|m| m.position)
            .collect()
    }

    /// Records `player` at `index`, returning the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] for an index outside 0-8 and
    /// [`InvalidMove::Occupied`] when the cell already holds a move.
    #[instrument(skip(self))]
    pub fn place_move(&self, player: Player, index: usize) -> Result<Board, InvalidMove> {
        let pos = Position::from_index(index).ok_or(InvalidMove::OutOfRange(index))?;
        if self.is_occupied(pos) {
            return Err(InvalidMove::Occupied(pos));
        }

        let mut next = *self;
        next.squares[index] = Some(Move::new(player, pos));
        Ok(next)
    }

    /// Recorded moves in board order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.squares.iter().flatten().copied()
    }

    /// Empty cells in board order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.moves().count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based key so the text doubles as a keypad.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, pos) in Position::ALL.iter().enumerate() {
            let symbol = match self.get(*pos) {
                Some(m) => m.indicator(),
                None => char::from_digit(i as u32 + 1, 10).unwrap_or('?'),
            };
            result.push(symbol);
            if pos.col() < 2 {
                result.push('|');
            } else if pos.row() < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of evaluating a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// No terminal condition yet.
    #[display("In progress")]
    InProgress,
    /// The human completed a line.
    #[display("Human wins")]
    HumanWin,
    /// The computer completed a line.
    #[display("Computer wins")]
    ComputerWin,
    /// Full board, no line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Winning outcome for `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => Outcome::HumanWin,
            Player::Computer => Outcome::ComputerWin,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::HumanWin => Some(Player::Human),
            Outcome::ComputerWin => Some(Player::Computer),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// True for every outcome except [`Outcome::InProgress`].
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
