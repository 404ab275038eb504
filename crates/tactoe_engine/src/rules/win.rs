//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The eight winning lines, in evaluation order: rows, columns, diagonals.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first pattern fully held by `player`, if any.
#[instrument]
pub fn winning_pattern(board: &Board, player: Player) -> Option<[Position; 3]> {
    let held = board.positions_of(player);
    WIN_PATTERNS
        .iter()
        .find(|pattern| pattern.iter().all(|pos| held.contains(pos)))
        .copied()
}

/// Checks whether `player` holds a complete line.
#[instrument]
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_pattern(board, player).is_some()
}
