//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use tactoe_engine::Position;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps keys '1'-'9' to cells in reading order.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_edges_clamp() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('x')), Position::Center);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_position('1'), Some(Position::TopLeft));
        assert_eq!(digit_position('5'), Some(Position::Center));
        assert_eq!(digit_position('9'), Some(Position::BottomRight));
        assert_eq!(digit_position('0'), None);
        assert_eq!(digit_position('a'), None);
    }
}
