//! Computer move selection.
//!
//! A fixed priority of rules rather than a search: take a winning cell, else
//! block the human's winning cell, else the center, else any empty cell at
//! random. Each rule scans [`WIN_PATTERNS`] in order and the first pattern
//! that yields a cell decides.

use super::action::NoMoveAvailable;
use super::rules::{WIN_PATTERNS, is_full};
use super::{Board, Player, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

/// The rule that produced a computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rule {
    /// Completes a computer line.
    #[display("going for the win")]
    Win,
    /// Occupies the last open cell of a human line.
    #[display("blocking")]
    Block,
    /// Takes the center.
    #[display("taking the center")]
    Center,
    /// Nothing better to do.
    #[display("picking at random")]
    Random,
}

/// A chosen cell and the rule behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Cell the computer plays.
    pub position: Position,
    /// Rule that selected it.
    pub rule: Rule,
}

/// Picks the computer's next cell.
///
/// # Errors
///
/// Returns [`NoMoveAvailable`] when the board is full.
#[instrument(skip(rng))]
pub fn select_computer_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Position, NoMoveAvailable> {
    explain_computer_move(board, rng).map(|decision| decision.position)
}

/// Like [`select_computer_move`] but also reports which rule fired.
///
/// # Errors
///
/// Returns [`NoMoveAvailable`] when the board is full.
#[instrument(skip(rng))]
pub fn explain_computer_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Decision, NoMoveAvailable> {
    if is_full(board) {
        warn!("Computer move requested on a full board");
        return Err(NoMoveAvailable);
    }

    let computer = board.positions_of(Player::Computer);
    let human = board.positions_of(Player::Human);

    let decision = if let Some(position) = last_open_cell(board, &computer) {
        Decision { position, rule: Rule::Win }
    } else if let Some(position) = last_open_cell(board, &human) {
        Decision { position, rule: Rule::Block }
    } else if board.is_empty(Position::Center) {
        Decision {
            position: Position::Center,
            rule: Rule::Center,
        }
    } else {
        let position = *board
            .empty_positions()
            .choose(rng)
            .ok_or(NoMoveAvailable)?;
        Decision {
            position,
            rule: Rule::Random,
        }
    };

    debug!(position = %decision.position, rule = %decision.rule, "Computer chose position");
    Ok(decision)
}

/// First pattern where `held` is missing exactly one cell and that cell is free.
fn last_open_cell(board: &Board, held: &BTreeSet<Position>) -> Option<Position> {
    WIN_PATTERNS.iter().find_map(|pattern| {
        let mut missing = pattern.iter().filter(|pos| !held.contains(pos));
        match (missing.next(), missing.next()) {
            (Some(&cell), None) if board.is_empty(cell) => Some(cell),
            _ => None,
        }
    })
}
