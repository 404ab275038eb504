//! Tactoe engine - single-player tic-tac-toe against a heuristic opponent.
//!
//! The engine is pure: every operation takes a state by reference and returns
//! a new state, so the presentation layer owns all timing and rendering.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 record of placed moves with occupancy queries
//! - **Rules**: win and draw detection over the eight fixed win patterns
//! - **Heuristic**: computer move selection (win > block > center > random)
//! - **Game**: immutable game state and the human/computer transitions
//! - **Turn**: orchestration of one full human + computer exchange
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use tactoe_engine::{GameState, Outcome};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let game = GameState::new();
//! let game = game.apply_human_move(0).expect("empty board accepts any cell");
//! assert!(game.is_board_locked());
//! let game = game.apply_computer_move(&mut rng).expect("board has room");
//! assert_eq!(game.evaluate(), Outcome::InProgress);
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod heuristic;
mod invariants;
mod position;
mod rules;
mod turn;
mod types;

pub use action::{CorruptState, EngineError, InvalidMove, Move, NoMoveAvailable};
pub use game::GameState;
pub use heuristic::{Decision, Rule, explain_computer_move, select_computer_move};
pub use invariants::{
    GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    LockAdvisoryInvariant, OutcomeConsistentInvariant,
};
pub use position::Position;
pub use rules::{WIN_PATTERNS, evaluate_after, has_won, is_draw, is_full, winning_pattern};
pub use turn::{Exchange, TurnEvent, TurnOrchestrator};
pub use types::{Board, Outcome, Player};
