//! Orchestration of one human + computer exchange.
//!
//! The exchange is split in two halves so a presentation layer can pause
//! between them. [`TurnOrchestrator::play_exchange`] runs both back to back.

use super::action::{EngineError, InvalidMove, Move};
use super::heuristic::Rule;
use super::{GameState, Outcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Something the view layer should react to, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The human's move was recorded.
    HumanMoved(Move),
    /// A computer reply is pending; input should be disabled.
    BoardLocked,
    /// The computer's move was recorded.
    ComputerMoved {
        /// The recorded move.
        mv: Move,
        /// Rule that selected it.
        rule: Rule,
    },
    /// Input may be enabled again.
    BoardUnlocked,
    /// The game reached a terminal outcome.
    Finished(Outcome),
}

/// Resulting state plus the events that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    state: GameState,
    events: Vec<TurnEvent>,
}

impl Exchange {
    /// State after the exchange.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events in order.
    pub fn events(&self) -> &[TurnEvent] {
        &self.events
    }

    /// Consumes the exchange, returning the state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Outcome after the exchange.
    pub fn outcome(&self) -> Outcome {
        self.state.evaluate()
    }
}

/// Drives exchanges against a game state, owning the randomness used by the
/// computer's fallback rule.
#[derive(Debug, Clone)]
pub struct TurnOrchestrator<R> {
    rng: R,
}

impl TurnOrchestrator<StdRng> {
    /// Orchestrator with a reproducible random sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Orchestrator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> TurnOrchestrator<R> {
    /// Creates an orchestrator around the given RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// First half: validate and record the human move, then evaluate.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] and leaves `state` untouched when the move is
    /// rejected.
    #[instrument(skip(self, state))]
    pub fn human_half(&self, state: &GameState, index: usize) -> Result<Exchange, InvalidMove> {
        let next = state.apply_human_move(index)?;
        let mut events = Vec::with_capacity(2);
        if let Some(mv) = next.last_move() {
            events.push(TurnEvent::HumanMoved(mv));
        }
        if next.evaluate().is_terminal() {
            events.push(TurnEvent::Finished(next.evaluate()));
        } else {
            events.push(TurnEvent::BoardLocked);
        }
        debug!(?events, "Human half complete");
        Ok(Exchange {
            state: next,
            events,
        })
    }

    /// Second half: compute and record the computer move, then evaluate.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the game is over or the board is full.
    #[instrument(skip(self, state))]
    pub fn computer_half(&mut self, state: &GameState) -> Result<Exchange, EngineError> {
        let (next, decision) = state.computer_turn(&mut self.rng)?;
        let mut events = Vec::with_capacity(3);
        if let Some(mv) = next.last_move() {
            events.push(TurnEvent::ComputerMoved {
                mv,
                rule: decision.rule,
            });
        }
        events.push(TurnEvent::BoardUnlocked);
        if next.evaluate().is_terminal() {
            events.push(TurnEvent::Finished(next.evaluate()));
        }
        debug!(?events, "Computer half complete");
        Ok(Exchange {
            state: next,
            events,
        })
    }

    /// Full exchange with no pause between the halves.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMove`] for a rejected human move. A
    /// [`EngineError::NoMoveAvailable`] here means the draw check failed.
    #[instrument(skip(self, state))]
    pub fn play_exchange(
        &mut self,
        state: &GameState,
        index: usize,
    ) -> Result<Exchange, EngineError> {
        let human = self.human_half(state, index)?;
        if human.outcome().is_terminal() {
            return Ok(human);
        }

        let computer = self.computer_half(human.state())?;
        let mut events = human.events;
        events.extend(computer.events);
        Ok(Exchange {
            state: computer.state,
            events,
        })
    }

    /// Back to the initial state, from anywhere.
    pub fn reset(&self, state: &GameState) -> GameState {
        state.reset()
    }
}
