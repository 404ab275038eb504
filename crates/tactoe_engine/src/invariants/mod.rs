//! First-class invariants for game states.
//!
//! Invariants are logical properties that must hold after every engine
//! transition. They are checked in debug builds and can be tested
//! independently.

use super::GameState;
use tracing::error;

pub mod history_consistent;
pub mod lock_advisory;
pub mod outcome_consistent;

pub use history_consistent::HistoryConsistentInvariant;
pub use lock_advisory::LockAdvisoryInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    HistoryConsistentInvariant,
    LockAdvisoryInvariant,
    OutcomeConsistentInvariant,
);

/// Panics in debug builds if `state` breaks any game invariant.
pub(crate) fn debug_assert_invariants(state: &GameState) {
    if cfg!(debug_assertions) {
        if let Err(violations) = GameInvariants::check_all(state) {
            error!(?violations, "Game invariants violated");
            panic!("Game invariants violated: {:?}", violations);
        }
    }
}
