use crate::door::Door;
use crate::session::Phase;

/// Alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur when driving a game.
///
/// None of these are fatal: every rejected operation leaves the session and
/// the tallies exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A zero-based door index outside `0..3`.
    #[error("invalid door index {0}: expected 0, 1 or 2")]
    InvalidDoor(usize),

    /// A one-based door number outside `1..=3`.
    #[error("invalid door number {0}: expected 1, 2 or 3")]
    InvalidDoorNumber(usize),

    /// The operation is not valid in the session's current phase.
    #[error("cannot {operation} while {phase}")]
    WrongPhase {
        /// The rejected operation.
        operation: &'static str,
        /// The phase the session was in.
        phase: Phase,
    },

    /// The player tried to finish on the door the host already opened.
    #[error("{0} is already open; pick one of the closed doors")]
    RevealedDoor(Door),

    /// A strategy name that does not match any known strategy.
    #[error("unknown strategy \"{0}\": expected manual, stay or switch")]
    UnknownStrategy(String),

    /// Persisted state that violates a session or tally invariant.
    #[error("inconsistent game state: {0}")]
    Inconsistent(String),
}
