//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

use crate::sessions::QuizPhase;

/// Errors emitted by `QuizSession` transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// The operation is not allowed in the current phase.
    #[error("cannot {operation} while the quiz is {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: QuizPhase,
    },
    /// The selected option is not one of the four positions.
    #[error("answer index {index} is out of range (expected 0..=3)")]
    InvalidInput { index: usize },
}

/// Errors emitted while loading a quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizLoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
