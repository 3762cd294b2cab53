mod progress;
mod service;
mod workflow;

// Public API of the quiz session subsystem.
pub use crate::error::SessionError;
pub use progress::QuizProgress;
pub use service::{AnswerOutcome, QuizPhase, QuizSession};
pub use workflow::QuizLoopService;
