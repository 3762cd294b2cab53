#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use sessions as session;

pub use error::{QuizLoadError, SessionError};

pub use sessions::{AnswerOutcome, QuizLoopService, QuizPhase, QuizProgress, QuizSession};
