mod bank;
mod question;
mod summary;

pub use bank::QuestionBank;
pub use question::{AnswerIndex, OPTION_COUNT, Question, QuestionDraft, QuestionError};
pub use summary::QuizSummary;
