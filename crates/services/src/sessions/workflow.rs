use std::sync::Arc;

use quiz_core::Progression;
use storage::{QuestionRepository, load_bank};

use super::service::QuizSession;
use crate::error::QuizLoadError;

/// Loads the question bank and hands out quiz sessions that own it.
#[derive(Clone)]
pub struct QuizLoopService {
    questions: Arc<dyn QuestionRepository>,
    progression: Progression,
    shuffle: bool,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self {
            questions,
            progression: Progression::default(),
            shuffle: true,
        }
    }

    #[must_use]
    pub fn with_progression(mut self, progression: Progression) -> Self {
        self.progression = progression;
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn progression(&self) -> Progression {
        self.progression
    }

    /// Load the bank and return a session that has not started yet.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoadError::Storage` if the source is unreadable or malformed.
    pub async fn load_session(&self) -> Result<QuizSession, QuizLoadError> {
        let bank = load_bank(self.questions.as_ref()).await?;
        Ok(QuizSession::new(bank, self.progression).with_shuffle(self.shuffle))
    }

    /// Load the bank and start the first run.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoadError` for load failures.
    pub async fn start_session(&self) -> Result<QuizSession, QuizLoadError> {
        let mut session = self.load_session().await?;
        session.start()?;
        Ok(session)
    }
}

impl std::fmt::Debug for QuizLoopService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizLoopService")
            .field("source", &self.questions.describe())
            .field("progression", &self.progression)
            .field("shuffle", &self.shuffle)
            .finish()
    }
}
