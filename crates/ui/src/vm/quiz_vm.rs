use quiz_core::Progression;
use quiz_core::model::{AnswerIndex, Question, QuizSummary};
use services::{QuizLoadError, QuizLoopService, QuizPhase, QuizSession, SessionError};
use storage::StorageError;

use crate::feedback::Cue;
use crate::views::ViewError;
use crate::vm::{QuizSummaryVm, map_quiz_summary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Next,
    Restart,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub state: OptionState,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionPanelVm {
    pub counter_label: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub tip: Option<String>,
    pub can_advance: bool,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizBody {
    Question(QuestionPanelVm),
    Complete(QuizSummaryVm),
}

/// Everything the quiz page renders, pulled from the session after each transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreen {
    pub tier: u32,
    pub level_label: String,
    pub progress_percent: u8,
    pub body: QuizBody,
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    /// Wrap a session, starting its first run if it has not begun yet.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the session refuses to start.
    pub fn new(mut session: QuizSession) -> Result<Self, ViewError> {
        if session.phase() == QuizPhase::NotStarted {
            session.start().map_err(ViewError::from_session)?;
        }
        Ok(Self { session })
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    /// Translate a user intent into a session transition.
    ///
    /// Intents that do not fit the current phase (a second click on an option, "next"
    /// before answering) are ignored. Returns the cues to play.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::InvalidSelection` for an out-of-range option and
    /// `ViewError::Unknown` for any other session failure.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<Vec<Cue>, ViewError> {
        match intent {
            QuizIntent::Select(index) => {
                if self.phase() != QuizPhase::AwaitingAnswer {
                    return Ok(Vec::new());
                }
                let outcome = self.session.answer(index).map_err(ViewError::from_session)?;
                let verdict = if outcome.is_correct {
                    Cue::Correct
                } else {
                    Cue::Incorrect
                };
                Ok(vec![verdict, Cue::Reveal])
            }
            QuizIntent::Next => {
                if self.phase() != QuizPhase::Answered {
                    return Ok(Vec::new());
                }
                self.session.advance().map_err(ViewError::from_session)?;
                Ok(Vec::new())
            }
            QuizIntent::Restart => {
                self.session.restart();
                Ok(Vec::new())
            }
            QuizIntent::Quit => {
                tracing::info!(
                    phase = %self.phase(),
                    score = self.session.score(),
                    "quiz quit"
                );
                self.session.restart();
                Ok(Vec::new())
            }
        }
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        let session = &self.session;
        let tier = session.level();
        let body = match session.current_question() {
            Ok(question) => QuizBody::Question(self.question_panel(question)),
            // A started session without a current question is completed.
            Err(_) => {
                let total = u32::try_from(session.total()).unwrap_or(u32::MAX);
                QuizBody::Complete(map_quiz_summary(&QuizSummary::new(session.score(), total)))
            }
        };

        QuizScreen {
            tier,
            level_label: Progression::level_label(tier),
            progress_percent: session.progress().percent(),
            body,
        }
    }

    fn question_panel(&self, question: &Question) -> QuestionPanelVm {
        let answered = self.session.last_selection();
        let options = AnswerIndex::all()
            .map(|index| {
                let state = match answered {
                    Some(_) if question.is_correct(index) => OptionState::Correct,
                    Some(selected) if selected == index => OptionState::Incorrect,
                    _ => OptionState::Idle,
                };
                OptionVm {
                    index: index.value(),
                    letter: index.letter(),
                    text: question.option(index).to_owned(),
                    state,
                    enabled: answered.is_none(),
                }
            })
            .collect();

        let position = self.session.current_index() + 1;
        let total = self.session.total();
        QuestionPanelVm {
            counter_label: format!("Question {position} of {total}"),
            prompt: question.prompt().to_owned(),
            options,
            tip: answered.map(|_| question.tip().to_owned()),
            can_advance: answered.is_some(),
            next_label: if position >= total {
                "See Results 🏆"
            } else {
                "Next Question ➡"
            },
        }
    }
}

impl ViewError {
    pub(crate) fn from_session(err: SessionError) -> Self {
        match err {
            SessionError::InvalidInput { .. } => Self::InvalidSelection,
            other => {
                tracing::error!(error = %other, "quiz session rejected a transition");
                Self::Unknown
            }
        }
    }
}

/// # Errors
///
/// Returns `ViewError::QuestionRow` when a question row is malformed,
/// `ViewError::QuestionFile` when the source cannot be read, and
/// `ViewError::Unknown` for other failures.
pub async fn start_quiz(quiz_loop: &QuizLoopService) -> Result<QuizVm, ViewError> {
    match quiz_loop.load_session().await {
        Ok(session) => QuizVm::new(session),
        Err(err) => {
            tracing::error!(error = %err, "failed to load quiz");
            Err(match err {
                QuizLoadError::Storage(StorageError::DataFormat(data)) => {
                    ViewError::QuestionRow(data.row)
                }
                QuizLoadError::Storage(_) => ViewError::QuestionFile,
                _ => ViewError::Unknown,
            })
        }
    }
}
