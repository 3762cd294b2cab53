use std::fmt;

use quiz_core::Progression;
use quiz_core::model::{AnswerIndex, Question, QuestionBank, QuizSummary};

use super::progress::QuizProgress;
use crate::error::SessionError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// State-machine state of a `QuizSession`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    #[default]
    NotStarted,
    AwaitingAnswer,
    Answered,
    Completed,
}

impl QuizPhase {
    /// True while a run is in progress.
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::AwaitingAnswer | Self::Answered)
    }
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not started",
            Self::AwaitingAnswer => "awaiting an answer",
            Self::Answered => "answered",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// Captures the result of answering one question within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Position of the question within the run.
    pub position: usize,
    pub selected: AnswerIndex,
    pub correct_index: AnswerIndex,
    pub is_correct: bool,
    /// Score after this answer.
    pub score: u32,
    /// Tier after this answer.
    pub level: u32,
    pub level_up: bool,
}

//
// ─── RUN STATE ─────────────────────────────────────────────────────────────────
//

/// Per-attempt state. Replaced wholesale on every start.
#[derive(Debug, Clone, Default)]
struct QuizRun {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    phase: QuizPhase,
    last_selection: Option<AnswerIndex>,
    level: u32,
    outcomes: Vec<AnswerOutcome>,
}

impl QuizRun {
    fn fresh(questions: Vec<Question>, baseline: u32) -> Self {
        let phase = if questions.is_empty() {
            QuizPhase::Completed
        } else {
            QuizPhase::AwaitingAnswer
        };
        Self {
            questions,
            current: 0,
            score: 0,
            phase,
            last_selection: None,
            level: baseline,
            outcomes: Vec::new(),
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz state machine over a question bank.
///
/// `NotStarted → AwaitingAnswer → Answered → (AwaitingAnswer | Completed)`.
/// Every transition is synchronous; callers observe the result through the read
/// accessors after each call.
pub struct QuizSession {
    bank: QuestionBank,
    progression: Progression,
    shuffle: bool,
    run: QuizRun,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: QuestionBank, progression: Progression) -> Self {
        let run = QuizRun {
            level: progression.baseline(),
            ..QuizRun::default()
        };
        Self {
            bank,
            progression,
            shuffle: true,
            run,
        }
    }

    /// Enable or disable shuffling the bank at the start of each run.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn progression(&self) -> Progression {
        self.progression
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.run.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.run.score
    }

    /// Current tier, 0-based.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.run.level
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.run.current
    }

    /// Number of questions in the current run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.run.questions.len()
    }

    /// Option picked for the current question, present only while `Answered`.
    #[must_use]
    pub fn last_selection(&self) -> Option<AnswerIndex> {
        self.run.last_selection
    }

    #[must_use]
    pub fn outcomes(&self) -> &[AnswerOutcome] {
        &self.run.outcomes
    }

    /// Begin a run from `NotStarted` or `Completed`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` while a run is in progress; use
    /// [`restart`](Self::restart) to abandon it.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.expect_phase("start", &[QuizPhase::NotStarted, QuizPhase::Completed])?;
        self.begin_run();
        Ok(())
    }

    /// Abandon whatever is in progress and begin a fresh run. Allowed from any phase.
    pub fn restart(&mut self) {
        if self.run.phase.is_running() {
            tracing::info!(
                answered = self.run.outcomes.len(),
                total = self.run.questions.len(),
                "quiz abandoned"
            );
        }
        self.begin_run();
    }

    /// Answer the current question with the option at `selected`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the phase is `AwaitingAnswer`
    /// and `SessionError::InvalidInput` if `selected` is not in `0..4`. State is left
    /// unchanged on error.
    pub fn answer(&mut self, selected: usize) -> Result<AnswerOutcome, SessionError> {
        self.expect_phase("answer", &[QuizPhase::AwaitingAnswer])?;
        let selected_index =
            AnswerIndex::new(selected).map_err(|_| SessionError::InvalidInput { index: selected })?;

        let run = &mut self.run;
        let Some(question) = run.questions.get(run.current) else {
            return Err(SessionError::InvalidTransition {
                operation: "answer",
                phase: run.phase,
            });
        };

        let is_correct = question.is_correct(selected_index);
        let correct_index = question.correct();
        if is_correct {
            run.score = run.score.saturating_add(1);
        }
        let previous_level = run.level;
        run.level = self.progression.tier(run.score);
        run.last_selection = Some(selected_index);
        run.phase = QuizPhase::Answered;

        tracing::debug!(
            position = run.current,
            selected = selected,
            is_correct,
            score = run.score,
            level = run.level,
            "answer recorded"
        );

        let outcome = AnswerOutcome {
            position: run.current,
            selected: selected_index,
            correct_index,
            is_correct,
            score: run.score,
            level: run.level,
            level_up: run.level > previous_level,
        };
        run.outcomes.push(outcome);
        Ok(outcome)
    }

    /// Move past an answered question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the phase is `Answered`.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        self.expect_phase("advance", &[QuizPhase::Answered])?;

        let run = &mut self.run;
        run.current += 1;
        run.last_selection = None;
        if run.current >= run.questions.len() {
            run.phase = QuizPhase::Completed;
            tracing::info!(
                score = run.score,
                total = run.questions.len(),
                "quiz completed"
            );
        } else {
            run.phase = QuizPhase::AwaitingAnswer;
        }
        Ok(())
    }

    /// The question being shown.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` before `start` or after completion.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        self.expect_phase(
            "show a question",
            &[QuizPhase::AwaitingAnswer, QuizPhase::Answered],
        )?;
        self.run
            .questions
            .get(self.run.current)
            .ok_or(SessionError::InvalidTransition {
                operation: "show a question",
                phase: self.run.phase,
            })
    }

    /// Share of the run that is done, in `[0, 1]`.
    ///
    /// Counts the current question once it has been answered; `1.0` once completed,
    /// `0.0` before the first start.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self) -> f64 {
        let run = &self.run;
        match run.phase {
            QuizPhase::NotStarted => 0.0,
            QuizPhase::Completed => 1.0,
            QuizPhase::AwaitingAnswer | QuizPhase::Answered => {
                let total = run.questions.len();
                if total == 0 {
                    return 1.0;
                }
                let done = run.current + usize::from(run.phase == QuizPhase::Answered);
                (done as f64 / total as f64).clamp(0.0, 1.0)
            }
        }
    }

    /// Returns a summary of the current progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.total();
        let answered = self.run.outcomes.len();
        QuizProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: self.run.phase == QuizPhase::Completed,
            fraction: self.progress_fraction(),
        }
    }

    /// Final score of a completed run.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the phase is `Completed`.
    pub fn summary(&self) -> Result<QuizSummary, SessionError> {
        self.expect_phase("summarize", &[QuizPhase::Completed])?;
        let total = u32::try_from(self.run.questions.len()).unwrap_or(u32::MAX);
        Ok(QuizSummary::new(self.run.score, total))
    }

    fn begin_run(&mut self) {
        let questions = if self.shuffle {
            self.bank.shuffled_copy()
        } else {
            self.bank.ordered_copy()
        };
        self.run = QuizRun::fresh(questions, self.progression.baseline());
        tracing::info!(
            questions = self.run.questions.len(),
            shuffled = self.shuffle,
            "quiz started"
        );
    }

    fn expect_phase(
        &self,
        operation: &'static str,
        allowed: &[QuizPhase],
    ) -> Result<(), SessionError> {
        if allowed.contains(&self.run.phase) {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                operation,
                phase: self.run.phase,
            })
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("bank_len", &self.bank.len())
            .field("phase", &self.run.phase)
            .field("current", &self.run.current)
            .field("total", &self.run.questions.len())
            .field("score", &self.run.score)
            .field("level", &self.run.level)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
