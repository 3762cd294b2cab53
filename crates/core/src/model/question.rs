use std::fmt;

use thiserror::Error;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("expected 4 options, found {0}")]
    WrongOptionCount(usize),

    #[error("answer `{0}` is not one of the option letters a-d")]
    InvalidAnswerLetter(String),

    #[error("answer index {0} is out of range (expected 0..=3)")]
    AnswerOutOfRange(usize),
}

//
// ─── ANSWER INDEX ──────────────────────────────────────────────────────────────
//

/// Position of an option within a question, always in `0..OPTION_COUNT`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnswerIndex(usize);

impl AnswerIndex {
    /// Creates an `AnswerIndex` from a zero-based position.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::AnswerOutOfRange` if `index >= OPTION_COUNT`.
    pub fn new(index: usize) -> Result<Self, QuestionError> {
        if index < OPTION_COUNT {
            Ok(Self(index))
        } else {
            Err(QuestionError::AnswerOutOfRange(index))
        }
    }

    /// Parses an option letter (`a`..`d`, case-insensitive, surrounding whitespace ignored).
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidAnswerLetter` for anything else.
    pub fn from_letter(raw: &str) -> Result<Self, QuestionError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => match letter.to_ascii_lowercase() {
                'a' => Ok(Self(0)),
                'b' => Ok(Self(1)),
                'c' => Ok(Self(2)),
                'd' => Ok(Self(3)),
                _ => Err(QuestionError::InvalidAnswerLetter(trimmed.to_owned())),
            },
            _ => Err(QuestionError::InvalidAnswerLetter(trimmed.to_owned())),
        }
    }

    /// Returns the underlying zero-based position.
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }

    /// Returns the lowercase option letter for this position.
    #[must_use]
    pub fn letter(&self) -> char {
        match self.0 {
            0 => 'a',
            1 => 'b',
            2 => 'c',
            _ => 'd',
        }
    }

    /// All valid indices in option order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..OPTION_COUNT).map(Self)
    }
}

impl fmt::Debug for AnswerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnswerIndex({})", self.0)
    }
}

impl fmt::Display for AnswerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question fields, as read from a data source.
///
/// Blank strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub prompt: Option<String>,
    pub options: Vec<Option<String>>,
    pub answer: Option<String>,
    pub tip: Option<String>,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::MissingField` for blank or absent fields,
    /// `QuestionError::WrongOptionCount` if there are not exactly four options, and
    /// `QuestionError::InvalidAnswerLetter` if the answer is not `a`..`d`.
    pub fn validate(self) -> Result<Question, QuestionError> {
        const OPTION_FIELDS: [&str; OPTION_COUNT] = ["option_a", "option_b", "option_c", "option_d"];

        let prompt = required(self.prompt, "question")?;

        if self.options.len() != OPTION_COUNT {
            return Err(QuestionError::WrongOptionCount(self.options.len()));
        }
        let mut options: [String; OPTION_COUNT] = Default::default();
        for ((slot, raw), field) in options.iter_mut().zip(self.options).zip(OPTION_FIELDS) {
            *slot = required(raw, field)?;
        }

        let answer = required(self.answer, "answer")?;
        let correct = AnswerIndex::from_letter(&answer)?;
        let tip = required(self.tip, "tip")?;

        Ok(Question {
            prompt,
            options,
            correct,
            tip,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, QuestionError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_owned()),
        _ => Err(QuestionError::MissingField(field)),
    }
}

/// A single multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    prompt: String,
    options: [String; OPTION_COUNT],
    correct: AnswerIndex,
    tip: String,
}

impl Question {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct: AnswerIndex,
        tip: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct,
            tip: tip.into(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: AnswerIndex) -> &str {
        &self.options[index.value()]
    }

    #[must_use]
    pub fn correct(&self) -> AnswerIndex {
        self.correct
    }

    #[must_use]
    pub fn tip(&self) -> &str {
        &self.tip
    }

    /// Returns true when `selected` is the correct option.
    #[must_use]
    pub fn is_correct(&self, selected: AnswerIndex) -> bool {
        self.correct == selected
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
