use async_trait::async_trait;
use quiz_core::model::{Question, QuestionBank, QuestionDraft, QuestionError};
use serde::Deserialize;
use thiserror::Error;

/// A question row that failed validation.
///
/// `row` is the 1-based data row (the header is not counted).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("row {row}: {source}")]
pub struct DataFormatError {
    pub row: usize,
    #[source]
    pub source: QuestionError,
}

/// Errors surfaced by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("malformed question data: {0}")]
    DataFormat(#[from] DataFormatError),

    #[error("unreadable question table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw shape of one question row.
///
/// Every column is optional at this stage so that a missing column and a blank cell
/// are reported the same way, by `into_question`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "question")]
    pub prompt: Option<String>,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub answer: Option<String>,
    pub tip: Option<String>,
}

impl QuestionRecord {
    /// Convenience constructor for fully populated rows.
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        options: [&str; 4],
        answer: impl Into<String>,
        tip: impl Into<String>,
    ) -> Self {
        let [a, b, c, d] = options.map(|option| Some(option.to_owned()));
        Self {
            prompt: Some(prompt.into()),
            option_a: a,
            option_b: b,
            option_c: c,
            option_d: d,
            answer: Some(answer.into()),
            tip: Some(tip.into()),
        }
    }

    /// Convert the record into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if a field is missing or the answer letter is invalid.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        QuestionDraft {
            prompt: self.prompt,
            options: vec![self.option_a, self.option_b, self.option_c, self.option_d],
            answer: self.answer,
            tip: self.tip,
        }
        .validate()
    }
}

/// Validate every record into a bank. The first bad row fails the whole bank.
///
/// # Errors
///
/// Returns `DataFormatError` naming the offending row.
pub fn bank_from_records(records: Vec<QuestionRecord>) -> Result<QuestionBank, DataFormatError> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            record
                .into_question()
                .map_err(|source| DataFormatError { row: idx + 1, source })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(QuestionBank::new)
}

/// Source of question rows.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Read every question row from the source, in order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or parsed.
    async fn load_records(&self) -> Result<Vec<QuestionRecord>, StorageError>;

    /// Short description of the source, for logs.
    fn describe(&self) -> String;
}

/// Load and validate a complete bank from a repository.
///
/// # Errors
///
/// Returns `StorageError::DataFormat` for the first malformed row, or the
/// repository's own read error.
pub async fn load_bank(repo: &dyn QuestionRepository) -> Result<QuestionBank, StorageError> {
    let records = repo.load_records().await?;
    let bank = bank_from_records(records)?;
    tracing::info!(source = %repo.describe(), questions = bank.len(), "question bank loaded");
    Ok(bank)
}

/// Simple in-memory source for testing and prototyping.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionSource {
    records: Vec<QuestionRecord>,
}

impl InMemoryQuestionSource {
    #[must_use]
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionSource {
    async fn load_records(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} rows)", self.records.len())
    }
}
