use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv::{ReaderBuilder, Trim};

use quiz_core::model::{OPTION_COUNT, QuestionError};

use crate::repository::{
    DataFormatError, QuestionRecord, QuestionRepository, StorageError, bank_from_records,
};

#[derive(Debug, Clone)]
enum CsvOrigin {
    File(PathBuf),
    Text(String),
}

/// Question rows read from a CSV table with a header row.
///
/// Required columns: `question, option_a, option_b, option_c, option_d, answer, tip`.
/// Column order is free and extra columns are ignored.
#[derive(Debug, Clone)]
pub struct CsvQuestionSource {
    origin: CsvOrigin,
}

impl CsvQuestionSource {
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: CsvOrigin::File(path.into()),
        }
    }

    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            origin: CsvOrigin::Text(text.into()),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.origin {
            CsvOrigin::File(path) => Some(path),
            CsvOrigin::Text(_) => None,
        }
    }
}

/// Parse CSV bytes into raw records.
///
/// A row whose cell count differs from the header is reported as a
/// `DataFormatError` naming the row, unless an earlier row is already malformed.
///
/// # Errors
///
/// Returns `StorageError::DataFormat` for rows with too many or too few cells and
/// `StorageError::Csv` for tables the reader cannot decode (bad UTF-8, bad quoting).
pub fn parse_records(bytes: &[u8]) -> Result<Vec<QuestionRecord>, StorageError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() != headers.len() {
            bank_from_records(records)?;
            let found = (OPTION_COUNT + row.len()).saturating_sub(headers.len());
            return Err(DataFormatError {
                row: idx + 1,
                source: QuestionError::WrongOptionCount(found),
            }
            .into());
        }
        records.push(row.deserialize::<QuestionRecord>(Some(&headers))?);
    }
    Ok(records)
}

#[async_trait]
impl QuestionRepository for CsvQuestionSource {
    async fn load_records(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        match &self.origin {
            CsvOrigin::File(path) => {
                let bytes = tokio::fs::read(path).await?;
                parse_records(&bytes)
            }
            CsvOrigin::Text(text) => parse_records(text.as_bytes()),
        }
    }

    fn describe(&self) -> String {
        match &self.origin {
            CsvOrigin::File(path) => path.display().to_string(),
            CsvOrigin::Text(_) => "inline csv".to_string(),
        }
    }
}
