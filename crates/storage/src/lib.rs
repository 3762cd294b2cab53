#![forbid(unsafe_code)]

pub mod csv_source;
pub mod repository;

pub use csv_source::CsvQuestionSource;
pub use repository::{
    DataFormatError, InMemoryQuestionSource, QuestionRecord, QuestionRepository, StorageError,
    load_bank,
};
