//! Error types for loading and analyzing housing records.

use std::io;

use thiserror::Error;

/// Failure while reading the source file. Any of these aborts the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("header is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("line {line}: column '{column}' expects a number, got '{value}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Raised by the classifier for floor counts outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("floor count must be positive, got {0}")]
    InvalidRange(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatioError {
    #[error("cannot rank an empty set of records")]
    EmptyInput,
    #[error("record '{address}' has zero population")]
    ZeroPopulation { address: String },
}
