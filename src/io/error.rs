use crate::model::element::{ElementError, FieldError, ReplacementError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed record on line {line}: {details}: `{record}`")]
    MalformedRecord {
        line: usize,
        details: String,
        record: String,
    },

    #[error("invalid element field on line {line}: {source}: `{record}`")]
    InvalidElementField {
        line: usize,
        record: String,
        source: ElementError,
    },

    #[error("invalid isotopic replacement on line {line}: {source}: `{record}`")]
    InvalidReplacementField {
        line: usize,
        record: String,
        source: ReplacementError,
    },
}

impl Error {
    pub fn malformed(line: usize, record: impl Into<String>, details: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            details: details.into(),
            record: record.into(),
        }
    }

    /// Attaches the source location to a field validation failure.
    pub fn field(line: usize, record: impl Into<String>, err: FieldError) -> Self {
        let record = record.into();
        match err {
            FieldError::MissingFields(found) => Self::malformed(
                line,
                record,
                format!("expected at least 4 fields, found {found}"),
            ),
            FieldError::Element(source) => Self::InvalidElementField {
                line,
                record,
                source,
            },
            FieldError::Replacement(source) => Self::InvalidReplacementField {
                line,
                record,
                source,
            },
        }
    }

    /// The 1-based line the error was found on, if it came from a record.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Io { .. } => None,
            Error::MalformedRecord { line, .. }
            | Error::InvalidElementField { line, .. }
            | Error::InvalidReplacementField { line, .. } => Some(*line),
        }
    }
}
