use std::path::PathBuf;
use thiserror::Error;

// Problems with the question source. Fatal: nothing can be asked without a catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("cannot read question catalog {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("question catalog {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("question catalog contains no questions")]
    Empty,

    #[error("question \"{question}\" has no options")]
    NoOptions { question: String },

    #[error("option \"{option}\" of question \"{question}\" has unknown category \"{tag}\"")]
    UnknownCategory {
        question: String,
        option: String,
        tag: String,
    },

    #[error("question \"{question}\" appears more than once")]
    DuplicateQuestion { question: String },

    #[error("question \"{question}\" lists option \"{option}\" more than once")]
    DuplicateOption { question: String, option: String },
}

// Invalid input while filling in a session. The caller re-prompts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("respondent name must not be empty")]
    EmptyRespondent,

    #[error("question {} does not exist", .0 + 1)]
    UnknownQuestion(usize),

    #[error("question {} has no option \"{option}\"", .question + 1)]
    UnknownOption { question: usize, option: String },

    #[error("question {} accepts only one answer", .question + 1)]
    TooManySelections { question: usize },
}

/// Raised when scoring is attempted before every question has an answer.
///
/// `missing` holds zero-based catalog indices in ascending order.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unanswered questions: {}", display_numbers(.missing))]
pub struct IncompleteSessionError {
    pub missing: Vec<usize>,
}

fn display_numbers(missing: &[usize]) -> String {
    missing
        .iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// Storage unavailable or a statement failed. Recoverable at the UI boundary.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("cannot connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("{operation} failed: {source}")]
    Query {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{operation} returned unusable data: {detail}")]
    Corrupt {
        operation: &'static str,
        detail: String,
    },
}

impl PersistenceError {
    pub fn query(operation: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| PersistenceError::Query { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_session_names_questions_one_based() {
        let err = IncompleteSessionError { missing: vec![0, 3, 4] };
        assert_eq!(err.to_string(), "unanswered questions: 1, 4, 5");
    }

    #[test]
    fn persistence_error_names_operation() {
        let err = PersistenceError::query("save results")(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("save results failed"));
    }
}
