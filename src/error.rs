//! Error types for the category workflow. All are recoverable: the user can
//! correct the form and resubmit.

use crate::models::BackendFieldError;
use thiserror::Error;

/// Client-side validation failure for a proposed category name.
/// Display strings match what the form shows inline.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    Required,
    #[error("Name too long")]
    TooLong { len: usize },
    #[error("Category already exists")]
    Duplicate { name: String },
}

/// Failure talking to the backend category endpoints.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RepositoryError {
    #[error("Backend not configured")]
    NotConfigured,
    #[error("{0}")]
    Transport(String),
    /// Non-2xx response. `errors` carries the backend's field-level
    /// validation errors when the body had them.
    #[error("{message}")]
    Backend {
        status: u16,
        message: String,
        errors: Vec<BackendFieldError>,
    },
}

/// A rejected submission. Validation failures never reach the repository;
/// backend failures keep the field-level errors for inline display.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{message}")]
    Backend {
        message: String,
        field_errors: Vec<BackendFieldError>,
    },
}

impl SubmissionError {
    /// Field-level errors to render next to the inputs (empty for
    /// client-side validation failures, which carry their own message).
    pub fn field_errors(&self) -> &[BackendFieldError] {
        match self {
            SubmissionError::Validation(_) => &[],
            SubmissionError::Backend { field_errors, .. } => field_errors,
        }
    }
}

impl From<RepositoryError> for SubmissionError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Backend {
                message, errors, ..
            } => SubmissionError::Backend {
                message,
                field_errors: errors,
            },
            other => SubmissionError::Backend {
                message: other.to_string(),
                field_errors: Vec::new(),
            },
        }
    }
}
