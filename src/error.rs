//! Error types for the contact form client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use crate::form::Field;
use thiserror::Error;

/// Message shown to the user when any field fails validation.
pub const VALIDATION_ALERT: &str = "Please complete all fields correctly.";

/// Raised synchronously when one or more form fields are invalid.
///
/// Every field is checked before this is produced, so `problems` lists all
/// failing fields, not just the first one. The display text is always the
/// fixed user-facing alert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please complete all fields correctly.")]
pub struct ValidationFailure {
    problems: Vec<(Field, ValidationError)>,
}

impl ValidationFailure {
    pub(crate) fn new(problems: Vec<(Field, ValidationError)>) -> Self {
        Self { problems }
    }

    /// The failing fields, in form order, with the reason each one failed.
    pub fn problems(&self) -> &[(Field, ValidationError)] {
        &self.problems
    }

    /// Whether the given field is among the failing ones.
    pub fn has_field(&self, field: Field) -> bool {
        self.problems.iter().any(|(f, _)| *f == field)
    }
}

/// Errors that can occur when sending a message to the endpoint.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The request never produced an HTTP response
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// The endpoint answered with a non-2xx status
    #[error("Endpoint rejected message (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Failed to encode the payload
    #[error("JSON encode error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The blocking task could not be joined
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl SubmitError {
    /// True when the endpoint answered at all, even with an error status.
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, SubmitError::Rejected { .. })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
