//! Error types for request-body validation.

use thiserror::Error;

/// Malformed or missing input detected before any state is touched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The body is not a JSON object.
    #[error("body must be an object")]
    NotAnObject,

    /// The title is absent, not a string, or blank.
    #[error("title is required")]
    MissingTitle,

    /// A field is present with the wrong shape.
    #[error("{field} must be {expected}")]
    InvalidField {
        /// Offending field name.
        field: &'static str,
        /// Description of the accepted shape.
        expected: &'static str,
    },

    /// A status value is not one of the workflow statuses.
    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    /// A task identifier is not a UUID.
    #[error("invalid task id '{0}'")]
    InvalidTaskId(String),
}

impl ValidationError {
    pub(super) const fn invalid(field: &'static str, expected: &'static str) -> Self {
        Self::InvalidField { field, expected }
    }
}
