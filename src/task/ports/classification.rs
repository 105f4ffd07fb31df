//! Transport port for external-model task classification.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for classification transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Sends a single prompt to a text-generation service.
///
/// Implementations are configured with a credential and model identifier
/// and return the raw generated text. Nothing else in the response is
/// inspected.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassificationTransport: Send + Sync {
    /// Generates text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request fails, the service answers
    /// with a non-success status, or the response envelope is unreadable.
    async fn generate(&self, prompt: &str) -> TransportResult<String>;
}

/// Errors returned by classification transports.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request could not be sent or the body could not be read.
    #[error("classifier request failed: {0}")]
    Http(Arc<dyn std::error::Error + Send + Sync>),

    /// The service answered with a non-success status.
    #[error("classifier service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as returned.
        body: String,
    },

    /// The response envelope did not contain generated text.
    #[error("classifier response envelope is malformed: {0}")]
    MalformedEnvelope(String),
}

impl TransportError {
    /// Wraps a request-level error.
    pub fn http(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Http(Arc::new(err))
    }
}
