//! Classifier configuration loaded from the environment.

use std::time::Duration;

use thiserror::Error;

use crate::task::adapters::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::task::classifier::DEFAULT_CLASSIFIER_TIMEOUT;

/// Primary credential variable.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Credential variable consulted when [`API_KEY_ENV`] is unset.
pub const FALLBACK_API_KEY_ENV: &str = "GOOGLE_API_KEY";
/// Model override variable.
pub const MODEL_ENV: &str = "EISENFLOW_CLASSIFIER_MODEL";
/// API root override variable.
pub const BASE_URL_ENV: &str = "EISENFLOW_CLASSIFIER_BASE_URL";
/// Timeout override variable, in whole seconds.
pub const TIMEOUT_SECS_ENV: &str = "EISENFLOW_CLASSIFIER_TIMEOUT_SECS";

/// Errors raised while reading classifier configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassifierConfigError {
    /// The timeout is not a positive whole number of seconds.
    #[error("invalid EISENFLOW_CLASSIFIER_TIMEOUT_SECS '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Settings for the external-model classifier.
///
/// # Examples
///
/// ```
/// use eisenflow::config::ClassifierConfig;
///
/// let config = ClassifierConfig::from_lookup(|_| None).expect("defaults are valid");
/// assert!(config.api_key().is_none());
/// assert_eq!(config.model(), "gemini-2.0-flash");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl ClassifierConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierConfigError::InvalidTimeout`] when the timeout
    /// override is malformed.
    pub fn from_env() -> Result<Self, ClassifierConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierConfigError::InvalidTimeout`] when the timeout
    /// override is malformed.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ClassifierConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let timeout = match read(TIMEOUT_SECS_ENV) {
            None => DEFAULT_CLASSIFIER_TIMEOUT,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ClassifierConfigError::InvalidTimeout(raw)),
            },
        };

        Ok(Self {
            api_key: read(API_KEY_ENV).or_else(|| read(FALLBACK_API_KEY_ENV)),
            model: read(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            base_url: read(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            timeout,
        })
    }

    /// Returns a copy carrying `api_key`.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Returns the credential, if configured.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the bound on a single classification call.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
