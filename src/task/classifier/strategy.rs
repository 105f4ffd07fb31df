//! Strategy selection and fallback for task classification.

use std::sync::Arc;
use std::time::Duration;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, warn};

use super::{heuristic, prompt, response};
use crate::config::ClassifierConfig;
use crate::task::adapters::gemini::GeminiTransport;
use crate::task::domain::{Classification, TaskContent};
use crate::task::ports::{ClassificationTransport, TransportError};

/// Default bound on a single external classification call.
pub const DEFAULT_CLASSIFIER_TIMEOUT: Duration = Duration::from_secs(20);

/// Why an external classification attempt was discarded.
#[derive(Debug, Error)]
enum FallbackReason {
    #[error(transparent)]
    Prompt(#[from] prompt::PromptError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("classifier call timed out after {0:?}")]
    Timeout(Duration),
    #[error(transparent)]
    Response(#[from] response::ResponseError),
}

/// Produces importance/urgency suggestions for tasks.
///
/// With a transport configured, the external model is asked first and any
/// failure (render, transport, timeout, unusable response) yields the
/// heuristic result for that call instead. Without one, the heuristic runs
/// directly. Classification never fails.
#[derive(Clone)]
pub struct TaskClassifier {
    transport: Option<Arc<dyn ClassificationTransport>>,
    timeout: Duration,
}

impl TaskClassifier {
    /// Creates a classifier that only uses the heuristic.
    #[must_use]
    pub const fn heuristic() -> Self {
        Self {
            transport: None,
            timeout: DEFAULT_CLASSIFIER_TIMEOUT,
        }
    }

    /// Creates a classifier that tries `transport` first, bounded by
    /// `timeout`.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn ClassificationTransport>, timeout: Duration) -> Self {
        Self {
            transport: Some(transport),
            timeout,
        }
    }

    /// Creates a classifier from configuration.
    ///
    /// A [`GeminiTransport`] is built only when a credential is present.
    #[must_use]
    pub fn from_config(config: &ClassifierConfig) -> Self {
        config.api_key().map_or_else(Self::heuristic, |api_key| {
            let transport = GeminiTransport::new(api_key, config.model())
                .with_base_url(config.base_url());
            debug!(model = transport.model(), "external classifier configured");
            Self::with_transport(Arc::new(transport), config.timeout())
        })
    }

    /// Returns `true` when an external model will be consulted.
    #[must_use]
    pub const fn uses_external_model(&self) -> bool {
        self.transport.is_some()
    }

    /// Classifies `content`.
    pub async fn classify(&self, content: &TaskContent, clock: &impl Clock) -> Classification {
        let now = clock.utc();
        let Some(transport) = self.transport.as_deref() else {
            debug!("no classifier credential configured, using heuristic");
            return heuristic::classify(content, now);
        };

        match self.classify_externally(transport, content).await {
            Ok(classification) => {
                debug!("external classifier accepted");
                classification
            }
            Err(reason) => {
                warn!(%reason, "external classifier failed, falling back to heuristic");
                heuristic::classify(content, now)
            }
        }
    }

    async fn classify_externally(
        &self,
        transport: &dyn ClassificationTransport,
        content: &TaskContent,
    ) -> Result<Classification, FallbackReason> {
        let prompt_text = prompt::render(content)?;
        let raw = tokio::time::timeout(self.timeout, transport.generate(&prompt_text))
            .await
            .map_err(|_| FallbackReason::Timeout(self.timeout))??;
        Ok(response::parse(&raw)?)
    }
}

impl Default for TaskClassifier {
    fn default() -> Self {
        Self::heuristic()
    }
}
