//! Eisenhower priority flags and classifier suggestions.

use serde::{Deserialize, Serialize};

/// Maximum stored length of a classifier explanation, in characters.
pub const MAX_EXPLANATION_CHARS: usize = 300;

/// Importance/urgency pair on the Eisenhower matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Priority {
    /// Whether the task has high long-term impact.
    pub importance: bool,
    /// Whether the task is time-sensitive.
    pub urgency: bool,
}

impl Priority {
    /// Creates a priority pair.
    #[must_use]
    pub const fn new(importance: bool, urgency: bool) -> Self {
        Self {
            importance,
            urgency,
        }
    }

    /// Returns `true` when the task is both important and urgent.
    #[must_use]
    pub const fn is_do_first(self) -> bool {
        self.importance && self.urgency
    }
}

/// Output of a classification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ClassificationRecord")]
pub struct Classification {
    importance: bool,
    urgency: bool,
    explanation: String,
}

impl Classification {
    /// Creates a classification, truncating the explanation to
    /// [`MAX_EXPLANATION_CHARS`] characters.
    #[must_use]
    pub fn new(importance: bool, urgency: bool, explanation: impl Into<String>) -> Self {
        Self {
            importance,
            urgency,
            explanation: truncate_explanation(explanation.into()),
        }
    }

    /// Returns the suggested importance flag.
    #[must_use]
    pub const fn importance(&self) -> bool {
        self.importance
    }

    /// Returns the suggested urgency flag.
    #[must_use]
    pub const fn urgency(&self) -> bool {
        self.urgency
    }

    /// Returns both suggested flags as a [`Priority`].
    #[must_use]
    pub const fn priority(&self) -> Priority {
        Priority::new(self.importance, self.urgency)
    }

    /// Returns the human-readable explanation.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

#[derive(Deserialize)]
struct ClassificationRecord {
    importance: bool,
    urgency: bool,
    explanation: String,
}

impl From<ClassificationRecord> for Classification {
    fn from(record: ClassificationRecord) -> Self {
        Self::new(record.importance, record.urgency, record.explanation)
    }
}

/// Cuts `raw` down to [`MAX_EXPLANATION_CHARS`] characters.
pub(crate) fn truncate_explanation(raw: String) -> String {
    if raw.chars().count() > MAX_EXPLANATION_CHARS {
        raw.chars().take(MAX_EXPLANATION_CHARS).collect()
    } else {
        raw
    }
}

pub(crate) fn deserialize_explanation<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    String::deserialize(deserializer).map(truncate_explanation)
}
