//! Task aggregate root and workflow status.

use super::{
    Classification, ParseTaskStatusError, Priority, TaskContent, TaskContentPatch, TaskId,
    workflow,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Captured but not yet committed to.
    Backlog,
    /// Committed to and waiting to be picked up.
    Todo,
    /// Actively being worked on; admission is WIP-limited.
    InProgress,
    /// Finished and awaiting review.
    Review,
    /// Complete. Terminal.
    Done,
}

impl TaskStatus {
    /// Every status in workflow order.
    pub const ALL: [Self; 5] = [
        Self::Backlog,
        Self::Todo,
        Self::InProgress,
        Self::Review,
        Self::Done,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "BACKLOG",
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Review => "REVIEW",
            Self::Done => "DONE",
        }
    }

    /// Returns the single legal successor, or `None` for `DONE`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Backlog => Some(Self::Todo),
            Self::Todo => Some(Self::InProgress),
            Self::InProgress => Some(Self::Review),
            Self::Review => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Returns `true` when moving from `self` to `target` follows the
    /// workflow path.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }

    /// Returns `true` when no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "BACKLOG" => Ok(Self::Backlog),
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "REVIEW" => Ok(Self::Review),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    #[serde(flatten)]
    content: TaskContent,
    status: TaskStatus,
    importance: bool,
    urgency: bool,
    ai_suggested_importance: bool,
    ai_suggested_urgency: bool,
    #[serde(deserialize_with = "super::classification::deserialize_explanation")]
    ai_explanation: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted content.
    pub content: TaskContent,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted confirmed priority.
    pub priority: Priority,
    /// Persisted classifier suggestion.
    pub suggestion: Classification,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new backlog task seeded with a classifier suggestion.
    ///
    /// Confirmed priority flags start out false regardless of the
    /// suggestion.
    #[must_use]
    pub fn new(content: TaskContent, suggestion: &Classification, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            content,
            status: TaskStatus::Backlog,
            importance: false,
            urgency: false,
            ai_suggested_importance: suggestion.importance(),
            ai_suggested_urgency: suggestion.urgency(),
            ai_explanation: suggestion.explanation().to_owned(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            content: data.content,
            status: data.status,
            importance: data.priority.importance,
            urgency: data.priority.urgency,
            ai_suggested_importance: data.suggestion.importance(),
            ai_suggested_urgency: data.suggestion.urgency(),
            ai_explanation: data.suggestion.explanation().to_owned(),
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task content.
    #[must_use]
    pub const fn content(&self) -> &TaskContent {
        &self.content
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the user-confirmed priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        Priority::new(self.importance, self.urgency)
    }

    /// Returns the most recent classifier suggestion.
    #[must_use]
    pub fn suggestion(&self) -> Classification {
        Classification::new(
            self.ai_suggested_importance,
            self.ai_suggested_urgency,
            self.ai_explanation.clone(),
        )
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a metadata patch.
    ///
    /// The timestamp advances even when the patch changes nothing. Priority
    /// and status are untouched.
    pub fn apply_patch(&mut self, patch: TaskContentPatch, clock: &impl Clock) {
        self.content.apply(patch);
        self.touch(clock);
    }

    /// Replaces the classifier suggestion without touching confirmed flags.
    pub fn record_suggestion(&mut self, suggestion: &Classification, clock: &impl Clock) {
        self.ai_suggested_importance = suggestion.importance();
        self.ai_suggested_urgency = suggestion.urgency();
        suggestion
            .explanation()
            .clone_into(&mut self.ai_explanation);
        self.touch(clock);
    }

    /// Confirms the current suggestion as the task's priority, then applies
    /// auto-promotion.
    #[must_use]
    pub fn accept_suggestion(mut self, clock: &impl Clock) -> Self {
        self.importance = self.ai_suggested_importance;
        self.urgency = self.ai_suggested_urgency;
        self.touch(clock);
        workflow::promote(self)
    }

    /// Sets the task's priority explicitly, then applies auto-promotion.
    #[must_use]
    pub fn override_priority(mut self, priority: Priority, clock: &impl Clock) -> Self {
        self.importance = priority.importance;
        self.urgency = priority.urgency;
        self.touch(clock);
        workflow::promote(self)
    }

    pub(super) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Advances `updated_at` to the current clock time, never backwards.
    pub(super) fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().max(self.updated_at);
    }
}
