//! Typed request values accepted by the task lifecycle service.

use crate::task::domain::{
    DueDate, Effort, TaskContent, TaskContentPatch, TaskDomainError, TaskId, TaskStatus,
    TaskTitle,
};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<String>,
    effort: Option<Effort>,
    tags: Vec<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            effort: None,
            tags: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date (ISO-8601).
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the effort estimate.
    #[must_use]
    pub const fn with_effort(mut self, effort: Effort) -> Self {
        self.effort = Some(effort);
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Validates the request into task content.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn into_content(self) -> Result<TaskContent, TaskDomainError> {
        let mut content = TaskContent::new(TaskTitle::new(self.title)?).with_tags(self.tags);
        if let Some(description) = self.description {
            content = content.with_description(description);
        }
        if let Some(due_date) = self.due_date {
            content = content.with_due_date(DueDate::new(due_date));
        }
        if let Some(effort) = self.effort {
            content = content.with_effort(effort);
        }
        Ok(content)
    }
}

/// Request payload for editing task metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchTaskRequest {
    title: Option<String>,
    description: Option<String>,
    due_date: Option<Option<String>>,
    effort: Option<Option<Effort>>,
    tags: Option<Vec<String>>,
}

impl PatchTaskRequest {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces (`Some`) or clears (`None`) the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: Option<String>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces (`Some`) or clears (`None`) the effort.
    #[must_use]
    pub const fn with_effort(mut self, effort: Option<Effort>) -> Self {
        self.effort = Some(effort);
        self
    }

    /// Replaces the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Validates the request into a content patch.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when a replacement title is
    /// blank.
    pub fn into_patch(self) -> Result<TaskContentPatch, TaskDomainError> {
        Ok(TaskContentPatch {
            title: self.title.map(TaskTitle::new).transpose()?,
            description: self.description,
            due_date: self.due_date.map(|due| due.map(DueDate::new)),
            effort: self.effort,
            tags: self.tags,
        })
    }
}

/// Request payload for moving a task along the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    /// Task to move.
    pub task_id: TaskId,
    /// Requested target status.
    pub target: TaskStatus,
}

impl TransitionTaskRequest {
    /// Creates a transition request.
    #[must_use]
    pub const fn new(task_id: TaskId, target: TaskStatus) -> Self {
        Self { task_id, target }
    }
}

/// Request payload for changing board settings from untyped input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateSettingsRequest {
    /// Requested WIP limit, as supplied.
    pub wip_limit: f64,
}

impl UpdateSettingsRequest {
    /// Creates a settings update.
    #[must_use]
    pub const fn new(wip_limit: f64) -> Self {
        Self { wip_limit }
    }
}
