//! Repository port for task persistence and board settings.

use crate::task::domain::{Settings, Task, TaskId, TaskStatus, WipLimit};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Status filter for task listings. Unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Only tasks in this status.
    pub status: Option<TaskStatus>,
    /// Only tasks not in this status.
    pub not_status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Matches every task.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            status: None,
            not_status: None,
        }
    }

    /// Matches tasks in `status`.
    #[must_use]
    pub const fn with_status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            not_status: None,
        }
    }

    /// Matches tasks outside `status`.
    #[must_use]
    pub const fn without_status(status: TaskStatus) -> Self {
        Self {
            status: None,
            not_status: Some(status),
        }
    }

    /// Returns `true` when `task` satisfies the filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|status| task.status() == status)
            && self.not_status.is_none_or(|status| task.status() != status)
    }
}

/// Task store contract.
///
/// The store owns the task collection and the board settings. Callers that
/// read the in-progress count and then commit a transition must serialise
/// that sequence themselves.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Replaces an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Lists tasks matching `filter`, most recently updated first.
    async fn list(&self, filter: TaskFilter) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the current board settings.
    async fn settings(&self) -> TaskRepositoryResult<Settings>;

    /// Replaces the WIP limit and returns the updated settings.
    async fn set_wip_limit(&self, wip_limit: WipLimit) -> TaskRepositoryResult<Settings>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
