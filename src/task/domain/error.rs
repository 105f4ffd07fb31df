//! Error types for task domain validation and workflow rules.

use super::{TaskId, TaskStatus, WipLimit};
use thiserror::Error;

/// Errors returned while constructing task values or applying workflow rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The requested status change is not on the workflow path.
    #[error("invalid task transition for {task_id}: {from} -> {to}")]
    InvalidTransition {
        /// Task whose transition was rejected.
        task_id: TaskId,
        /// Current workflow status.
        from: TaskStatus,
        /// Requested target status.
        to: TaskStatus,
    },

    /// Admission to `IN_PROGRESS` was denied by the work-in-progress limit.
    #[error("WIP limit exceeded ({in_progress}/{limit})")]
    WipLimitExceeded {
        /// Task whose admission was rejected.
        task_id: TaskId,
        /// Number of other tasks currently in progress.
        in_progress: usize,
        /// Configured limit at the time of the attempt.
        limit: WipLimit,
    },

    /// The task is not in a status that permits the requested action.
    #[error("only BACKLOG tasks can be started (task {task_id} is {status})")]
    InvalidState {
        /// Task that was not in the backlog.
        task_id: TaskId,
        /// Status the task was in.
        status: TaskStatus,
    },

    /// The WIP limit value is not a positive finite number.
    #[error("invalid WIP limit '{0}', expected a positive integer")]
    InvalidWipLimit(String),
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing effort sizes from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown effort size '{0}', expected S, M, or L")]
pub struct ParseEffortError(pub String);
