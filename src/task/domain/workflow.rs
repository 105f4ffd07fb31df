//! Task workflow engine.
//!
//! Tasks move strictly forward along
//! `BACKLOG -> TODO -> IN_PROGRESS -> REVIEW -> DONE`. Entry into
//! `IN_PROGRESS` is admitted only while the number of *other* in-progress
//! tasks is below the WIP limit. Every function here is pure: it takes a
//! task and returns a new one, leaving persistence to the caller.

use super::{Task, TaskDomainError, TaskStatus, WipLimit};
use mockable::Clock;

/// Board state needed to evaluate a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionContext {
    /// In-progress tasks, excluding the task being transitioned.
    pub other_in_progress: usize,
    /// Current WIP limit.
    pub wip_limit: WipLimit,
}

impl TransitionContext {
    /// Creates a transition context.
    #[must_use]
    pub const fn new(other_in_progress: usize, wip_limit: WipLimit) -> Self {
        Self {
            other_in_progress,
            wip_limit,
        }
    }
}

/// Moves a task to `target` if the workflow and WIP limit allow it.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTransition`] when `target` is not the
/// task's single legal successor, or [`TaskDomainError::WipLimitExceeded`]
/// when `target` is `IN_PROGRESS` and the board is at capacity.
pub fn transition(
    task: &Task,
    target: TaskStatus,
    context: TransitionContext,
    clock: &impl Clock,
) -> Result<Task, TaskDomainError> {
    let from = task.status();
    if !from.can_transition_to(target) {
        return Err(TaskDomainError::InvalidTransition {
            task_id: task.id(),
            from,
            to: target,
        });
    }

    if target == TaskStatus::InProgress && !context.wip_limit.admits(context.other_in_progress) {
        return Err(TaskDomainError::WipLimitExceeded {
            task_id: task.id(),
            in_progress: context.other_in_progress,
            limit: context.wip_limit,
        });
    }

    let mut updated = task.clone();
    updated.set_status(target);
    updated.touch(clock);
    Ok(updated)
}

/// Moves an important and urgent backlog task to `TODO`.
///
/// Any other task is returned unchanged. Idempotent, and leaves the
/// timestamp alone.
#[must_use]
pub fn promote(task: Task) -> Task {
    if task.status() == TaskStatus::Backlog && task.priority().is_do_first() {
        let mut promoted = task;
        promoted.set_status(TaskStatus::Todo);
        return promoted;
    }
    task
}

/// Manually starts a backlog task, moving it to `TODO`.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidState`] when the task is not in
/// `BACKLOG`.
pub fn start(task: &Task, clock: &impl Clock) -> Result<Task, TaskDomainError> {
    if task.status() != TaskStatus::Backlog {
        return Err(TaskDomainError::InvalidState {
            task_id: task.id(),
            status: task.status(),
        });
    }

    let mut started = task.clone();
    started.set_status(TaskStatus::Todo);
    started.touch(clock);
    Ok(started)
}
