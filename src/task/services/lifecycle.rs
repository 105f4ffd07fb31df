//! Service layer for task creation, prioritisation, and workflow moves.

use crate::task::{
    classifier::TaskClassifier,
    domain::{
        Classification, Priority, Settings, Task, TaskDomainError, TaskId, TaskStatus,
        TransitionContext, WipLimit, workflow,
    },
    ports::{TaskFilter, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{CreateTaskRequest, PatchTaskRequest, TransitionTaskRequest, UpdateSettingsRequest};

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or a workflow rule failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Read-modify-write sequences are serialised through an internal lock so
/// that concurrent callers sharing one service cannot both be admitted past
/// the WIP limit.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    classifier: TaskClassifier,
    clock: Arc<C>,
    write_lock: Arc<Mutex<()>>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub fn new(repository: Arc<R>, classifier: TaskClassifier, clock: Arc<C>) -> Self {
        Self {
            repository,
            classifier,
            clock,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn find_task_or_error(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    /// Creates a backlog task and seeds its suggestion from the classifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is blank, or a
    /// repository error when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let content = request.into_content()?;
        let suggestion = self.classifier.classify(&content, &*self.clock).await;
        let task = Task::new(content, &suggestion, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Classifies unsaved input without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is blank.
    pub async fn classify_preview(
        &self,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Classification> {
        let content = request.into_content()?;
        Ok(self.classifier.classify(&content, &*self.clock).await)
    }

    /// Retrieves a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist.
    pub async fn get(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.find_task_or_error(task_id).await
    }

    /// Lists tasks matching `filter`, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn list(&self, filter: TaskFilter) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list(filter).await?)
    }

    /// Edits task metadata.
    ///
    /// Status and priority are unaffected; the timestamp always advances.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for a blank replacement title,
    /// [`TaskLifecycleError::NotFound`], or repository errors.
    pub async fn patch_metadata(
        &self,
        task_id: TaskId,
        request: PatchTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let patch = request.into_patch()?;
        let _guard = self.write_lock.lock().await;
        let mut task = self.find_task_or_error(task_id).await?;
        task.apply_patch(patch, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Re-runs the classifier and replaces the task's suggestion.
    ///
    /// Confirmed priority and status are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] or repository errors.
    pub async fn reclassify(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let snapshot = self.find_task_or_error(task_id).await?;
        let suggestion = self
            .classifier
            .classify(snapshot.content(), &*self.clock)
            .await;

        let _guard = self.write_lock.lock().await;
        let mut task = self.find_task_or_error(task_id).await?;
        task.record_suggestion(&suggestion, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Confirms the current suggestion as the task's priority.
    ///
    /// A backlog task that ends up important and urgent moves to `TODO`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] or repository errors.
    pub async fn accept_suggestion(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let _guard = self.write_lock.lock().await;
        let task = self
            .find_task_or_error(task_id)
            .await?
            .accept_suggestion(&*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Sets the task's priority explicitly.
    ///
    /// A backlog task that ends up important and urgent moves to `TODO`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] or repository errors.
    pub async fn override_priority(
        &self,
        task_id: TaskId,
        priority: Priority,
    ) -> TaskLifecycleResult<Task> {
        let _guard = self.write_lock.lock().await;
        let task = self
            .find_task_or_error(task_id)
            .await?
            .override_priority(priority, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Moves a backlog task to `TODO` without consulting its priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] wrapping
    /// [`TaskDomainError::InvalidState`] when the task is not in the backlog,
    /// [`TaskLifecycleError::NotFound`], or repository errors.
    pub async fn start(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let _guard = self.write_lock.lock().await;
        let task = self.find_task_or_error(task_id).await?;
        let started = workflow::start(&task, &*self.clock)?;
        self.repository.update(&started).await?;
        debug!(task_id = %task_id, "task started");
        Ok(started)
    }

    /// Moves a task along the workflow, enforcing the WIP limit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] wrapping
    /// [`TaskDomainError::InvalidTransition`] or
    /// [`TaskDomainError::WipLimitExceeded`], [`TaskLifecycleError::NotFound`],
    /// or repository errors.
    pub async fn transition(&self, request: TransitionTaskRequest) -> TaskLifecycleResult<Task> {
        let TransitionTaskRequest { task_id, target } = request;
        let _guard = self.write_lock.lock().await;
        let task = self.find_task_or_error(task_id).await?;
        let other_in_progress = self
            .repository
            .list(TaskFilter::with_status(TaskStatus::InProgress))
            .await?
            .iter()
            .filter(|candidate| candidate.id() != task_id)
            .count();
        let wip_limit = self.repository.settings().await?.wip_limit();

        let context = TransitionContext::new(other_in_progress, wip_limit);
        let updated = workflow::transition(&task, target, context, &*self.clock)?;
        self.repository.update(&updated).await?;
        debug!(
            task_id = %task_id,
            from = %task.status(),
            to = %target,
            "task transitioned"
        );
        Ok(updated)
    }

    /// Returns the board settings.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn settings(&self) -> TaskLifecycleResult<Settings> {
        Ok(self.repository.settings().await?)
    }

    /// Replaces the WIP limit.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn set_wip_limit(&self, wip_limit: WipLimit) -> TaskLifecycleResult<Settings> {
        let _guard = self.write_lock.lock().await;
        let settings = self.repository.set_wip_limit(wip_limit).await?;
        info!(wip_limit = %wip_limit, "WIP limit updated");
        Ok(settings)
    }

    /// Applies a settings update from untyped numeric input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] wrapping
    /// [`TaskDomainError::InvalidWipLimit`] for non-positive or non-finite
    /// limits, or repository errors.
    pub async fn update_settings(
        &self,
        request: UpdateSettingsRequest,
    ) -> TaskLifecycleResult<Settings> {
        let wip_limit = WipLimit::from_number(request.wip_limit)?;
        self.set_wip_limit(wip_limit).await
    }
}
