//! Shared test helpers for in-memory task board integration tests.

use std::sync::Arc;

use eisenflow::task::{
    adapters::memory::InMemoryTaskRepository,
    classifier::TaskClassifier,
    domain::{Settings, TaskId, TaskStatus, WipLimit},
    services::{CreateTaskRequest, TaskLifecycleService, TransitionTaskRequest},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the in-memory integration tests.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Builds a heuristic-only service over a fresh store with `settings`.
#[must_use]
pub fn service_with(settings: Settings) -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::with_settings(settings)),
        TaskClassifier::heuristic(),
        Arc::new(DefaultClock),
    )
}

/// Provides a fresh service with default board settings.
#[fixture]
pub fn service() -> TestService {
    service_with(Settings::default())
}

/// Provides a fresh service whose WIP limit is one.
///
/// # Panics
///
/// Never in practice; a limit of one is always valid.
#[fixture]
pub fn single_slot_service() -> TestService {
    let wip_limit = WipLimit::new(1).expect("a WIP limit of one is valid");
    service_with(Settings::default().with_wip_limit(wip_limit))
}

/// Creates a task and walks it along `path`, returning its identifier.
///
/// # Errors
///
/// Returns an error if creation or any transition fails.
pub async fn task_at(
    service: &TestService,
    title: &str,
    path: &[TaskStatus],
) -> Result<TaskId, eyre::Report> {
    let task_id = service.create(CreateTaskRequest::new(title)).await?.id();
    for status in path {
        service
            .transition(TransitionTaskRequest::new(task_id, *status))
            .await?;
    }
    Ok(task_id)
}
