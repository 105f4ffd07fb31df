//! Shared world state for task workflow BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use eisenflow::task::{
    adapters::memory::InMemoryTaskRepository,
    classifier::TaskClassifier,
    domain::{Settings, Task, TaskId, WipLimit},
    services::{TaskLifecycleError, TaskLifecycleService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task workflow behaviour tests.
pub struct TaskWorkflowWorld {
    pub service: TestTaskService,
    pub tasks_by_title: HashMap<String, TaskId>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskWorkflowWorld {
    /// Creates a world over an empty board with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: service_with(Settings::default()),
            tasks_by_title: HashMap::new(),
            last_result: None,
        }
    }

    /// Replaces the board with an empty one limited to `wip_limit`.
    pub fn reset_board(&mut self, wip_limit: WipLimit) {
        self.service = service_with(Settings::default().with_wip_limit(wip_limit));
        self.tasks_by_title.clear();
        self.last_result = None;
    }

    /// Looks up a task created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task with `title` was created.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks_by_title
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }
}

impl Default for TaskWorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn service_with(settings: Settings) -> TestTaskService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::with_settings(settings)),
        TaskClassifier::heuristic(),
        Arc::new(DefaultClock),
    )
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorkflowWorld {
    TaskWorkflowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
