//! Application services for the task board.

mod lifecycle;
mod requests;

pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use requests::{
    CreateTaskRequest, PatchTaskRequest, TransitionTaskRequest, UpdateSettingsRequest,
};
