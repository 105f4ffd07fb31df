//! Domain model for the prioritised task board.
//!
//! The domain holds the task aggregate, its Eisenhower priority state, the
//! board settings, and the workflow engine. Nothing here performs I/O.

mod classification;
mod content;
mod error;
mod ids;
mod settings;
mod task;
pub mod workflow;

pub use classification::{Classification, MAX_EXPLANATION_CHARS, Priority};
pub use content::{DueDate, Effort, TaskContent, TaskContentPatch, TaskTitle};
pub use error::{ParseEffortError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use settings::{DEFAULT_BACKLOG_WARN_THRESHOLD, DEFAULT_WIP_LIMIT, Settings, WipLimit};
pub use task::{PersistedTaskData, Task, TaskStatus};
pub use workflow::TransitionContext;
