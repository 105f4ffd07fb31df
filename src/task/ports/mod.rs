//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod classification;
pub mod repository;

pub use classification::{ClassificationTransport, TransportError, TransportResult};
#[cfg(test)]
pub use classification::MockClassificationTransport;
pub use repository::{TaskFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
