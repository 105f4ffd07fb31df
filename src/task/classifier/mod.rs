//! Importance/urgency classification for tasks.
//!
//! Two strategies share one contract: a deterministic heuristic that is
//! always available, and an optional external model reached through the
//! [`ClassificationTransport`](crate::task::ports::ClassificationTransport)
//! port. [`TaskClassifier`] picks between them and absorbs every external
//! failure by falling back to the heuristic.

pub mod heuristic;
pub mod prompt;
pub mod response;
mod strategy;

pub use strategy::{DEFAULT_CLASSIFIER_TIMEOUT, TaskClassifier};
