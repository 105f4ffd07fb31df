//! Eisenflow: an Eisenhower-matrix task board with a WIP-limited workflow.
//!
//! Tasks enter a backlog, receive an importance/urgency suggestion from a
//! classifier, and move along a fixed `BACKLOG -> TODO -> IN_PROGRESS ->
//! REVIEW -> DONE` path. Entry to `IN_PROGRESS` is bounded by a board-wide
//! work-in-progress limit.
//!
//! # Architecture
//!
//! Eisenflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and model access
//! - **Adapters**: Concrete implementations of ports (in-memory store, Gemini)
//!
//! # Modules
//!
//! - [`config`]: Environment-driven classifier configuration
//! - [`task`]: Task model, classification, workflow, and lifecycle service

pub mod config;
pub mod task;
