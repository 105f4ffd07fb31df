//! Prioritised task board.
//!
//! Tasks are classified on the Eisenhower matrix and moved through a
//! WIP-limited workflow. The module follows hexagonal architecture:
//!
//! - Domain types and the workflow engine in [`domain`]
//! - Importance/urgency classification in [`classifier`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Boundary parsing of untyped input in [`validation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod classifier;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;
