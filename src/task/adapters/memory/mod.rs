//! In-memory adapter implementations.
//!
//! The in-memory store is the default backing store; it keeps no state
//! beyond the process lifetime.

mod task;

pub use task::InMemoryTaskRepository;
