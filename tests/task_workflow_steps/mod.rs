//! Step definitions for task workflow behaviour tests.

mod given;
mod then;
pub mod world;
