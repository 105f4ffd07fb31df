//! Boundary validation for untyped request bodies.
//!
//! Web or storage layers hand JSON values to these functions and get back
//! either a typed request for [`crate::task::services`] or a
//! [`ValidationError`]. The service layer never sees untyped input.

mod error;
mod parse;

pub use error::ValidationError;
pub use parse::{
    parse_create_task, parse_patch_task, parse_priority, parse_settings_update, parse_task_filter,
    parse_task_id, parse_transition,
};
