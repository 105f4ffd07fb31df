//! Parse-and-validate functions turning untyped JSON into typed requests.

use serde_json::{Map, Value};

use super::ValidationError;
use crate::task::{
    domain::{Effort, Priority, TaskId, TaskStatus},
    ports::TaskFilter,
    services::{CreateTaskRequest, PatchTaskRequest, TransitionTaskRequest, UpdateSettingsRequest},
};

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or(ValidationError::NotAnObject)
}

fn non_blank_string(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|text| !text.is_empty())
}

/// Parses a task-creation body.
///
/// `title` must be a non-blank string. Optional fields with the wrong type
/// are ignored rather than rejected, and non-string tags are dropped.
///
/// # Errors
///
/// Returns [`ValidationError::NotAnObject`] or
/// [`ValidationError::MissingTitle`].
pub fn parse_create_task(body: &Value) -> Result<CreateTaskRequest, ValidationError> {
    let fields = as_object(body)?;
    let title = fields
        .get("title")
        .and_then(non_blank_string)
        .ok_or(ValidationError::MissingTitle)?;

    let mut request = CreateTaskRequest::new(title);
    if let Some(description) = fields.get("description").and_then(Value::as_str) {
        request = request.with_description(description);
    }
    if let Some(due_date) = fields.get("dueDate").and_then(Value::as_str) {
        request = request.with_due_date(due_date);
    }
    if let Some(effort) = fields
        .get("effort")
        .and_then(Value::as_str)
        .and_then(|raw| Effort::try_from(raw).ok())
    {
        request = request.with_effort(effort);
    }
    if let Some(tags) = fields.get("tags").and_then(Value::as_array) {
        request = request.with_tags(
            tags.iter()
                .filter_map(Value::as_str)
                .map(str::to_owned),
        );
    }
    Ok(request)
}

/// Parses a metadata patch body. Only keys that are present are applied.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidField`] for any present key with the
/// wrong shape. `dueDate` and `effort` accept `null` to clear the value.
pub fn parse_patch_task(body: &Value) -> Result<PatchTaskRequest, ValidationError> {
    let fields = as_object(body)?;
    let mut request = PatchTaskRequest::new();

    if let Some(title) = fields.get("title") {
        let trimmed = non_blank_string(title)
            .ok_or_else(|| ValidationError::invalid("title", "a non-empty string"))?;
        request = request.with_title(trimmed);
    }
    if let Some(description) = fields.get("description") {
        let text = description
            .as_str()
            .ok_or_else(|| ValidationError::invalid("description", "a string"))?;
        request = request.with_description(text);
    }
    if let Some(due_date) = fields.get("dueDate") {
        let value = match due_date {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            _ => return Err(ValidationError::invalid("dueDate", "a string or null")),
        };
        request = request.with_due_date(value);
    }
    if let Some(effort) = fields.get("effort") {
        let value = match effort {
            Value::Null => None,
            Value::String(text) => Some(
                Effort::try_from(text.as_str())
                    .map_err(|_| ValidationError::invalid("effort", "S, M, L, or null"))?,
            ),
            _ => return Err(ValidationError::invalid("effort", "S, M, L, or null")),
        };
        request = request.with_effort(value);
    }
    if let Some(tags) = fields.get("tags") {
        let list = tags
            .as_array()
            .and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_owned))
                    .collect::<Option<Vec<_>>>()
            })
            .ok_or_else(|| ValidationError::invalid("tags", "an array of strings"))?;
        request = request.with_tags(list);
    }
    Ok(request)
}

/// Parses an explicit priority override; both flags are required.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidField`] when either flag is missing or
/// not a boolean.
pub fn parse_priority(body: &Value) -> Result<Priority, ValidationError> {
    let fields = as_object(body)?;
    let importance = fields
        .get("importance")
        .and_then(Value::as_bool)
        .ok_or_else(|| ValidationError::invalid("importance", "a boolean"))?;
    let urgency = fields
        .get("urgency")
        .and_then(Value::as_bool)
        .ok_or_else(|| ValidationError::invalid("urgency", "a boolean"))?;
    Ok(Priority::new(importance, urgency))
}

/// Parses a transition body of the form `{"toStatus": "..."}`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidStatus`] when `toStatus` is missing or
/// not a workflow status.
pub fn parse_transition(
    task_id: TaskId,
    body: &Value,
) -> Result<TransitionTaskRequest, ValidationError> {
    let fields = as_object(body)?;
    let raw = fields
        .get("toStatus")
        .and_then(Value::as_str)
        .ok_or_else(|| ValidationError::InvalidStatus(String::new()))?;
    let target = parse_status(raw)?;
    Ok(TransitionTaskRequest::new(task_id, target))
}

/// Parses a settings body of the form `{"wipLimit": <number>}`.
///
/// Range checks happen when the update is applied.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidField`] when `wipLimit` is not a number.
pub fn parse_settings_update(body: &Value) -> Result<UpdateSettingsRequest, ValidationError> {
    let fields = as_object(body)?;
    let wip_limit = fields
        .get("wipLimit")
        .and_then(Value::as_f64)
        .ok_or_else(|| ValidationError::invalid("wipLimit", "a number"))?;
    Ok(UpdateSettingsRequest::new(wip_limit))
}

/// Parses a task identifier from a path segment.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTaskId`] when the text is not a UUID.
pub fn parse_task_id(raw: &str) -> Result<TaskId, ValidationError> {
    raw.parse()
        .map_err(|_| ValidationError::InvalidTaskId(raw.to_owned()))
}

/// Parses optional `status` / `notStatus` query values into a filter.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidStatus`] for unknown statuses.
pub fn parse_task_filter(
    status: Option<&str>,
    not_status: Option<&str>,
) -> Result<TaskFilter, ValidationError> {
    Ok(TaskFilter {
        status: status.map(parse_status).transpose()?,
        not_status: not_status.map(parse_status).transpose()?,
    })
}

fn parse_status(raw: &str) -> Result<TaskStatus, ValidationError> {
    TaskStatus::try_from(raw).map_err(|_| ValidationError::InvalidStatus(raw.to_owned()))
}
