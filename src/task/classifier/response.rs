//! Parsing of raw model output into a classification.

use crate::task::domain::Classification;
use serde_json::Value;
use thiserror::Error;

/// Reasons a model response could not be used.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResponseError {
    /// No `{ ... }` region was found in the text.
    #[error("response contains no JSON object")]
    NoJsonObject,
    /// The extracted region is not valid JSON.
    #[error("response JSON is invalid: {0}")]
    InvalidJson(String),
    /// A required key is absent.
    #[error("response is missing '{0}'")]
    MissingField(&'static str),
    /// A required key has the wrong type.
    #[error("response field '{field}' is not a {expected}")]
    WrongType {
        /// Offending key.
        field: &'static str,
        /// Expected JSON type.
        expected: &'static str,
    },
}

/// Extracts a classification from raw model output.
///
/// Takes the span from the first `{` to the last `}` of the trimmed text and
/// requires boolean `importance` and `urgency` plus a string `explanation`.
/// The explanation is truncated on receipt.
///
/// # Errors
///
/// Returns [`ResponseError`] describing the first problem found.
pub fn parse(text: &str) -> Result<Classification, ResponseError> {
    let candidate = extract_object(text.trim()).ok_or(ResponseError::NoJsonObject)?;
    let value: Value =
        serde_json::from_str(candidate).map_err(|err| ResponseError::InvalidJson(err.to_string()))?;

    let importance = bool_field(&value, "importance")?;
    let urgency = bool_field(&value, "urgency")?;
    let explanation = match value.get("explanation") {
        None => return Err(ResponseError::MissingField("explanation")),
        Some(field) => field.as_str().ok_or(ResponseError::WrongType {
            field: "explanation",
            expected: "string",
        })?,
    };

    Ok(Classification::new(importance, urgency, explanation))
}

fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    text.get(start..=end)
}

fn bool_field(value: &Value, field: &'static str) -> Result<bool, ResponseError> {
    value
        .get(field)
        .ok_or(ResponseError::MissingField(field))?
        .as_bool()
        .ok_or(ResponseError::WrongType {
            field,
            expected: "boolean",
        })
}
