//! Prompt rendering for the external-model classifier.

use crate::task::domain::TaskContent;
use minijinja::{Environment, context};
use serde::Serialize;

/// Fixed Eisenhower-matrix instructions sent ahead of every task.
pub const INSTRUCTIONS: &str = "\
You are a task prioritization assistant using the Eisenhower Matrix.
Classify tasks into two booleans: importance and urgency.

Definitions:
- Urgent: time-sensitive, near deadline, blocking others, or has immediate consequences.
- Important: high impact on goals, health, security, key relationships, or long-term outcomes.

Return ONLY strict JSON with keys:
{ \"importance\": boolean, \"urgency\": boolean, \"explanation\": string }

The explanation must be short (<= 200 chars) and concrete.";

const PROMPT_TEMPLATE: &str = "{{ instructions }}\n\nTask:\n{{ payload }}";

/// Attributes of a task as shown to the model.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskPayload<'a> {
    title: &'a str,
    description: &'a str,
    due_date: Option<&'a str>,
    effort: Option<&'static str>,
    tags: &'a [String],
}

impl<'a> From<&'a TaskContent> for TaskPayload<'a> {
    fn from(content: &'a TaskContent) -> Self {
        Self {
            title: content.title().as_str(),
            description: content.description(),
            due_date: content.due_date().map(|due| due.as_str()),
            effort: content.effort().map(|effort| effort.as_str()),
            tags: content.tags(),
        }
    }
}

/// Errors raised while building a prompt.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The task payload could not be serialised.
    #[error("failed to serialise task payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// The prompt template failed to render.
    #[error("failed to render classification prompt: {0}")]
    Render(#[from] minijinja::Error),
}

/// Renders the full prompt for `content`.
///
/// # Errors
///
/// Returns [`PromptError`] when serialisation or rendering fails.
pub fn render(content: &TaskContent) -> Result<String, PromptError> {
    let payload = serde_json::to_string_pretty(&TaskPayload::from(content))?;
    let environment = Environment::new();
    let rendered = environment.render_str(
        PROMPT_TEMPLATE,
        context! {
            instructions => INSTRUCTIONS,
            payload => payload,
        },
    )?;
    Ok(rendered)
}
