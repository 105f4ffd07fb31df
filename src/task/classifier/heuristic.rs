//! Deterministic keyword, due-date, and effort based classification.

use crate::task::domain::{Classification, TaskContent};
use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const NANOS_PER_DAY: i64 = MILLIS_PER_DAY * 1_000_000;

/// Words that mark a task as time-sensitive.
pub const URGENCY_SIGNALS: [&str; 13] = [
    "asap", "urgent", "today", "tonight", "tomorrow", "deadline", "overdue", "pay", "bill", "tax",
    "incident", "outage", "production",
];

/// Words that mark a task as having long-term impact.
pub const IMPORTANCE_SIGNALS: [&str; 16] = [
    "strategy",
    "plan",
    "planning",
    "roadmap",
    "career",
    "health",
    "fitness",
    "doctor",
    "family",
    "security",
    "backup",
    "compliance",
    "quarter",
    "okr",
    "goal",
    "budget",
];

/// Classifies `content` as of `now` using fixed keyword sets and scheduling
/// rules.
///
/// The same content and instant always produce the same result.
#[must_use]
pub fn classify(content: &TaskContent, now: DateTime<Utc>) -> Classification {
    let text = format!(
        "{} {}",
        content.title().as_str().to_lowercase(),
        content.description().to_lowercase()
    );
    let urgent_by_text = mentions_any(&text, &URGENCY_SIGNALS);
    let important_by_text = mentions_any(&text, &IMPORTANCE_SIGNALS);

    let days_until_due = content
        .due_date()
        .and_then(|due| due.to_instant())
        .map(|due| days_between(now, due));
    let effort_hours = content.effort().map(|effort| effort.hours());

    let urgent_by_due = days_until_due.is_some_and(|days| days <= 2 || (days <= 7 && urgent_by_text));
    let urgent_by_effort = matches!(
        (days_until_due, effort_hours),
        (Some(days), Some(hours)) if days <= 3 && hours >= 4
    );
    let urgency = urgent_by_text || urgent_by_due || urgent_by_effort;
    let importance = important_by_text || effort_hours.is_some_and(|hours| hours >= 4);

    let mut factors = Vec::new();
    if let Some(days) = days_until_due {
        factors.push(format!("Due in {days} day(s)"));
    }
    if let Some(hours) = effort_hours {
        factors.push(format!("Effort ~{hours}h"));
    }
    if urgent_by_text {
        factors.push("Contains urgency keywords".to_owned());
    }
    if important_by_text {
        factors.push("Contains importance keywords".to_owned());
    }
    let reasons = if factors.is_empty() {
        "Heuristic classification".to_owned()
    } else {
        factors.join("; ")
    };

    let explanation = format!(
        "{} / {} — {reasons}",
        if urgency { "Urgent" } else { "Not urgent" },
        if importance { "Important" } else { "Not important" },
    );
    Classification::new(importance, urgency, explanation)
}

fn mentions_any(text: &str, signals: &[&str]) -> bool {
    signals.iter().any(|signal| text.contains(signal))
}

/// Whole days from `now` until `due`, rounded up.
///
/// Gaps too wide for nanosecond precision fall back to milliseconds.
fn days_between(now: DateTime<Utc>, due: DateTime<Utc>) -> i64 {
    let gap = due.signed_duration_since(now);
    gap.num_nanoseconds().map_or_else(
        || div_ceil(gap.num_milliseconds(), MILLIS_PER_DAY),
        |nanos| div_ceil(nanos, NANOS_PER_DAY),
    )
}

fn div_ceil(value: i64, divisor: i64) -> i64 {
    -(value.saturating_neg().div_euclid(divisor))
}
