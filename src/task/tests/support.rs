//! Shared fixtures for task unit tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::task::domain::{
    Classification, PersistedTaskData, Priority, Task, TaskContent, TaskId, TaskStatus, TaskTitle,
};

/// Instant every fixed-clock test runs at.
pub(super) fn base_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0)
        .single()
        .expect("valid fixed instant")
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(pub(super) DateTime<Utc>);

impl FixedClock {
    pub(super) fn at_base() -> Self {
        Self(base_instant())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock that moves one second forward on every reading.
#[derive(Debug, Default)]
pub(super) struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        base_instant() + Duration::seconds(tick)
    }
}

pub(super) fn content(title: &str) -> TaskContent {
    TaskContent::new(TaskTitle::new(title).expect("valid title"))
}

pub(super) fn backlog_task(title: &str, clock: &impl Clock) -> Task {
    Task::new(
        content(title),
        &Classification::new(false, false, "seed"),
        clock,
    )
}

pub(super) fn task_in(status: TaskStatus, priority: Priority) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        content: content("Persisted task"),
        status,
        priority,
        suggestion: Classification::new(false, false, "seed"),
        created_at: base_instant(),
        updated_at: base_instant(),
    })
}
