//! Board-wide settings: work-in-progress limit and backlog warning threshold.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Default number of tasks allowed in `IN_PROGRESS` at once.
pub const DEFAULT_WIP_LIMIT: u32 = 3;

/// Default backlog size above which the board warns the user.
pub const DEFAULT_BACKLOG_WARN_THRESHOLD: u32 = 12;

/// Maximum number of tasks permitted in `IN_PROGRESS` simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WipLimit(NonZeroU32);

impl WipLimit {
    /// Creates a validated limit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidWipLimit`] when the value is zero.
    pub fn new(value: u32) -> Result<Self, TaskDomainError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or_else(|| TaskDomainError::InvalidWipLimit(value.to_string()))
    }

    /// Creates a limit from an untyped numeric input, flooring fractions.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidWipLimit`] when the value is not
    /// finite, is not positive, floors to zero, or exceeds `u32::MAX`.
    pub fn from_number(value: f64) -> Result<Self, TaskDomainError> {
        if !value.is_finite() || value <= 0.0 || value > f64::from(u32::MAX) {
            return Err(TaskDomainError::InvalidWipLimit(value.to_string()));
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is finite and within 0..=u32::MAX after the range check"
        )]
        let whole = value.floor() as u32;
        Self::new(whole).map_err(|_| TaskDomainError::InvalidWipLimit(value.to_string()))
    }

    /// Returns the limit as a count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns `true` when `in_progress` other tasks leave room for one more.
    #[must_use]
    pub fn admits(self, in_progress: usize) -> bool {
        usize::try_from(self.get()).map_or(true, |limit| in_progress < limit)
    }
}

impl Default for WipLimit {
    fn default() -> Self {
        Self(NonZeroU32::new(DEFAULT_WIP_LIMIT).unwrap_or(NonZeroU32::MIN))
    }
}

impl fmt::Display for WipLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board-wide configuration held alongside the task store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    wip_limit: WipLimit,
    backlog_warn_threshold: u32,
}

impl Settings {
    /// Creates settings with the given limit and the default threshold.
    #[must_use]
    pub const fn new(wip_limit: WipLimit) -> Self {
        Self {
            wip_limit,
            backlog_warn_threshold: DEFAULT_BACKLOG_WARN_THRESHOLD,
        }
    }

    /// Returns a copy with a different WIP limit.
    #[must_use]
    pub const fn with_wip_limit(self, wip_limit: WipLimit) -> Self {
        Self { wip_limit, ..self }
    }

    /// Returns the WIP limit.
    #[must_use]
    pub const fn wip_limit(&self) -> WipLimit {
        self.wip_limit
    }

    /// Returns the backlog warning threshold.
    #[must_use]
    pub const fn backlog_warn_threshold(&self) -> u32 {
        self.backlog_warn_threshold
    }

    /// Returns `true` when a backlog of `backlog_size` tasks should be
    /// flagged to the user.
    #[must_use]
    pub fn backlog_exceeds_threshold(&self, backlog_size: usize) -> bool {
        usize::try_from(self.backlog_warn_threshold)
            .is_ok_and(|threshold| backlog_size > threshold)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(WipLimit::default())
    }
}
