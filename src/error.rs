use crate::domain::{TaskId, Weekday};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Cannot move {day} task from position {from} to {to}: the day has {len} tasks")]
    IndexOutOfRange {
        day: Weekday,
        from: usize,
        to: usize,
        len: usize,
    },
}

/// A task that breaks one of the per-task invariants
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task {0} has period Fixed but no time range")]
    FixedPeriodWithoutTime(TaskId),

    #[error("Task {0} has a time range but is not in the Fixed period")]
    TimeOutsideFixedPeriod(TaskId),

    #[error("Fixed task {0} has no time range")]
    FixedCategoryWithoutTime(TaskId),

    #[error("Task {0} has a substitute without being marked replaced (or the reverse)")]
    DanglingSubstitute(TaskId),

    #[error("Task id {0} appears more than once")]
    DuplicateId(TaskId),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("End time {end} must be after start time {start}")]
    EndBeforeStart { start: String, end: String },

    #[error("Weekly frequency must be between 1 and 7, got {0}")]
    FrequencyOutOfRange(u8),

    #[error("Duration must be at least one minute")]
    ZeroDuration,

    #[error("At least one session is needed")]
    ZeroSessions,
}

/// Coarse failure class for external calls, used to pick the message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    MissingCredential,
    NetworkOrQuota,
    Unknown,
}

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("API key is missing. Set SMARTPLAN_API_KEY (or GEMINI_API_KEY)")]
    MissingCredential,

    #[error("API key was rejected (HTTP {0})")]
    RejectedCredential(u16),

    #[error("Request quota exceeded, try again later")]
    Quota,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Nothing to plan: add fixed events, routines, homework or projects first")]
    EmptyInput,

    #[error("Planner returned an invalid plan: {0}")]
    InvalidPlan(String),

    #[error("Plan breaks a task rule: {0}")]
    Task(#[from] TaskError),

    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl PlannerError {
    pub fn category(&self) -> FailureCategory {
        match self {
            PlannerError::MissingCredential | PlannerError::RejectedCredential(_) => {
                FailureCategory::MissingCredential
            }
            PlannerError::Quota | PlannerError::Network(_) => FailureCategory::NetworkOrQuota,
            PlannerError::EmptyInput
            | PlannerError::InvalidPlan(_)
            | PlannerError::Task(_)
            | PlannerError::Encode(_) => FailureCategory::Unknown,
        }
    }

    /// Short message for the status bar
    pub fn user_message(&self) -> String {
        match self.category() {
            FailureCategory::MissingCredential => self.to_string(),
            FailureCategory::NetworkOrQuota => {
                format!("Failed to reach the planner. Check your connection or API limit. ({})", self)
            }
            FailureCategory::Unknown => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_error_categories() {
        assert_eq!(
            PlannerError::MissingCredential.category(),
            FailureCategory::MissingCredential
        );
        assert_eq!(
            PlannerError::RejectedCredential(403).category(),
            FailureCategory::MissingCredential
        );
        assert_eq!(PlannerError::Quota.category(), FailureCategory::NetworkOrQuota);
        assert_eq!(
            PlannerError::Network("timeout".into()).category(),
            FailureCategory::NetworkOrQuota
        );
        assert_eq!(
            PlannerError::InvalidPlan("not json".into()).category(),
            FailureCategory::Unknown
        );
    }

    #[test]
    fn test_index_error_message() {
        let err = ScheduleError::IndexOutOfRange {
            day: Weekday::Monday,
            from: 5,
            to: 0,
            len: 3,
        };
        assert!(err.to_string().contains("Monday"));
        assert!(err.to_string().contains("3 tasks"));
    }
}
