use super::enums::{Category, Period, Weekday};
use crate::error::TaskError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Opaque task identifier, unique within a schedule
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scheduled unit of work or event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Display label, changed only by editing
    pub original_name: String,
    /// Provenance tag
    #[serde(rename = "type")]
    pub category: Category,
    pub day: Weekday,
    pub period: Period,
    /// Exact time range such as "10:00-11:30"; only for `Period::Fixed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_display: Option<String>,
    /// Free-text note; empty means no note
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_postponed: bool,
    #[serde(default)]
    pub is_replaced: bool,
    /// What was done instead; set only while `is_replaced`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaced_with: Option<String>,
}

impl Task {
    /// Name to show on the board: the substitute activity when replaced
    pub fn display_name(&self) -> &str {
        match (&self.replaced_with, self.is_replaced) {
            (Some(with), true) => with,
            _ => &self.original_name,
        }
    }

    /// Append a marker to the note, separated by a single space
    pub fn append_note(&mut self, marker: &str) {
        if self.note.is_empty() {
            self.note = marker.to_string();
        } else {
            self.note.push(' ');
            self.note.push_str(marker);
        }
    }

    /// Check the per-task invariants
    pub fn validate(&self) -> Result<(), TaskError> {
        let has_time = self
            .specific_time
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());

        if self.period == Period::Fixed && !has_time {
            return Err(TaskError::FixedPeriodWithoutTime(self.id.clone()));
        }
        if self.period != Period::Fixed && self.specific_time.is_some() {
            return Err(TaskError::TimeOutsideFixedPeriod(self.id.clone()));
        }
        if self.category == Category::Fixed && !has_time {
            return Err(TaskError::FixedCategoryWithoutTime(self.id.clone()));
        }
        if self.replaced_with.is_some() != self.is_replaced {
            return Err(TaskError::DanglingSubstitute(self.id.clone()));
        }
        Ok(())
    }
}

/// Check every task and that no id repeats
pub fn validate_plan(tasks: &[Task]) -> Result<(), TaskError> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        task.validate()?;
        if !seen.insert(&task.id) {
            return Err(TaskError::DuplicateId(task.id.clone()));
        }
    }
    Ok(())
}

/// Test builders
#[cfg(test)]
impl Task {
    pub fn new(name: impl Into<String>, category: Category, day: Weekday, period: Period) -> Self {
        Self {
            id: TaskId::generate(),
            original_name: name.into(),
            category,
            day,
            period,
            specific_time: None,
            duration_display: None,
            note: String::new(),
            is_completed: false,
            is_postponed: false,
            is_replaced: false,
            replaced_with: None,
        }
    }

    /// Pin the task to an exact time range (switches the period to Fixed)
    pub fn with_time(mut self, range: impl Into<String>) -> Self {
        self.period = Period::Fixed;
        self.specific_time = Some(range.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_duration(mut self, display: impl Into<String>) -> Self {
        self.duration_display = Some(display.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new("Vocabulary", Category::Routine, Weekday::Monday, Period::Morning);
        assert_eq!(task.original_name, "Vocabulary");
        assert!(!task.is_completed);
        assert!(!task.is_postponed);
        assert!(!task.is_replaced);
        assert!(task.note.is_empty());
        assert!(task.validate().is_ok());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = TaskId::generate();
        let b = TaskId::generate();
        assert_ne!(a, b);
        assert!(!a.is_blank());
    }

    #[test]
    fn test_append_note() {
        let mut task = Task::new("Essay", Category::Homework, Weekday::Friday, Period::Evening);
        task.append_note("[Postponed]");
        assert_eq!(task.note, "[Postponed]");
        task.append_note("[Postponed from Friday]");
        assert_eq!(task.note, "[Postponed] [Postponed from Friday]");
    }

    #[test]
    fn test_display_name_prefers_substitute() {
        let mut task = Task::new("Gym", Category::Routine, Weekday::Tuesday, Period::Evening);
        assert_eq!(task.display_name(), "Gym");
        task.is_replaced = true;
        task.replaced_with = Some("Rested".to_string());
        assert_eq!(task.display_name(), "Rested");
    }

    #[test]
    fn test_validate_fixed_requires_time() {
        let task = Task::new("Math", Category::Fixed, Weekday::Monday, Period::Morning);
        assert!(matches!(task.validate(), Err(TaskError::FixedCategoryWithoutTime(_))));

        let task = task.with_time("10:00-11:30");
        assert!(task.validate().is_ok());
    }

    #[test]
    fn test_validate_time_only_with_fixed_period() {
        let mut task = Task::new("Read", Category::Routine, Weekday::Monday, Period::Morning);
        task.specific_time = Some("08:00-09:00".to_string());
        assert!(matches!(task.validate(), Err(TaskError::TimeOutsideFixedPeriod(_))));
    }

    #[test]
    fn test_validate_plan_rejects_repeated_id() {
        let a = Task::new("Run", Category::Routine, Weekday::Monday, Period::Morning).with_id("t1");
        let b = Task::new("Read", Category::Routine, Weekday::Monday, Period::Evening).with_id("t2");
        assert!(validate_plan(&[a.clone(), b]).is_ok());

        let again = a.clone();
        assert_eq!(
            validate_plan(&[a, again]),
            Err(TaskError::DuplicateId(TaskId::from("t1")))
        );
    }

    #[test]
    fn test_deserialize_planner_shape() {
        let json = r#"{
            "id": "t1",
            "originalName": "Math Class",
            "type": "fixed",
            "day": "Monday",
            "period": "Fixed",
            "specificTime": "10:00-11:30"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "t1");
        assert_eq!(task.category, Category::Fixed);
        assert_eq!(task.specific_time.as_deref(), Some("10:00-11:30"));
        assert!(!task.is_completed);
        assert!(task.note.is_empty());
    }
}
