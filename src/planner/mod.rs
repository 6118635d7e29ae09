//! Plan generation and weekly review through an external model.
//!
//! The [`Planner`] and [`Summarizer`] traits are the seam between the
//! application and the network; [`GeminiClient`] is the real implementation.
//! Whatever a planner returns goes through [`hydrate`] before it can reach
//! the schedule store.

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiClient;

use crate::domain::{Category, Period, PlanInput, Task, TaskId};
use crate::error::{PlannerError, TaskError};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{info, warn};

/// Turns planner input into a week of tasks
pub trait Planner {
    fn generate(&self, input: &PlanInput, today: NaiveDate) -> Result<Vec<Task>, PlannerError>;
}

/// Writes a free-text review of a week
pub trait Summarizer {
    fn summarize(&self, tasks: &[Task]) -> Result<String, PlannerError>;
}

/// Ask `planner` for a new week and validate the result.
///
/// Nothing is returned unless every task passes hydration, so a caller can
/// install the result with a single store replace.
pub fn generate_plan(
    planner: &dyn Planner,
    input: &PlanInput,
    today: NaiveDate,
) -> Result<Vec<Task>, PlannerError> {
    if input.is_empty() {
        return Err(PlannerError::EmptyInput);
    }

    info!(items = input.total_items(), %today, "requesting plan");
    let raw = planner.generate(input, today)?;
    let tasks = hydrate(raw)?;
    info!(tasks = tasks.len(), "plan ready");
    Ok(tasks)
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalize raw planner output into fresh, valid tasks
pub fn hydrate(raw: Vec<Task>) -> Result<Vec<Task>, PlannerError> {
    let mut seen: HashSet<TaskId> = HashSet::new();
    let mut tasks = Vec::with_capacity(raw.len());

    for mut task in raw {
        task.is_completed = false;
        task.is_postponed = false;
        task.is_replaced = false;
        task.replaced_with = None;

        task.specific_time = blank_to_none(task.specific_time);
        task.duration_display = blank_to_none(task.duration_display);
        if task.note.trim().is_empty() {
            task.note.clear();
        }

        if task.specific_time.is_some() {
            task.period = Period::Fixed;
        } else if task.period == Period::Fixed {
            return Err(TaskError::FixedPeriodWithoutTime(task.id).into());
        }
        if task.category == Category::Fixed && task.specific_time.is_none() {
            return Err(TaskError::FixedCategoryWithoutTime(task.id).into());
        }

        if task.id.is_blank() || seen.contains(&task.id) {
            let fresh = TaskId::generate();
            warn!(old = %task.id, new = %fresh, "replacing missing or duplicate task id");
            task.id = fresh;
        }
        seen.insert(task.id.clone());

        task.validate()?;
        tasks.push(task);
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Weekday;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct StubPlanner {
        tasks: Vec<Task>,
        calls: Cell<usize>,
    }

    impl StubPlanner {
        fn new(tasks: Vec<Task>) -> Self {
            Self {
                tasks,
                calls: Cell::new(0),
            }
        }
    }

    impl Planner for StubPlanner {
        fn generate(&self, _input: &PlanInput, _today: NaiveDate) -> Result<Vec<Task>, PlannerError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.tasks.clone())
        }
    }

    struct FailingPlanner;

    impl Planner for FailingPlanner {
        fn generate(&self, _input: &PlanInput, _today: NaiveDate) -> Result<Vec<Task>, PlannerError> {
            Err(PlannerError::Quota)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn sample_input() -> PlanInput {
        let mut input = PlanInput::default();
        input.add_routine("Run", 2, 30, None).unwrap();
        input
    }

    #[test]
    fn test_generate_plan_requires_input() {
        let planner = StubPlanner::new(Vec::new());
        let result = generate_plan(&planner, &PlanInput::default(), today());
        assert!(matches!(result, Err(PlannerError::EmptyInput)));
        assert_eq!(planner.calls.get(), 0);
    }

    #[test]
    fn test_generate_plan_hydrates_output() {
        let mut stale = Task::new("Run", Category::Routine, Weekday::Monday, Period::Morning).with_id("r1");
        stale.is_completed = true;
        let planner = StubPlanner::new(vec![stale]);

        let tasks = generate_plan(&planner, &sample_input(), today()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].is_completed);
        assert_eq!(planner.calls.get(), 1);
    }

    #[test]
    fn test_generate_plan_passes_errors_through() {
        let result = generate_plan(&FailingPlanner, &sample_input(), today());
        assert!(matches!(result, Err(PlannerError::Quota)));
    }

    #[test]
    fn test_hydrate_resets_flags() {
        let mut task = Task::new("Gym", Category::Routine, Weekday::Tuesday, Period::Evening);
        task.is_completed = true;
        task.is_postponed = true;
        task.is_replaced = true;
        task.replaced_with = Some("Walk".to_string());

        let tasks = hydrate(vec![task]).unwrap();
        assert!(!tasks[0].is_completed);
        assert!(!tasks[0].is_postponed);
        assert!(!tasks[0].is_replaced);
        assert_eq!(tasks[0].replaced_with, None);
    }

    #[test]
    fn test_hydrate_cleans_blank_fields() {
        let mut task = Task::new("Read", Category::Routine, Weekday::Monday, Period::Morning)
            .with_note("   ");
        task.specific_time = Some(" ".to_string());
        task.duration_display = Some(String::new());

        let tasks = hydrate(vec![task]).unwrap();
        assert_eq!(tasks[0].specific_time, None);
        assert_eq!(tasks[0].duration_display, None);
        assert_eq!(tasks[0].note, "");
        assert_eq!(tasks[0].period, Period::Morning);
    }

    #[test]
    fn test_hydrate_promotes_timed_task_to_fixed() {
        let mut task = Task::new("Math Class", Category::Fixed, Weekday::Monday, Period::Morning);
        task.specific_time = Some("10:00-11:30".to_string());

        let tasks = hydrate(vec![task]).unwrap();
        assert_eq!(tasks[0].period, Period::Fixed);
    }

    #[test]
    fn test_hydrate_rejects_fixed_without_time() {
        let task = Task::new("Lab", Category::Routine, Weekday::Monday, Period::Fixed).with_id("x");
        let err = hydrate(vec![task]).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::Task(TaskError::FixedPeriodWithoutTime(_))
        ));

        let task = Task::new("Lab", Category::Fixed, Weekday::Monday, Period::Morning).with_id("y");
        let err = hydrate(vec![task]).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::Task(TaskError::FixedCategoryWithoutTime(_))
        ));
    }

    #[test]
    fn test_hydrate_makes_ids_unique() {
        let raw = vec![
            Task::new("A", Category::Routine, Weekday::Monday, Period::Morning).with_id("dup"),
            Task::new("B", Category::Routine, Weekday::Monday, Period::Morning).with_id("dup"),
            Task::new("C", Category::Routine, Weekday::Monday, Period::Morning).with_id(""),
        ];

        let tasks = hydrate(raw).unwrap();
        assert_eq!(tasks[0].id.as_str(), "dup");
        assert_ne!(tasks[1].id.as_str(), "dup");
        assert!(!tasks[2].id.is_blank());

        let ids: HashSet<&TaskId> = tasks.iter().map(|t| &t.id).collect();
        assert_eq!(ids.len(), 3);
        // Order is kept
        let names: Vec<&str> = tasks.iter().map(|t| t.original_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
