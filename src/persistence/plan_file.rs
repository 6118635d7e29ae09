use crate::domain::{validate_plan, PlanInput, Task};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use super::files::{atomic_write, read_file};

/// Load the saved task sequence. A missing or empty file is an empty plan.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<Vec<Task>> {
    let path = path.as_ref();
    let content = read_file(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tasks: Vec<Task> = serde_json::from_str(&content)
        .with_context(|| format!("Plan file is corrupt: {}", path.display()))?;
    validate_plan(&tasks)
        .with_context(|| format!("Plan file is corrupt: {}", path.display()))?;
    debug!(count = tasks.len(), path = %path.display(), "loaded plan");
    Ok(tasks)
}

pub fn save_plan<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(tasks)?;
    atomic_write(path, &json)?;
    debug!(count = tasks.len(), path = %path.display(), "saved plan");
    Ok(())
}

pub fn load_input<P: AsRef<Path>>(path: P) -> Result<PlanInput> {
    let path = path.as_ref();
    let content = read_file(path)?;
    if content.trim().is_empty() {
        return Ok(PlanInput::default());
    }

    serde_json::from_str(&content)
        .with_context(|| format!("Input file is corrupt: {}", path.display()))
}

pub fn save_input<P: AsRef<Path>>(path: P, input: &PlanInput) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(input)?;
    atomic_write(path, &json)?;
    info!(items = input.total_items(), "saved planner input");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Period, Weekday};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_missing_plan_is_empty() {
        let temp_dir = tempdir().unwrap();
        let tasks = load_plan(temp_dir.path().join("plan.json")).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_plan_keeps_order_and_flags() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("plan.json");

        let mut done = Task::new("Essay", Category::Homework, Weekday::Monday, Period::Evening)
            .with_note("chapter 2");
        done.is_completed = true;
        let tasks = vec![
            Task::new("Math Class", Category::Fixed, Weekday::Monday, Period::Morning)
                .with_time("10:00-11:30"),
            done,
            Task::new("Run", Category::Routine, Weekday::Sunday, Period::Morning)
                .with_duration("30 min"),
        ];

        save_plan(&path, &tasks).unwrap();
        assert_eq!(load_plan(&path).unwrap(), tasks);
    }

    #[test]
    fn test_corrupt_plan_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("plan.json");
        std::fs::write(&path, "{ not a plan").unwrap();

        let err = load_plan(&path).unwrap_err();
        assert!(err.to_string().contains("corrupt"));
        // The file is left for the user to inspect
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not a plan");
    }

    #[test]
    fn test_plan_breaking_task_rules_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("plan.json");
        let content = r#"[
            {"id": "t1", "originalName": "Run", "type": "routine", "day": "Monday", "period": "Morning"},
            {"id": "t1", "originalName": "Math", "type": "fixed", "day": "Monday", "period": "Morning"}
        ]"#;
        std::fs::write(&path, content).unwrap();

        let err = load_plan(&path).unwrap_err();
        assert!(err.to_string().contains("corrupt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_plan_with_duplicate_ids_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("plan.json");
        let tasks = vec![
            Task::new("Run", Category::Routine, Weekday::Monday, Period::Morning).with_id("t1"),
            Task::new("Read", Category::Routine, Weekday::Tuesday, Period::Evening).with_id("t1"),
        ];
        save_plan(&path, &tasks).unwrap();

        let err = load_plan(&path).unwrap_err();
        assert!(err.to_string().contains("corrupt"));
        assert!(format!("{:#}", err).contains("appears more than once"));
    }

    #[test]
    fn test_plan_with_dangling_substitute_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("plan.json");
        std::fs::write(
            &path,
            r#"[{"id": "t1", "originalName": "Gym", "type": "routine", "day": "Friday",
                "period": "Evening", "replacedWith": "Walk"}]"#,
        )
        .unwrap();

        assert!(load_plan(&path).is_err());
    }

    #[test]
    fn test_save_and_load_input() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("input.json");

        let mut input = PlanInput::default();
        input.add_routine("Gym", 3, 60, None).unwrap();
        save_input(&path, &input).unwrap();

        let loaded = load_input(&path).unwrap();
        assert_eq!(loaded, input);
        assert_eq!(loaded.total_items(), 1);
    }
}
