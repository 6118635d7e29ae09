use super::enums::{Period, Weekday};
use super::task::{Task, TaskId};

/// Tasks for one day, in the order they appear in the full sequence
pub fn day_partition(tasks: &[Task], day: Weekday) -> Vec<&Task> {
    tasks.iter().filter(|t| t.day == day).collect()
}

/// Ids of one day's tasks, in partition order
pub fn partition_ids(tasks: &[Task], day: Weekday) -> Vec<TaskId> {
    day_partition(tasks, day).into_iter().map(|t| t.id.clone()).collect()
}

/// Period badge text, e.g. "Morning" or "Fixed • 10:00-11:30"
pub fn period_badge(task: &Task) -> String {
    match (&task.period, &task.specific_time) {
        (Period::Fixed, Some(time)) => format!("{} • {}", task.period.name(), time),
        (period, _) => period.name().to_string(),
    }
}

/// Checkbox glyph for the completion flag
pub fn completion_glyph(task: &Task, use_emoji: bool) -> &'static str {
    match (task.is_completed, use_emoji) {
        (true, true) => "✅",
        (false, true) => "⬜",
        (true, false) => "[x]",
        (false, false) => "[ ]",
    }
}
