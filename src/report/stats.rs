use crate::domain::{Category, Task, Weekday};
use std::fmt;

/// Task counts for a single weekday
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayStats {
    pub total: usize,
    pub completed: usize,
}

/// Completion statistics over the whole week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekStats {
    pub total: usize,
    pub completed: usize,
    pub replaced: usize,
    pub postponed: usize,
    /// Tasks with no outcome at all
    pub missed: usize,
    /// Rounded percentage of completed tasks, 0 when there are none
    pub completion_rate: u32,
    /// Indexed by `Weekday::index()`
    pub per_day: [DayStats; 7],
    /// Categories with at least one task, in category order
    pub per_category: Vec<(Category, usize)>,
}

impl WeekStats {
    pub fn day(&self, day: Weekday) -> DayStats {
        self.per_day[day.index()]
    }
}

/// Outcome of a single task as reported in the weekly review
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Replaced(String),
    Postponed,
    Missed,
}

impl TaskStatus {
    pub fn of(task: &Task) -> Self {
        if task.is_completed {
            TaskStatus::Completed
        } else if task.is_replaced {
            TaskStatus::Replaced(task.replaced_with.clone().unwrap_or_default())
        } else if task.is_postponed {
            TaskStatus::Postponed
        } else {
            TaskStatus::Missed
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Completed => f.write_str("Completed"),
            TaskStatus::Replaced(with) => write!(f, "Replaced with {}", with),
            TaskStatus::Postponed => f.write_str("Postponed"),
            TaskStatus::Missed => f.write_str("Missed"),
        }
    }
}

/// Rounded percentage, half rounds up
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed * 100 + total / 2) / total) as u32
}

/// Calculate week statistics across all tasks
pub fn calculate_week_stats(tasks: &[Task]) -> WeekStats {
    let mut per_day = [DayStats::default(); 7];
    let mut completed = 0;
    let mut replaced = 0;
    let mut postponed = 0;
    let mut missed = 0;

    for task in tasks {
        let day = &mut per_day[task.day.index()];
        day.total += 1;
        if task.is_completed {
            completed += 1;
            day.completed += 1;
        }
        if task.is_replaced {
            replaced += 1;
        }
        if task.is_postponed {
            postponed += 1;
        }
        if TaskStatus::of(task) == TaskStatus::Missed {
            missed += 1;
        }
    }

    let per_category = Category::all()
        .iter()
        .map(|category| {
            let count = tasks.iter().filter(|t| t.category == *category).count();
            (*category, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();

    WeekStats {
        total: tasks.len(),
        completed,
        replaced,
        postponed,
        missed,
        completion_rate: completion_rate(completed, tasks.len()),
        per_day,
        per_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Period;
    use pretty_assertions::assert_eq;

    fn task(name: &str, category: Category, day: Weekday) -> Task {
        Task::new(name, category, day, Period::Morning)
    }

    #[test]
    fn test_empty_week() {
        let stats = calculate_week_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_rate, 0);
        assert!(stats.per_category.is_empty());
    }

    #[test]
    fn test_completion_rate_rounds() {
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(1, 8), 13);
        assert_eq!(completion_rate(4, 4), 100);
    }

    #[test]
    fn test_week_stats_counts() {
        let mut done = task("Run", Category::Routine, Weekday::Monday);
        done.is_completed = true;
        let mut swapped = task("Gym", Category::Routine, Weekday::Tuesday);
        swapped.is_replaced = true;
        swapped.replaced_with = Some("Walk".to_string());
        let mut later = task("Essay", Category::Homework, Weekday::Tuesday);
        later.is_postponed = true;
        let missed = task("Slides", Category::Project, Weekday::Monday);

        let stats = calculate_week_stats(&[done, swapped, later, missed]);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.replaced, 1);
        assert_eq!(stats.postponed, 1);
        assert_eq!(stats.missed, 1);
        assert_eq!(stats.completion_rate, 25);
        assert_eq!(stats.day(Weekday::Monday), DayStats { total: 2, completed: 1 });
        assert_eq!(stats.day(Weekday::Sunday), DayStats::default());
        assert_eq!(
            stats.per_category,
            vec![
                (Category::Routine, 2),
                (Category::Homework, 1),
                (Category::Project, 1),
            ]
        );
    }

    #[test]
    fn test_task_status_precedence() {
        let mut t = task("Gym", Category::Routine, Weekday::Friday);
        assert_eq!(TaskStatus::of(&t), TaskStatus::Missed);

        t.is_postponed = true;
        assert_eq!(TaskStatus::of(&t), TaskStatus::Postponed);

        t.is_replaced = true;
        t.replaced_with = Some("Swim".to_string());
        assert_eq!(TaskStatus::of(&t).to_string(), "Replaced with Swim");

        t.is_completed = true;
        assert_eq!(TaskStatus::of(&t), TaskStatus::Completed);
    }
}
