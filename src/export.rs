use crate::domain::{day_partition, Task, Weekday};
use crate::persistence::atomic_write;
use crate::ui::board_pane::{board_list, board_title};
use anyhow::Result;
use chrono::NaiveDate;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::path::{Path, PathBuf};
use tracing::info;

/// Width of the exported snapshot in cells
const EXPORT_WIDTH: u16 = 80;

/// File name for a day snapshot, e.g. "SmartPlan-Monday-2026-10-12.txt"
pub fn export_file_name(date: NaiveDate) -> String {
    let day: Weekday = chrono::Datelike::weekday(&date).into();
    format!("SmartPlan-{}-{}.txt", day.name(), date.format("%Y-%m-%d"))
}

/// Draw the day board off-screen and return its text, one line per row
pub fn render_day_text(tasks: &[Task], date: NaiveDate) -> String {
    let day: Weekday = chrono::Datelike::weekday(&date).into();
    let day_tasks = day_partition(tasks, day);

    // Borders plus one row per task, two when it carries a note
    let rows: usize = day_tasks
        .iter()
        .map(|t| if t.note.is_empty() { 1 } else { 2 })
        .sum::<usize>()
        .max(1);
    let height = (rows + 2).min(u16::MAX as usize) as u16;

    let area = Rect::new(0, 0, EXPORT_WIDTH, height);
    let mut buffer = Buffer::empty(area);
    let title = board_title(date, day_tasks.len());
    // Plain glyphs keep the snapshot one cell per character
    board_list(&day_tasks, title, None, false).render(area, &mut buffer);

    let mut lines = Vec::with_capacity(height as usize);
    for y in 0..height {
        let mut line = String::new();
        for x in 0..EXPORT_WIDTH {
            line.push_str(buffer.get(x, y).symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n") + "\n"
}

/// Write the snapshot for `date` into `dir` and return the file path
pub fn export_day(tasks: &[Task], date: NaiveDate, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_file_name(date));
    export_day_to(tasks, date, &path)?;
    Ok(path)
}

/// Write the snapshot for `date` to an explicit path
pub fn export_day_to(tasks: &[Task], date: NaiveDate, path: &Path) -> Result<()> {
    let text = render_day_text(tasks, date);
    atomic_write(path, &text)?;
    info!(path = %path.display(), %date, "exported day snapshot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Period};

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 12).unwrap()
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("Math Class", Category::Fixed, Weekday::Monday, Period::Morning)
                .with_time("10:00-11:30"),
            Task::new("Run", Category::Routine, Weekday::Tuesday, Period::Morning),
            Task::new("Essay", Category::Homework, Weekday::Monday, Period::Evening)
                .with_note("chapter 2"),
        ]
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(monday()), "SmartPlan-Monday-2026-10-12.txt");
    }

    #[test]
    fn test_render_day_text_only_includes_day() {
        let text = render_day_text(&sample_tasks(), monday());
        let lines: Vec<&str> = text.lines().collect();

        // Top border, Math Class, Essay, its note, bottom border
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Monday, Oct 12 (2 tasks)"));
        assert!(lines[1].contains("Math Class"));
        assert!(lines[2].contains("Essay"));
        assert!(lines[3].contains("chapter 2"));
        assert!(!text.contains("Run"));
    }

    #[test]
    fn test_export_empty_day() {
        let text = render_day_text(&[], monday());
        assert!(text.contains("Nothing planned"));
    }

    #[test]
    fn test_export_day_writes_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tasks = sample_tasks();
        let before = tasks.clone();

        let path = export_day(&tasks, monday(), temp_dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "SmartPlan-Monday-2026-10-12.txt");
        assert!(std::fs::read_to_string(&path).unwrap().contains("Math Class"));
        assert_eq!(tasks, before);
    }
}
