use crate::domain::{Task, Weekday};
use crate::persistence::{atomic_write, report_file};
use crate::report::stats::{calculate_week_stats, completion_rate, TaskStatus};
use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::info;

/// Render the weekly review for the plan as Markdown
pub fn render_report(tasks: &[Task], date: NaiveDate) -> String {
    let stats = calculate_week_stats(tasks);
    let mut report = String::new();

    report.push_str(&format!("# Weekly Report - {}\n\n", date));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!("- **Total Tasks:** {}\n", stats.total));
    report.push_str(&format!(
        "- **Completed:** {} ({}%)\n",
        stats.completed, stats.completion_rate
    ));
    report.push_str(&format!("- **Replaced:** {}\n", stats.replaced));
    report.push_str(&format!("- **Postponed:** {}\n", stats.postponed));
    report.push_str(&format!("- **Missed:** {}\n\n", stats.missed));

    if stats.total == 0 {
        report.push_str("_No tasks planned yet._\n");
        return report;
    }

    // By Day Section
    report.push_str("## By Day\n\n");
    report.push_str("| Day | Done | Rate |\n");
    report.push_str("|-----|------|------|\n");
    for day in Weekday::ALL {
        let day_stats = stats.day(day);
        if day_stats.total == 0 {
            continue;
        }
        report.push_str(&format!(
            "| {} | {}/{} | {}% |\n",
            day.name(),
            day_stats.completed,
            day_stats.total,
            completion_rate(day_stats.completed, day_stats.total)
        ));
    }
    report.push('\n');

    // By Category Section
    report.push_str("## By Category\n\n");
    for (category, count) in &stats.per_category {
        report.push_str(&format!("- **{}:** {}\n", category.name(), count));
    }
    report.push('\n');

    // Task Log Section
    report.push_str("## Task Log\n\n");
    for day in Weekday::ALL {
        let day_tasks: Vec<&Task> = tasks.iter().filter(|t| t.day == day).collect();
        if day_tasks.is_empty() {
            continue;
        }
        report.push_str(&format!("### {}\n\n", day.name()));
        for task in day_tasks {
            report.push_str(&format!(
                "- {} - {}\n",
                task.original_name,
                TaskStatus::of(task)
            ));
        }
        report.push('\n');
    }

    report
}

/// Write the report (plus an optional coach review) and return its path
pub fn generate_report(
    tasks: &[Task],
    date: NaiveDate,
    output_path: Option<PathBuf>,
    coach_review: Option<&str>,
) -> Result<PathBuf> {
    let mut report = render_report(tasks, date);

    if let Some(review) = coach_review {
        report.push_str("## Coach Review\n\n");
        report.push_str(review.trim());
        report.push('\n');
    }

    let path = match output_path {
        Some(path) => path,
        None => report_file(date)?,
    };
    atomic_write(&path, &report)?;
    info!(path = %path.display(), tasks = tasks.len(), "wrote weekly report");

    Ok(path)
}
