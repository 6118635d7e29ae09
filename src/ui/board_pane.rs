use crate::app::AppState;
use crate::domain::{completion_glyph, period_badge, Task};
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, period_style, postponed_style,
    replaced_style, selected_style, substitute_style, title_style,
};
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Pane title, e.g. " Monday, Oct 12 (3 tasks) "
pub fn board_title(date: NaiveDate, count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!(" {} ({} task{}) ", date.format("%A, %b %d"), count, plural)
}

/// Build the day board widget. Shared by the live pane and the exporter.
pub fn board_list(
    tasks: &[&Task],
    title: String,
    selected: Option<usize>,
    use_emoji: bool,
) -> List<'static> {
    let items: Vec<ListItem> = if tasks.is_empty() {
        vec![ListItem::new(Line::styled(
            "  Nothing planned. Press g to generate a week.",
            hint_style(),
        ))]
    } else {
        tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| {
                let style = if Some(idx) == selected {
                    selected_style()
                } else if task.is_completed {
                    done_style()
                } else {
                    default_style()
                };
                ListItem::new(task_text(task, use_emoji)).style(style)
            })
            .collect()
    };

    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    )
}

/// Render the selected day's tasks
pub fn render_board_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = app.day_tasks();
    let title = board_title(app.cursor.date(), tasks.len());
    let list = board_list(&tasks, title, Some(app.selected_index), app.use_emoji);
    f.render_widget(list, area);
}

/// Lines for one task
/// Format: [ ] Fixed • 10:00-11:30  Math Class  (90 min) [Postponed]
///             note text
fn task_text(task: &Task, use_emoji: bool) -> Text<'static> {
    let mut spans = Vec::new();

    spans.push(Span::raw(format!("{} ", completion_glyph(task, use_emoji))));
    spans.push(Span::styled(
        format!("{:<9}", period_badge(task)),
        period_style(task.period),
    ));
    spans.push(Span::raw("  "));

    // Substitute text first, then the struck-through original
    if task.is_replaced {
        spans.push(Span::styled(task.display_name().to_string(), substitute_style()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(task.original_name.clone(), replaced_style()));
    } else {
        spans.push(Span::raw(task.original_name.clone()));
    }

    if let Some(duration) = &task.duration_display {
        spans.push(Span::styled(format!("  ({})", duration), hint_style()));
    }

    if task.is_postponed {
        spans.push(Span::styled(" [Postponed]", postponed_style()));
    }

    let mut lines = vec![Line::from(spans)];
    if !task.note.is_empty() {
        lines.push(Line::styled(format!("      {}", task.note), hint_style()));
    }
    Text::from(lines)
}
