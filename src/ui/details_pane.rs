use crate::app::AppState;
use crate::domain::period_badge;
use crate::report::TaskStatus;
use crate::ui::styles::{
    border_style, category_style, default_style, done_style, postponed_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Details ", title_style()));

    let Some(task) = app.selected_task() else {
        f.render_widget(Paragraph::new("No task selected").block(block), area);
        return;
    };

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Name:     ", title_style()),
        Span::raw(task.original_name.clone()),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Type:     ", title_style()),
        Span::styled(task.category.name(), category_style(task.category)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Day:      ", title_style()),
        Span::raw(task.day.name()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("When:     ", title_style()),
        Span::raw(period_badge(task)),
    ]));
    if let Some(duration) = &task.duration_display {
        lines.push(Line::from(vec![
            Span::styled("Duration: ", title_style()),
            Span::raw(duration.clone()),
        ]));
    }

    let status = TaskStatus::of(task);
    let status_style = match status {
        TaskStatus::Completed => done_style(),
        TaskStatus::Postponed => postponed_style(),
        _ => default_style(),
    };
    lines.push(Line::from(vec![
        Span::styled("Status:   ", title_style()),
        Span::styled(status.to_string(), status_style),
    ]));
    lines.push(Line::raw(""));

    if task.note.trim().is_empty() {
        lines.push(Line::from(Span::styled("Note: (empty)", default_style())));
    } else {
        lines.push(Line::from(Span::styled("Note:", title_style())));
        for note_line in task.note.lines() {
            lines.push(Line::raw(format!("  {}", note_line)));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
