use crate::app::AppState;
use crate::domain::Weekday;
use crate::report::calculate_week_stats;
use crate::ui::styles::{border_style, default_style, gauge_style, hint_style, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render weekly completion statistics
pub fn render_summary_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = calculate_week_stats(app.store.all());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Week Summary ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacing
            Constraint::Min(0),    // Text lines
        ])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .percent(stats.completion_rate.min(100) as u16)
        .label(format!("{}% complete", stats.completion_rate));
    f.render_widget(gauge, chunks[0]);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Done: ", title_style()),
            Span::raw(format!("{}/{}", stats.completed, stats.total)),
            Span::styled("  Replaced: ", title_style()),
            Span::raw(stats.replaced.to_string()),
            Span::styled("  Postponed: ", title_style()),
            Span::raw(stats.postponed.to_string()),
        ]),
        Line::raw(""),
    ];

    for day in Weekday::ALL {
        let day_stats = stats.day(day);
        let style = if day == app.selected_day() {
            title_style()
        } else if day_stats.total == 0 {
            hint_style()
        } else {
            default_style()
        };
        lines.push(Line::styled(
            format!(
                "{}  {:>2}/{:<2} {}",
                day.short_name(),
                day_stats.completed,
                day_stats.total,
                "#".repeat(day_stats.completed)
            ),
            style,
        ));
    }

    f.render_widget(Paragraph::new(lines), chunks[2]);
}
