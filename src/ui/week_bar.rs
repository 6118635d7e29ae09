use crate::app::AppState;
use crate::schedule::is_today;
use crate::ui::styles::{border_style, default_style, selected_style, title_style, today_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the seven days of the selected week
pub fn render_week_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let week = app.cursor.week();
    let title = format!(
        " Week of {} - {} ",
        week[0].format("%b %d"),
        week[6].format("%b %d, %Y")
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(inner);

    for (date, cell) in week.iter().zip(cells.iter()) {
        let label = format!("{}", date.format("%a %d"));
        let style = if app.cursor.is_selected(*date) {
            selected_style()
        } else if is_today(*date) {
            today_style()
        } else {
            default_style()
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, *cell);
    }
}
