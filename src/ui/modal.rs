use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn render_box(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let modal_area = create_modal_area(area, lines.len() as u16 + 2);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", title), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

fn pending_name(app: &AppState) -> String {
    app.pending_task
        .as_ref()
        .and_then(|id| app.store.get(id))
        .map(|t| t.display_name().to_string())
        .unwrap_or_default()
}

/// Render whichever confirmation modal the current mode calls for
pub fn render_active_modal(f: &mut Frame, app: &AppState, area: Rect) {
    match app.ui_mode {
        UiMode::ChoosingPostpone => render_postpone_modal(f, app, area),
        UiMode::ConfirmDelete => render_delete_modal(f, app, area),
        UiMode::ConfirmRegenerate => render_regenerate_modal(f, area),
        UiMode::Planning => render_planning_overlay(f, area),
        _ => {}
    }
}

/// Ask where the task should go
fn render_postpone_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  Postpone \"{}\" to:", pending_name(app))),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [l]", modal_title_style()),
            Span::raw(" Later today  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Next day  "),
            Span::styled("[Esc]", modal_title_style()),
            Span::raw(" Cancel"),
        ]),
        Line::raw(""),
    ];
    render_box(f, area, "Postpone", lines);
}

fn render_delete_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  Delete \"{}\"?", pending_name(app))),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" Delete  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Keep"),
        ]),
        Line::raw(""),
    ];
    render_box(f, area, "Delete Task", lines);
}

fn render_regenerate_modal(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::raw("  Generate a new week from your input?"),
        Line::raw("  The current plan and its progress will be replaced."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" Generate  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Cancel"),
        ]),
        Line::raw(""),
    ];
    render_box(f, area, "Regenerate Plan", lines);
}

fn render_planning_overlay(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::raw("  Planning your week..."),
        Line::raw(""),
    ];
    render_box(f, area, "Planning", lines);
}
