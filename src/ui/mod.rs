pub mod board_pane;
pub mod details_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;
pub mod summary_pane;
pub mod week_bar;

use crate::app::AppState;
use board_pane::render_board_pane;
use details_pane::render_details_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_active_modal;
use ratatui::{text::Span, widgets::Paragraph, Frame};
use styles::{error_style, hint_style};
use summary_pane::render_summary_pane;
use week_bar::render_week_bar;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size, app.show_summary);

    render_keybindings(f, layout.keybindings_area);
    render_week_bar(f, app, layout.week_area);
    render_board_pane(f, app, layout.board_area);
    render_details_pane(f, app, layout.details_area);

    if let Some(summary_area) = layout.summary_area {
        render_summary_pane(f, app, summary_area);
    }

    // Status bar
    if let Some(status) = &app.status {
        let lower = status.to_lowercase();
        let style = if lower.contains("fail") || lower.contains("error") || lower.contains("missing") {
            error_style()
        } else {
            hint_style()
        };
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {}", status), style)),
            layout.status_area,
        );
    }

    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }

    render_active_modal(f, app, size);
}
