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

fn field_line(value: &str, active: bool) -> Line<'_> {
    Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if active {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ])
}

/// Render the edit or substitute form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = &app.input_form else {
        return;
    };

    let mut lines = vec![Line::raw("")];

    let title_text = if app.ui_mode == UiMode::Substituting {
        lines.push(Line::raw("What did you do instead? (empty clears)"));
        lines.push(field_line(&form.name, true));
        lines.push(Line::raw(""));
        lines.push(Line::raw("Enter to save  ·  Esc to cancel"));
        " Substitute "
    } else {
        let name_label = if form.editing_field == 0 {
            "Name: (editing)"
        } else {
            "Name:"
        };
        lines.push(Line::raw(name_label));
        lines.push(field_line(&form.name, form.editing_field == 0));
        lines.push(Line::raw(""));

        let note_label = if form.editing_field == 1 {
            "Note: (editing)"
        } else {
            "Note:"
        };
        lines.push(Line::raw(note_label));
        lines.push(field_line(&form.note, form.editing_field == 1));
        lines.push(Line::raw(""));
        lines.push(Line::raw("Tab to switch fields  ·  Enter to save  ·  Esc to cancel"));
        " Edit Task "
    };

    let modal_area = create_modal_area(area, lines.len() as u16 + 3);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
