use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ←/→ day   "),
        Span::raw("[/] week   "),
        Span::raw("t today   "),
        Span::raw("↑/↓ select   "),
        Span::raw("Shift+↑/↓ reorder   "),
        Span::raw("Enter done   "),
        Span::raw("r substitute   "),
        Span::raw("p postpone   "),
        Span::raw("e edit   "),
        Span::raw("x delete   "),
        Span::raw("u undo   "),
        Span::raw("g generate   "),
        Span::raw("v summary   "),
        Span::raw("E export   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
