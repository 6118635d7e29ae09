use crate::domain::{Category, Period};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::DIM)
}

/// Postponed badge style
pub fn postponed_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Original name of a replaced task
pub fn replaced_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Substitute activity text
pub fn substitute_style() -> Style {
    Style::default()
        .fg(Color::LightMagenta)
        .add_modifier(Modifier::ITALIC)
}

/// Today's date in the week bar
pub fn today_style() -> Style {
    Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Completion gauge in the summary pane
pub fn gauge_style() -> Style {
    Style::default().fg(Color::Green).bg(Color::DarkGray)
}

pub fn period_style(period: Period) -> Style {
    let color = match period {
        Period::Morning => Color::LightYellow,
        Period::Afternoon => Color::LightBlue,
        Period::Evening => Color::Magenta,
        Period::Fixed => Color::LightRed,
    };
    Style::default().fg(color)
}

pub fn category_style(category: Category) -> Style {
    let color = match category {
        Category::Fixed => Color::LightRed,
        Category::Routine => Color::Green,
        Category::Homework => Color::Blue,
        Category::Project => Color::Cyan,
        Category::Substitute => Color::LightMagenta,
    };
    Style::default().fg(color)
}
