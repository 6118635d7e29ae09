use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub week_area: Rect,
    pub board_area: Rect,
    pub details_area: Rect,
    pub summary_area: Option<Rect>,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Week navigator (3 rows)
/// - Main area: Board (65%) | Details, with the summary below it when shown
/// - Bottom bar: status message (1 row)
pub fn create_layout(area: Rect, show_summary: bool) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Week navigator
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Board pane
            Constraint::Percentage(35), // Side panes
        ])
        .split(main_chunks[2]);

    let (details_area, summary_area) = if show_summary {
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(horizontal_split[1]);
        (side[0], Some(side[1]))
    } else {
        (horizontal_split[1], None)
    };

    MainLayout {
        keybindings_area: main_chunks[0],
        week_area: main_chunks[1],
        board_area: horizontal_split[0],
        details_area,
        summary_area,
        status_area: main_chunks[3],
    }
}

/// Create a centered modal area of the given height
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area, false);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.week_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
        assert!(layout.board_area.width > layout.details_area.width);
        assert!(layout.summary_area.is_none());

        let with_summary = create_layout(area, true);
        let summary = with_summary.summary_area.unwrap();
        assert!(summary.height > 0);
        assert_eq!(summary.x, with_summary.details_area.x);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area, 9);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 9);
    }
}
