//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// UI layout areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Status bar area (top), if shown.
    pub status_area: Option<Rect>,
    /// Tab bar area.
    pub tab_area: Rect,
    /// Dashboard area.
    pub main_area: Rect,
    /// Footer area (bottom), if shown.
    pub footer_area: Option<Rect>,
    /// Notification area (overlaid).
    pub notification_area: Rect,
}

impl Layout {
    /// Split the terminal area, leaving out disabled bars.
    pub fn new(area: Rect, show_status_bar: bool, show_footer: bool) -> Self {
        let mut constraints = Vec::with_capacity(4);
        if show_status_bar {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1)); // Tab bar
        constraints.push(Constraint::Min(0)); // Dashboard
        if show_footer {
            constraints.push(Constraint::Length(1));
        }

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut next = chunks.iter().copied();
        let status_area = show_status_bar.then(|| next.next()).flatten();
        let tab_area = next.next().unwrap_or_default();
        let main_area = next.next().unwrap_or_default();
        let footer_area = show_footer.then(|| next.next()).flatten();

        // Notification area is centered over the dashboard
        let notification_area = Rect {
            x: area.x + area.width / 4,
            y: area.y + (area.height / 2).saturating_sub(2),
            width: area.width / 2,
            height: 4.min(area.height),
        };

        Self {
            status_area,
            tab_area,
            main_area,
            footer_area,
            notification_area,
        }
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
