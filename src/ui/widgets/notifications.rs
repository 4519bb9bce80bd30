//! Notification rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{Notification, NotificationLevel};
use crate::ui::theme::Theme;

fn level_style(level: NotificationLevel, theme: &Theme) -> (Color, &'static str) {
    match level {
        NotificationLevel::Info => (theme.primary, "ℹ"),
        NotificationLevel::Warning => (theme.warning, "⚠"),
    }
}

/// Render a notification popup.
pub fn render_notification(
    frame: &mut Frame,
    area: Rect,
    notification: &Notification,
    theme: &Theme,
) {
    frame.render_widget(Clear, area);

    let (border_color, icon) = level_style(notification.level, theme);
    let content = Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(border_color)),
        Span::raw(notification.message.as_str()),
    ]);

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .style(theme.text().bg(theme.dark_panel));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_use_theme_colors() {
        let theme = Theme::default();
        assert_eq!(level_style(NotificationLevel::Warning, &theme).0, theme.warning);
        assert_eq!(level_style(NotificationLevel::Info, &theme), (theme.primary, "ℹ"));
    }
}
