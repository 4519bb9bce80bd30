//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::config::KeyBindings;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

/// Help panel listing the configured key bindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keybindings: &KeyBindings, theme: &Theme) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(Self::lines(keybindings, theme))
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.warning)),
            )
            .style(theme.text().bg(theme.dark_panel));

        frame.render_widget(help, popup_area);
    }

    fn lines(keys: &KeyBindings, theme: &Theme) -> Vec<Line<'static>> {
        let heading = |title: &'static str| {
            Line::styled(title, theme.text().fg(theme.warning).add_modifier(Modifier::BOLD))
        };
        let entry = |key: String, action: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<12}"), theme.text().fg(theme.primary)),
                Span::raw(action),
            ])
        };

        vec![
            heading("Tabs"),
            Line::default(),
            entry(keys.quant_tab.clone(), "Fandom metrics"),
            entry(keys.content_tab.clone(), "Content strategy"),
            entry(format!("{}/S-Tab", keys.next_tab), "Switch tabs"),
            Line::default(),
            heading("Scrolling"),
            Line::default(),
            entry(format!("{}/↓", keys.down), "Scroll down"),
            entry(format!("{}/↑", keys.up), "Scroll up"),
            entry("PgDn/PgUp".to_string(), "Scroll a page"),
            entry(format!("{}/Home", keys.top), "Go to top"),
            entry(format!("{}/End", keys.bottom), "Go to bottom"),
            Line::default(),
            heading("Strategies"),
            Line::default(),
            entry(format!("{}/→", keys.next_strategy), "Next strategy"),
            entry(format!("{}/←", keys.prev_strategy), "Previous strategy"),
            entry("1-9".to_string(), "Jump to strategy"),
            Line::default(),
            heading("General"),
            Line::default(),
            entry(keys.back.clone(), "Close popup"),
            entry(keys.help.clone(), "Toggle help"),
            entry(format!("{}/Ctrl+c", keys.quit), "Quit"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::text::line_text;

    #[test]
    fn test_help_reflects_bindings() {
        let keys = KeyBindings {
            next_strategy: "n".to_string(),
            ..Default::default()
        };
        let lines: Vec<String> = HelpPanel::lines(&keys, &Theme::default())
            .iter()
            .map(line_text)
            .collect();

        assert!(lines.contains(&"  n/→         Next strategy".to_string()));
        assert!(lines.contains(&"  F1          Fandom metrics".to_string()));
        assert!(lines.contains(&"  Shift+g/End Go to bottom".to_string()));
    }
}
