//! Tab bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::KeyBindings;
use crate::state::{Store, Tab};
use crate::ui::theme::Theme;

/// Tab bar widget.
pub struct TabBar;

impl TabBar {
    /// Render the tab bar.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        store: &Store,
        keybindings: &KeyBindings,
        theme: &Theme,
    ) {
        let paragraph = Paragraph::new(Self::line(store.app.current_tab, keybindings, theme));
        frame.render_widget(paragraph, area);
    }

    fn line(current: Tab, keybindings: &KeyBindings, theme: &Theme) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];

        for tab in Tab::ALL {
            let key = match tab {
                Tab::Quant => &keybindings.quant_tab,
                Tab::Content => &keybindings.content_tab,
            };
            let name_style = if tab == current {
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                theme.muted()
            };

            spans.push(Span::styled(format!("[{key}] "), theme.border()));
            spans.push(Span::styled(tab.title(), name_style));
            spans.push(Span::raw("  "));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::text::line_text;

    #[test]
    fn test_tab_captions() {
        let line = TabBar::line(Tab::Quant, &KeyBindings::default(), &Theme::default());
        assert_eq!(
            line_text(&line),
            " [F1] 팬덤 지표 분석  [F2] 채널 핵심 콘텐츠 분석  "
        );
    }

    #[test]
    fn test_active_tab_highlighted() {
        let theme = Theme::default();
        let line = TabBar::line(Tab::Content, &KeyBindings::default(), &theme);
        assert_eq!(line.spans[2].style, theme.muted());
        assert_eq!(line.spans[5].style.fg, Some(theme.primary));
    }
}
