//! Status bar and footer widgets.

use chrono::NaiveDate;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{Store, Tab};
use crate::ui::theme::Theme;

const BRAND: &str = " Celebeauty Intelligence Dashboard ";
const FOOTER: &str = "Confidential • Internal Use Only • Generated by Celebeauty";

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let today = chrono::Local::now().date_naive();
        let line = Self::line(store, today, area.width, theme);
        let paragraph = Paragraph::new(line).style(Style::default().bg(theme.dark_panel));
        frame.render_widget(paragraph, area);
    }

    fn line(store: &Store, today: NaiveDate, width: u16, theme: &Theme) -> Line<'static> {
        let mut left = vec![
            Span::styled(
                BRAND,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│ ", theme.border()),
            Span::styled(
                format!("{} ", store.app.current_tab),
                theme.text().add_modifier(Modifier::BOLD),
            ),
            Span::styled("│ ", theme.border()),
            Span::styled(store.report().quant.profile.name.clone(), theme.text()),
        ];
        if store.app.current_tab == Tab::Content {
            left.push(Span::styled(
                format!(
                    "  Strategy {}/{}",
                    store.carousel.cursor() + 1,
                    store.carousel.count()
                ),
                theme.muted(),
            ));
        }

        let right = Span::styled(
            format!(" Last Updated {}  ? help ", today.format("%Y-%m-%d")),
            theme.muted(),
        );

        let used = Line::from(left.clone()).width() + right.width();
        let padding = usize::from(width).saturating_sub(used);

        left.push(Span::raw(" ".repeat(padding)));
        left.push(right);
        Line::from(left)
    }
}

/// Footer widget.
pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let paragraph = Paragraph::new(Line::styled(FOOTER, theme.muted()).centered());
        frame.render_widget(paragraph, area);
    }
}
