//! UI rendering using ratatui.
//!
//! The dashboards are built as styled [`Text`] from the report and then
//! drawn into one scrollable, bordered paragraph per tab.

mod layout;
pub mod theme;
mod widgets;

pub use layout::{Layout, centered_rect};
pub use theme::Theme;
pub use widgets::{
    Footer, HelpPanel, QuantDashboard, StatusBar, StrategyCarousel, StrategyDashboard, TabBar,
};

use crate::config::{Config, KeyBindings};
use crate::state::{Store, Tab};
use ratatui::{
    Frame,
    layout::Rect,
    text::Text,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Main UI renderer.
#[derive(Debug, Clone)]
pub struct Ui {
    theme: Theme,
    keybindings: KeyBindings,
    show_status_bar: bool,
    show_footer: bool,
}

impl Ui {
    pub fn new(config: &Config) -> Self {
        Self {
            theme: Theme::from_config(&config.theme),
            keybindings: config.keybindings.clone(),
            show_status_bar: config.ui.show_status_bar,
            show_footer: config.ui.show_footer,
        }
    }

    /// Render the entire UI.
    pub fn render(&self, frame: &mut Frame, store: &Store) {
        let layout = self.layout(frame.area());

        if let Some(area) = layout.status_area {
            StatusBar::render(frame, area, store, &self.theme);
        }
        TabBar::render(frame, layout.tab_area, store, &self.keybindings, &self.theme);

        let dashboard = Paragraph::new(self.dashboard_text(store))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border()),
            )
            .wrap(Wrap { trim: false })
            .scroll((store.app.scroll().offset, 0));
        frame.render_widget(dashboard, layout.main_area);

        if let Some(area) = layout.footer_area {
            Footer::render(frame, area, &self.theme);
        }

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), &self.keybindings, &self.theme);
        }

        // Render notification if present
        if let Some(active) = &store.app.notification {
            widgets::render_notification(
                frame,
                layout.notification_area,
                &active.notification,
                &self.theme,
            );
        }
    }

    /// The active tab's dashboard.
    pub fn dashboard_text<'a>(&self, store: &'a Store) -> Text<'a> {
        let report = store.report();
        match store.app.current_tab {
            Tab::Quant => QuantDashboard::text(&report.quant, &self.theme),
            Tab::Content => {
                StrategyDashboard::text(
                    &report.content,
                    &store.carousel,
                    &self.keybindings,
                    &self.theme,
                )
            }
        }
    }

    /// Largest scroll offset that still fills the dashboard viewport of a
    /// terminal sized `area`.
    pub fn scroll_limit(&self, store: &Store, area: Rect) -> u16 {
        let main = self.layout(area).main_area;
        let inner_width = main.width.saturating_sub(2);
        let inner_height = usize::from(main.height.saturating_sub(2));

        let lines = Paragraph::new(self.dashboard_text(store))
            .wrap(Wrap { trim: false })
            .line_count(inner_width);
        u16::try_from(lines.saturating_sub(inner_height)).unwrap_or(u16::MAX)
    }

    fn layout(&self, area: Rect) -> Layout {
        Layout::new(area, self.show_status_bar, self.show_footer)
    }
}
