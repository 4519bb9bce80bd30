//! State management for the dashboard.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture. The report itself
//! is immutable; the only mutable state is which tab is shown, where each
//! tab is scrolled, the carousel cursor and transient overlays.

mod app_state;
mod carousel;

pub use app_state::{ActiveNotification, AppState, ScrollState, Tab};
pub use carousel::Carousel;

use std::sync::Arc;
use std::time::Instant;

use crate::error::Result;
use crate::report::{Report, StrategyDetail};
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    SelectTab(Tab),
    ToggleTab,

    // Carousel
    NextStrategy,
    PreviousStrategy,
    JumpToStrategy(usize),

    // Scrolling
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    SetScrollLimit { tab: Tab, max: u16 },

    // UI actions
    ToggleHelp,
    Back,
    ShowNotification(Notification),
    Tick,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration_secs: 3,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            duration_secs: 5,
        }
    }
}

/// Behaviour switches the store takes from configuration.
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    /// Tab shown at startup.
    pub initial_tab: Tab,
    /// Send the carousel back to the first strategy when leaving the
    /// content tab.
    pub reset_carousel_on_tab_switch: bool,
    /// Lines moved by PageUp/PageDown.
    pub scroll_page: u16,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            initial_tab: Tab::Quant,
            reset_carousel_on_tab_switch: false,
            scroll_page: 10,
        }
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Strategy carousel position.
    pub carousel: Carousel,
    /// The loaded report, shared read-only.
    report: Arc<Report>,
    options: StoreOptions,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store for `report`.
    ///
    /// Fails if the report has no strategies to put in the carousel.
    pub fn new(
        report: Arc<Report>,
        options: StoreOptions,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Result<Self> {
        let carousel = Carousel::with_len(report.strategy_count())?;
        Ok(Self {
            app: AppState::new(options.initial_tab),
            carousel,
            report,
            options,
            action_tx,
        })
    }

    /// The loaded report.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// The strategy under the carousel cursor.
    pub fn active_strategy(&self) -> &StrategyDetail {
        // The carousel length equals the strategy count and never changes.
        &self.report.content.strategies[self.carousel.cursor()]
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        tracing::debug!(?action, "reduce");

        match action {
            // Navigation
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::ToggleTab => self.select_tab(self.app.current_tab.toggled()),

            // Carousel
            Action::NextStrategy => self.carousel.next(),
            Action::PreviousStrategy => self.carousel.previous(),
            Action::JumpToStrategy(index) => {
                if let Err(e) = self.carousel.jump_to(index) {
                    tracing::warn!("Rejected carousel jump: {}", e);
                    self.show_notification(Notification::warning(e.to_string()));
                }
            }

            // Scrolling
            Action::ScrollUp => self.app.scroll_mut().scroll_by(-1),
            Action::ScrollDown => self.app.scroll_mut().scroll_by(1),
            Action::PageUp => self
                .app
                .scroll_mut()
                .scroll_by(-i32::from(self.options.scroll_page)),
            Action::PageDown => self
                .app
                .scroll_mut()
                .scroll_by(i32::from(self.options.scroll_page)),
            Action::GoToTop => self.app.scroll_mut().to_top(),
            Action::GoToBottom => self.app.scroll_mut().to_bottom(),
            Action::SetScrollLimit { tab, max } => match tab {
                Tab::Quant => self.app.quant_scroll.set_max(max),
                Tab::Content => self.app.content_scroll.set_max(max),
            },

            // UI actions
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::Back => {
                if self.app.show_help {
                    self.app.show_help = false;
                } else {
                    self.app.notification = None;
                }
            }
            Action::ShowNotification(notification) => self.show_notification(notification),
            Action::Tick => self.expire_notification(Instant::now()),

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    fn select_tab(&mut self, tab: Tab) {
        let leaving = self.app.current_tab;
        if leaving == tab {
            return;
        }
        if leaving == Tab::Content && self.options.reset_carousel_on_tab_switch {
            self.carousel.reset();
        }
        self.app.current_tab = tab;
    }

    fn show_notification(&mut self, notification: Notification) {
        self.app.notification = Some(ActiveNotification {
            notification,
            shown_at: Instant::now(),
        });
    }

    /// Drop the notification if it has expired at `now`.
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .app
            .notification
            .as_ref()
            .is_some_and(|active| active.is_expired(now))
        {
            self.app.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn report() -> Arc<Report> {
        Arc::new(crate::report::ReportSource::Bundled.load().unwrap())
    }

    fn store_with(options: StoreOptions) -> (Store, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Store::new(report(), options, tx).unwrap(), rx)
    }

    fn store() -> Store {
        store_with(StoreOptions::default()).0
    }

    #[test]
    fn test_empty_report_rejected() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let result = Store::new(Arc::new(Report::default()), StoreOptions::default(), tx);
        assert!(result.is_err());
    }

    #[test]
    fn test_initial_tab_from_options() {
        let (store, _rx) = store_with(StoreOptions {
            initial_tab: Tab::Content,
            ..Default::default()
        });
        assert_eq!(store.app.current_tab, Tab::Content);
    }

    #[test]
    fn test_carousel_actions() {
        let mut store = store();
        let len = store.carousel.count();

        store.reduce(Action::NextStrategy);
        assert_eq!(store.carousel.cursor(), 1);
        store.reduce(Action::PreviousStrategy);
        store.reduce(Action::PreviousStrategy);
        assert_eq!(store.carousel.cursor(), len - 1);
        store.reduce(Action::JumpToStrategy(0));
        assert_eq!(store.carousel.cursor(), 0);
    }

    #[test]
    fn test_active_strategy_follows_cursor() {
        let mut store = store();
        store.reduce(Action::JumpToStrategy(2));
        assert_eq!(store.active_strategy().name.as_deref(), Some("Ask Unnie: Comment Clinic"));
    }

    #[test]
    fn test_out_of_range_jump_warns_and_keeps_cursor() {
        let mut store = store();
        store.reduce(Action::JumpToStrategy(1));
        store.reduce(Action::JumpToStrategy(99));
        assert_eq!(store.carousel.cursor(), 1);

        let active = store.app.notification.as_ref().unwrap();
        assert_eq!(active.notification.level, NotificationLevel::Warning);
    }

    #[test]
    fn test_tab_switch_preserves_cursor_by_default() {
        let mut store = store();
        store.reduce(Action::SelectTab(Tab::Content));
        store.reduce(Action::NextStrategy);
        store.reduce(Action::NextStrategy);

        store.reduce(Action::SelectTab(Tab::Quant));
        store.reduce(Action::SelectTab(Tab::Content));
        assert_eq!(store.carousel.cursor(), 2);
    }

    #[test]
    fn test_tab_switch_resets_cursor_when_configured() {
        let (mut store, _rx) = store_with(StoreOptions {
            reset_carousel_on_tab_switch: true,
            ..Default::default()
        });
        store.reduce(Action::SelectTab(Tab::Content));
        store.reduce(Action::NextStrategy);
        assert_eq!(store.carousel.cursor(), 1);

        // Re-selecting the same tab is not a switch.
        store.reduce(Action::SelectTab(Tab::Content));
        assert_eq!(store.carousel.cursor(), 1);

        store.reduce(Action::ToggleTab);
        assert_eq!(store.app.current_tab, Tab::Quant);
        assert_eq!(store.carousel.cursor(), 0);
    }

    #[test]
    fn test_scroll_is_kept_per_tab() {
        let mut store = store();
        store.reduce(Action::SetScrollLimit {
            tab: Tab::Quant,
            max: 50,
        });
        store.reduce(Action::SetScrollLimit {
            tab: Tab::Content,
            max: 50,
        });
        store.reduce(Action::PageDown);
        store.reduce(Action::ScrollDown);
        assert_eq!(store.app.scroll().offset, 11);

        store.reduce(Action::ToggleTab);
        assert_eq!(store.app.scroll().offset, 0);
        store.reduce(Action::GoToBottom);
        assert_eq!(store.app.scroll().offset, 50);

        store.reduce(Action::ToggleTab);
        assert_eq!(store.app.scroll().offset, 11);
        store.reduce(Action::GoToTop);
        assert_eq!(store.app.scroll().offset, 0);
    }

    #[test]
    fn test_scroll_without_limit_stays_at_zero() {
        let mut store = store();
        store.reduce(Action::ScrollDown);
        assert_eq!(store.app.scroll().offset, 0);
    }

    #[test]
    fn test_back_closes_overlays_in_order() {
        let mut store = store();
        store.reduce(Action::ToggleHelp);
        store.reduce(Action::ShowNotification(Notification::info("hi")));

        store.reduce(Action::Back);
        assert!(!store.app.show_help);
        assert!(store.app.notification.is_some());

        store.reduce(Action::Back);
        assert!(store.app.notification.is_none());
    }

    #[test]
    fn test_notification_expires() {
        let mut store = store();
        store.reduce(Action::ShowNotification(Notification::info("loaded")));
        let shown_at = store.app.notification.as_ref().unwrap().shown_at;

        store.expire_notification(shown_at + Duration::from_secs(1));
        assert!(store.app.notification.is_some());

        store.expire_notification(shown_at + Duration::from_secs(4));
        assert!(store.app.notification.is_none());
    }

    #[test]
    fn test_dispatch_sends_to_channel() {
        let (store, mut rx) = store_with(StoreOptions::default());
        store.dispatch(Action::Quit).unwrap();
        assert_eq!(rx.try_recv().unwrap(), Action::Quit);
    }

    #[test]
    fn test_quit() {
        let mut store = store();
        store.reduce(Action::Quit);
        assert!(store.app.should_quit);
    }
}
