//! Application-level state.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::Notification;

/// The dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Fandom metrics analysis.
    #[default]
    Quant,
    /// Channel content strategy analysis.
    Content,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Quant, Tab::Content];

    /// The other tab.
    pub fn toggled(self) -> Self {
        match self {
            Self::Quant => Self::Content,
            Self::Content => Self::Quant,
        }
    }

    /// Tab caption.
    pub fn title(self) -> &'static str {
        match self {
            Self::Quant => "팬덤 지표 분석",
            Self::Content => "채널 핵심 콘텐츠 분석",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quant => write!(f, "Quant"),
            Self::Content => write!(f, "Content"),
        }
    }
}

/// Vertical scroll position of one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// First visible line.
    pub offset: u16,
    /// Largest useful offset for the current viewport.
    pub max: u16,
}

impl ScrollState {
    /// Move by `delta` lines within `0..=max`.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max));
        self.offset = next as u16;
    }

    /// Update the limit and pull the offset back inside it.
    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max;
    }
}

/// A notification on screen and when it appeared.
#[derive(Debug, Clone)]
pub struct ActiveNotification {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl ActiveNotification {
    /// Whether the notification has outlived its duration at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at)
            >= Duration::from_secs(self.notification.duration_secs)
    }
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Active tab.
    pub current_tab: Tab,
    /// Scroll position of the quant tab.
    pub quant_scroll: ScrollState,
    /// Scroll position of the content tab.
    pub content_scroll: ScrollState,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<ActiveNotification>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create application state starting on `tab`.
    pub fn new(tab: Tab) -> Self {
        Self {
            current_tab: tab,
            ..Default::default()
        }
    }

    /// Scroll state of the active tab.
    pub fn scroll(&self) -> &ScrollState {
        match self.current_tab {
            Tab::Quant => &self.quant_scroll,
            Tab::Content => &self.content_scroll,
        }
    }

    /// Mutable scroll state of the active tab.
    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        match self.current_tab {
            Tab::Quant => &mut self.quant_scroll,
            Tab::Content => &mut self.content_scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_toggle() {
        assert_eq!(Tab::Quant.toggled(), Tab::Content);
        assert_eq!(Tab::Content.toggled(), Tab::Quant);
    }

    #[test]
    fn test_scroll_clamps() {
        let mut scroll = ScrollState::default();
        scroll.set_max(10);
        scroll.scroll_by(-3);
        assert_eq!(scroll.offset, 0);
        scroll.scroll_by(25);
        assert_eq!(scroll.offset, 10);
        scroll.set_max(4);
        assert_eq!(scroll.offset, 4);
        scroll.to_top();
        assert_eq!(scroll.offset, 0);
        scroll.to_bottom();
        assert_eq!(scroll.offset, 4);
    }

    #[test]
    fn test_scroll_is_per_tab() {
        let mut state = AppState::new(Tab::Quant);
        state.quant_scroll.set_max(20);
        state.content_scroll.set_max(20);
        state.scroll_mut().scroll_by(5);
        state.current_tab = Tab::Content;
        assert_eq!(state.scroll().offset, 0);
        state.current_tab = Tab::Quant;
        assert_eq!(state.scroll().offset, 5);
    }

    #[test]
    fn test_notification_expiry() {
        let shown_at = Instant::now();
        let active = ActiveNotification {
            notification: Notification::info("hi"),
            shown_at,
        };
        assert!(!active.is_expired(shown_at));
        assert!(active.is_expired(shown_at + Duration::from_secs(3)));
    }
}
