//! Event handler for processing input events.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, Store, Tab};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;

use super::InputEvent;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// How long to wait for input before emitting a tick.
    tick_rate: Duration,
    /// Store reference for state-aware handling.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone, Copy)]
struct StoreSnapshot {
    current_tab: Tab,
    strategy_count: usize,
    show_help: bool,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(keybindings: KeyBindings, tick_rate: Duration) -> Self {
        Self {
            keybindings,
            tick_rate,
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = Some(StoreSnapshot {
            current_tab: store.app.current_tab,
            strategy_count: store.carousel.count(),
            show_help: store.app.show_help,
        });
    }

    /// Get the next action from user input.
    ///
    /// Returns [`Action::Tick`] when no input arrives within the tick rate.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if !event::poll(self.tick_rate)? {
            return Ok(Some(Action::Tick));
        }

        let action = match event::read()? {
            CrosstermEvent::Key(key) => self.handle_key(key),
            CrosstermEvent::Mouse(mouse) => self.handle_mouse(mouse),
            // Terminal will automatically redraw
            _ => None,
        };
        Ok(action)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot?;
        let input = InputEvent::from(key);

        // Global shortcuts
        if input.matches(&self.keybindings.quit) || input.matches("Ctrl+c") {
            return Some(Action::Quit);
        }
        if input.matches(&self.keybindings.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&self.keybindings.back) {
            return Some(Action::Back);
        }

        // Tab switching
        if input.matches(&self.keybindings.quant_tab) {
            return Some(Action::SelectTab(Tab::Quant));
        }
        if input.matches(&self.keybindings.content_tab) {
            return Some(Action::SelectTab(Tab::Content));
        }
        if input.matches(&self.keybindings.next_tab) || key.code == KeyCode::BackTab {
            return Some(Action::ToggleTab);
        }

        if snapshot.show_help {
            return None;
        }

        if let Some(action) = self.handle_scroll(key, &input) {
            return Some(action);
        }

        match snapshot.current_tab {
            Tab::Quant => None,
            Tab::Content => self.handle_content_tab(key, &input, snapshot),
        }
    }

    fn handle_scroll(&self, key: KeyEvent, input: &InputEvent) -> Option<Action> {
        if input.matches(&self.keybindings.up) || key.code == KeyCode::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&self.keybindings.down) || key.code == KeyCode::Down {
            return Some(Action::ScrollDown);
        }
        if input.matches(&self.keybindings.top) || key.code == KeyCode::Home {
            return Some(Action::GoToTop);
        }
        if input.matches(&self.keybindings.bottom) || key.code == KeyCode::End {
            return Some(Action::GoToBottom);
        }

        match key.code {
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            _ => None,
        }
    }

    fn handle_content_tab(
        &self,
        key: KeyEvent,
        input: &InputEvent,
        snapshot: StoreSnapshot,
    ) -> Option<Action> {
        if input.matches(&self.keybindings.prev_strategy) || key.code == KeyCode::Left {
            return Some(Action::PreviousStrategy);
        }
        if input.matches(&self.keybindings.next_strategy) || key.code == KeyCode::Right {
            return Some(Action::NextStrategy);
        }

        // Number keys pick a strategy directly, like the indicator dots.
        input
            .digit()
            .filter(|digit| *digit <= snapshot.strategy_count)
            .map(|digit| Action::JumpToStrategy(digit - 1))
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn handler(tab: Tab, strategy_count: usize, show_help: bool) -> EventHandler {
        let mut handler = EventHandler::new(KeyBindings::default(), Duration::from_millis(10));
        handler.store_snapshot = Some(StoreSnapshot {
            current_tab: tab,
            strategy_count,
            show_help,
        });
        handler
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_no_snapshot_no_action() {
        let handler = EventHandler::new(KeyBindings::default(), Duration::from_millis(10));
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_global_keys() {
        let h = handler(Tab::Quant, 4, false);
        assert_eq!(h.handle_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            h.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(h.handle_key(key(KeyCode::Char('?'))), Some(Action::ToggleHelp));
        assert_eq!(h.handle_key(key(KeyCode::Esc)), Some(Action::Back));
        assert_eq!(
            h.handle_key(key(KeyCode::F(2))),
            Some(Action::SelectTab(Tab::Content))
        );
        assert_eq!(
            h.handle_key(key(KeyCode::F(1))),
            Some(Action::SelectTab(Tab::Quant))
        );
        assert_eq!(h.handle_key(key(KeyCode::Tab)), Some(Action::ToggleTab));
    }

    #[test]
    fn test_scroll_keys() {
        let h = handler(Tab::Quant, 4, false);
        assert_eq!(h.handle_key(key(KeyCode::Char('j'))), Some(Action::ScrollDown));
        assert_eq!(h.handle_key(key(KeyCode::Up)), Some(Action::ScrollUp));
        assert_eq!(h.handle_key(key(KeyCode::PageDown)), Some(Action::PageDown));
        assert_eq!(h.handle_key(key(KeyCode::Char('g'))), Some(Action::GoToTop));
        assert_eq!(
            h.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(Action::GoToBottom)
        );
    }

    #[test]
    fn test_carousel_keys_only_on_content_tab() {
        let quant = handler(Tab::Quant, 4, false);
        assert_eq!(quant.handle_key(key(KeyCode::Right)), None);
        assert_eq!(quant.handle_key(key(KeyCode::Char('2'))), None);

        let content = handler(Tab::Content, 4, false);
        assert_eq!(content.handle_key(key(KeyCode::Right)), Some(Action::NextStrategy));
        assert_eq!(
            content.handle_key(key(KeyCode::Char('h'))),
            Some(Action::PreviousStrategy)
        );
        assert_eq!(
            content.handle_key(key(KeyCode::Char('2'))),
            Some(Action::JumpToStrategy(1))
        );
    }

    #[test]
    fn test_digit_beyond_strategy_count_ignored() {
        let h = handler(Tab::Content, 3, false);
        assert_eq!(h.handle_key(key(KeyCode::Char('3'))), Some(Action::JumpToStrategy(2)));
        assert_eq!(h.handle_key(key(KeyCode::Char('4'))), None);
    }

    #[test]
    fn test_help_overlay_blocks_navigation() {
        let h = handler(Tab::Content, 4, true);
        assert_eq!(h.handle_key(key(KeyCode::Right)), None);
        assert_eq!(h.handle_key(key(KeyCode::Char('j'))), None);
        assert_eq!(h.handle_key(key(KeyCode::Esc)), Some(Action::Back));
    }

    #[test]
    fn test_release_events_ignored() {
        let h = handler(Tab::Quant, 4, false);
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(h.handle_key(release), None);
    }
}
