//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::report::{Report, ReportSource};
use crate::state::{Action, Notification, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Renderer.
    ui: Ui,
    mouse_support: bool,
}

impl App {
    /// Create a new application showing `report`.
    pub fn new(config: &Config, report: Report, source: &ReportSource) -> Result<Self> {
        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store before touching the terminal so a bad report leaves
        // the screen intact
        let store = Store::new(Arc::new(report), config.store_options(), action_tx)?;
        store.dispatch(Action::ShowNotification(Notification::info(format!(
            "Loaded report: {source}"
        ))))?;

        let event_handler = EventHandler::new(
            config.keybindings.clone(),
            Duration::from_millis(config.ui.tick_rate_ms),
        );

        // Set up terminal, undoing raw mode if a later step fails
        let mouse_support = config.ui.mouse_support;
        enable_raw_mode()?;
        let terminal = restore_on_error(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                if mouse_support {
                    execute!(stdout, EnableMouseCapture)?;
                }
                Ok(Terminal::new(CrosstermBackend::new(stdout))?)
            },
            || restore_terminal(&mut io::stdout(), mouse_support),
        )?;

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            ui: Ui::new(config),
            mouse_support,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!(tab = %self.store.app.current_tab, "Dashboard started");

        // Main event loop
        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Clamp scrolling to what the current viewport can show
            let size = self.terminal.size()?;
            let max = self
                .ui
                .scroll_limit(&self.store, Rect::new(0, 0, size.width, size.height));
            self.store.reduce(Action::SetScrollLimit {
                tab: self.store.app.current_tab,
                max,
            });

            // Render UI
            let ui = &self.ui;
            let store = &self.store;
            self.terminal.draw(|frame| ui.render(frame, store))?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.store.reduce(action);
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.store.reduce(action);
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        tracing::info!("Dashboard closed");
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        restore_terminal(self.terminal.backend_mut(), self.mouse_support);
        let _ = self.terminal.show_cursor();
    }
}

/// Leave raw mode and the alternate screen. Errors are ignored since this
/// runs on the way out.
fn restore_terminal<W: Write>(out: &mut W, mouse_support: bool) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen);
    if mouse_support {
        let _ = execute!(out, DisableMouseCapture);
    }
}

/// Run `setup`, calling `restore` only if it fails.
fn restore_on_error<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| restore())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = restore_on_error(
            || Err(Error::Io(io::Error::other("no tty"))),
            || restored.set(true),
        );

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = Cell::new(false);
        let value = restore_on_error(|| Ok(7), || restored.set(true)).unwrap();

        assert_eq!(value, 7);
        assert!(!restored.get());
    }
}
