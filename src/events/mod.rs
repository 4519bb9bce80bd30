//! Event handling for the dashboard.
//!
//! Terminal input is turned into [`crate::state::Action`]s through the
//! configured key bindings.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};
