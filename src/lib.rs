//! # Celebeauty - Creator Intelligence Dashboard
//!
//! A terminal dashboard that presents a creator-channel analysis report as
//! two tabs: fandom metrics and content strategy. Built with ratatui.
//!
//! ## Architecture
//!
//! - **Report**: Serde model of the report JSON, loading and validation
//! - **Normalize**: Fallback chains resolving renamed report fields
//! - **Markup**: Inline `**emphasis**`, scenario and funnel parsing
//! - **State**: Centralized store, actions and the strategy carousel
//! - **UI**: Layout, theme and dashboard rendering
//! - **Events**: Input handling and key bindings
//! - **Config**: Configuration management
//! - **App**: Terminal lifecycle and the event loop

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod markup;
pub mod normalize;
pub mod report;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use report::{Report, ReportSource};
pub use state::{Action, Store, Tab};
