//! TUI widgets.

mod help;
mod notifications;
mod quant_dashboard;
mod status_bar;
mod strategy_carousel;
mod strategy_dashboard;
mod tab_bar;
pub(crate) mod text;

pub use help::HelpPanel;
pub use notifications::render_notification;
pub use quant_dashboard::QuantDashboard;
pub use status_bar::{Footer, StatusBar};
pub use strategy_carousel::StrategyCarousel;
pub use strategy_dashboard::StrategyDashboard;
pub use tab_bar::TabBar;
