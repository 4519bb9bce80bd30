//! Configuration settings for the dashboard.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::state::{StoreOptions, Tab};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report source configuration.
    pub report: ReportConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Theme configuration.
    pub theme: ThemeConfig,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(Self::default_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))?;
            tracing::info!(path = %config_path.display(), "Loaded configuration");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    fn default_path() -> PathBuf {
        super::config_dir()
            .map(|p| p.join("config.toml"))
            .unwrap_or_else(|_| PathBuf::from("config.toml"))
    }

    /// Store behaviour derived from the UI settings.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            initial_tab: self.ui.initial_tab,
            reset_carousel_on_tab_switch: self.ui.reset_carousel_on_tab_switch,
            scroll_page: self.ui.scroll_page,
        }
    }
}

/// Report source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path to the report JSON. The bundled sample is used when unset.
    pub data_path: Option<PathBuf>,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval in milliseconds; also drives notification expiry.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Show status bar.
    pub show_status_bar: bool,
    /// Show the confidentiality footer.
    pub show_footer: bool,
    /// Tab shown at startup.
    pub initial_tab: Tab,
    /// Return the carousel to the first strategy when leaving the content tab.
    pub reset_carousel_on_tab_switch: bool,
    /// Lines moved by PageUp/PageDown.
    pub scroll_page: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_support: true,
            show_status_bar: true,
            show_footer: true,
            initial_tab: Tab::Quant,
            reset_carousel_on_tab_switch: false,
            scroll_page: 10,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Switch to the quant tab.
    pub quant_tab: String,
    /// Switch to the content tab.
    pub content_tab: String,
    /// Cycle tabs.
    pub next_tab: String,
    /// Scroll up.
    pub up: String,
    /// Scroll down.
    pub down: String,
    /// Previous strategy.
    pub prev_strategy: String,
    /// Next strategy.
    pub next_strategy: String,
    /// Scroll to top.
    pub top: String,
    /// Scroll to bottom.
    pub bottom: String,
    /// Close overlays.
    pub back: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            quant_tab: "F1".to_string(),
            content_tab: "F2".to_string(),
            next_tab: "Tab".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            prev_strategy: "h".to_string(),
            next_strategy: "l".to_string(),
            top: "g".to_string(),
            bottom: "Shift+g".to_string(),
            back: "Esc".to_string(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Primary color (hex).
    pub primary: String,
    /// Accent color (hex).
    pub accent: String,
    /// Success color (hex).
    pub success: String,
    /// Warning color (hex).
    pub warning: String,
    /// Secondary text color (hex).
    pub muted: String,
    /// Foreground/text color (hex).
    pub foreground: String,
    /// Border color (hex).
    pub border: String,
    /// Background of dark hero panels (hex).
    pub dark_panel: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#6366f1".to_string(),
            accent: "#a855f7".to_string(),
            success: "#34d399".to_string(),
            warning: "#facc15".to_string(),
            muted: "#94a3b8".to_string(),
            foreground: "#e2e8f0".to_string(),
            border: "#475569".to_string(),
            dark_panel: "#0f172a".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert!(config.report.data_path.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[ui]\ninitial_tab = \"content\"\nreset_carousel_on_tab_switch = true\n\n[report]\ndata_path = \"/tmp/report.json\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.ui.initial_tab, Tab::Content);
        assert!(config.ui.reset_carousel_on_tab_switch);
        assert_eq!(config.ui.scroll_page, 10);
        assert_eq!(
            config.report.data_path,
            Some(PathBuf::from("/tmp/report.json"))
        );
        assert_eq!(config.keybindings.quit, "q");

        let options = config.store_options();
        assert_eq!(options.initial_tab, Tab::Content);
        assert!(options.reset_carousel_on_tab_switch);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\ntick_rate_ms = ").unwrap();
        let err = Config::load(Some(path)).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
