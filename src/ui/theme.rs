//! Colors and text styles.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeConfig;

/// Resolved theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub muted: Color,
    pub foreground: Color,
    pub border: Color,
    pub dark_panel: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    /// Parse the configured hex colors, falling back per color on bad input.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            primary: parse_color("primary", &config.primary, Color::Indexed(63)),
            accent: parse_color("accent", &config.accent, Color::Magenta),
            success: parse_color("success", &config.success, Color::Green),
            warning: parse_color("warning", &config.warning, Color::Yellow),
            muted: parse_color("muted", &config.muted, Color::Gray),
            foreground: parse_color("foreground", &config.foreground, Color::White),
            border: parse_color("border", &config.border, Color::DarkGray),
            dark_panel: parse_color("dark_panel", &config.dark_panel, Color::Black),
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Small uppercase caption above a value.
    pub fn caption(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style patched over emphasised segments.
    pub fn emphasis(&self, variant: Emphasis) -> Style {
        match variant {
            Emphasis::OnDark => Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(71, 85, 105))
                .add_modifier(Modifier::BOLD),
            Emphasis::OnLight => Style::default()
                .fg(self.foreground)
                .bg(Color::Rgb(49, 46, 129))
                .add_modifier(Modifier::BOLD),
            Emphasis::Accent(color) => Style::default().fg(color).add_modifier(Modifier::BOLD),
        }
    }
}

/// How emphasised text stands out from its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Inside dark hero panels (strategy cards, proposal).
    OnDark,
    /// Inside regular report cards.
    OnLight,
    /// A themed highlight color (executive summary cards).
    Accent(Color),
}

/// Badge palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Indigo,
    Emerald,
    Amber,
    Slate,
    Purple,
    Gray,
}

impl BadgeColor {
    /// Foreground and background of the badge.
    pub fn colors(self) -> (Color, Color) {
        match self {
            Self::Indigo => (Color::Rgb(199, 210, 254), Color::Rgb(55, 48, 163)),
            Self::Emerald => (Color::Rgb(167, 243, 208), Color::Rgb(6, 95, 70)),
            Self::Amber => (Color::Rgb(253, 230, 138), Color::Rgb(146, 64, 14)),
            Self::Slate => (Color::Rgb(226, 232, 240), Color::Rgb(51, 65, 85)),
            Self::Purple => (Color::Rgb(233, 213, 255), Color::Rgb(107, 33, 168)),
            Self::Gray => (Color::Rgb(229, 231, 235), Color::Rgb(75, 85, 99)),
        }
    }

    pub fn style(self) -> Style {
        let (fg, bg) = self.colors();
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
    }
}

/// Accent colors cycled by the strategy carousel.
pub const CAROUSEL_ACCENTS: [Color; 4] = [
    Color::Rgb(148, 163, 184),
    Color::Rgb(129, 140, 248),
    Color::Rgb(52, 211, 153),
    Color::Rgb(251, 113, 133),
];

/// Accent colors cycled by executive-summary cards.
pub const SUMMARY_ACCENTS: [Color; 3] = [
    Color::Rgb(165, 180, 252),
    Color::Rgb(110, 231, 183),
    Color::Rgb(253, 164, 175),
];

fn parse_color(name: &str, value: &str, fallback: Color) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        tracing::warn!(color = name, value, "Invalid theme color, using fallback");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors_parse() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Rgb(0x63, 0x66, 0xf1));
        assert_eq!(theme.dark_panel, Color::Rgb(0x0f, 0x17, 0x2a));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let config = ThemeConfig {
            warning: "not-a-color".to_string(),
            ..Default::default()
        };
        assert_eq!(Theme::from_config(&config).warning, Color::Yellow);
    }

    #[test]
    fn test_named_colors_accepted() {
        let config = ThemeConfig {
            primary: "cyan".to_string(),
            ..Default::default()
        };
        assert_eq!(Theme::from_config(&config).primary, Color::Cyan);
    }

    #[test]
    fn test_badge_palettes_are_distinct() {
        let badges = [
            BadgeColor::Indigo,
            BadgeColor::Emerald,
            BadgeColor::Amber,
            BadgeColor::Slate,
            BadgeColor::Purple,
            BadgeColor::Gray,
        ];
        for (i, a) in badges.iter().enumerate() {
            assert!(a.style().add_modifier.contains(Modifier::BOLD));
            for b in &badges[i + 1..] {
                assert_ne!(a.colors().1, b.colors().1, "{a:?} and {b:?} share a background");
            }
        }
    }
}
