//! One-at-a-time strategy card viewer.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::config::KeyBindings;
use crate::markup::{headline, scenario_beats};
use crate::normalize::fields;
use crate::report::StrategyDetail;
use crate::state::Carousel;
use crate::ui::theme::{BadgeColor, CAROUSEL_ACCENTS, Emphasis, Theme};

use super::text::{badge, blank, caption, emphasized_line};

/// Renders the strategy under the carousel cursor plus its position dots.
pub struct StrategyCarousel;

impl StrategyCarousel {
    pub fn lines<'a>(
        strategies: &'a [StrategyDetail],
        carousel: &Carousel,
        keys: &KeyBindings,
        theme: &Theme,
    ) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        let cursor = carousel.cursor();

        lines.push(Line::from(vec![
            Span::styled("▍", Style::default().fg(theme.primary)),
            Span::styled("Core Strategies (Deep Dive Analysis)", theme.section_title()),
            Span::styled(
                format!("   {} / {}", cursor + 1, carousel.count()),
                theme.muted(),
            ),
        ]));
        lines.push(Line::styled(
            format!(
                "  ◀ {} / {} ▶ to browse, 1-9 to jump",
                keys.prev_strategy, keys.next_strategy
            ),
            theme.muted(),
        ));
        lines.push(blank());

        let Some(strategy) = strategies.get(cursor) else {
            return lines;
        };
        Self::card(&mut lines, strategy, cursor, theme);
        lines.push(Self::dots(carousel, theme));
        lines
    }

    fn card<'a>(lines: &mut Vec<Line<'a>>, strategy: &'a StrategyDetail, index: usize, theme: &Theme) {
        let accent = CAROUSEL_ACCENTS[index % CAROUSEL_ACCENTS.len()];
        let on_panel = Style::default().fg(theme.foreground).bg(theme.dark_panel);

        lines.push(Line::from(vec![
            Span::raw("  "),
            badge(&format!("Strategy 0{}", index + 1), BadgeColor::Gray),
            Span::raw(" "),
            Span::styled(strategy.persona.label.as_str(), theme.muted()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                headline(fields::STRATEGY_TITLE.resolve(strategy)),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]));
        let definition = fields::STRATEGY_DEFINITION.resolve(strategy);
        if !definition.is_empty() {
            lines.push(Line::styled(
                format!("  \"{definition}\""),
                theme.muted().add_modifier(Modifier::ITALIC),
            ));
        }
        lines.push(blank());

        lines.push(caption("  ", "The Logic (Why it works)", Style::default().fg(accent)));
        lines.push(caption("  ● ", "Persona Fit", theme.muted()));
        lines.push(emphasized_line(
            "    ",
            &strategy.persona.desc,
            on_panel,
            Emphasis::OnDark,
            theme,
        ));
        lines.push(caption("  ● ", "Data Evidence", theme.muted()));
        lines.push(emphasized_line(
            "    ",
            fields::STRATEGY_EVIDENCE.resolve(strategy),
            on_panel,
            Emphasis::OnDark,
            theme,
        ));
        lines.push(blank());

        lines.push(caption("  ", "Recommended Item", theme.muted()));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(fields::STRATEGY_ITEM_NAME.resolve(strategy), theme.heading()),
        ]));
        let spec = fields::STRATEGY_ITEM_SPEC.resolve(strategy);
        if !spec.is_empty() {
            lines.push(Line::styled(format!("  {spec}"), theme.muted()));
        }
        lines.push(blank());

        let beats = scenario_beats(fields::STRATEGY_SCENARIO.resolve(strategy));
        if !beats.is_empty() {
            lines.push(caption("  ", "Content Scenario", Style::default().fg(accent)));
            for beat in beats {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", beat.label),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(emphasized_line(
                    "    ",
                    beat.content,
                    theme.text(),
                    Emphasis::OnDark,
                    theme,
                ));
            }
            lines.push(blank());
        }
    }

    fn dots(carousel: &Carousel, theme: &Theme) -> Line<'static> {
        let mut spans = vec![Span::raw("  ")];
        for i in 0..carousel.count() {
            if carousel.is_active(i) {
                spans.push(Span::styled("● ", Style::default().fg(theme.primary)));
            } else {
                spans.push(Span::styled("○ ", theme.muted()));
            }
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportSource;
    use crate::ui::widgets::text::line_text;

    fn render(cursor: usize) -> Vec<String> {
        let report = ReportSource::Bundled.load().unwrap();
        let strategies = report.content.strategies.clone();
        let mut carousel = Carousel::with_len(strategies.len()).unwrap();
        carousel.jump_to(cursor).unwrap();
        StrategyCarousel::lines(&strategies, &carousel, &KeyBindings::default(), &Theme::default())
            .iter()
            .map(line_text)
            .collect()
    }

    #[test]
    fn test_first_strategy_card() {
        let lines = render(0);
        assert!(lines.iter().any(|l| l.contains("1 / 4")));
        assert!(lines.iter().any(|l| l.contains(" STRATEGY 01 ")));
        // annotation in the title is cut
        assert!(lines.iter().any(|l| l.trim_end() == "  The 7-Day Honest Test"));
        assert!(lines.iter().any(|l| l.contains("[Hook]")));
        assert!(lines.iter().any(|l| l.contains("[Payoff]")));
        assert!(lines.iter().any(|l| l.contains("Ceramide 3%")));
        assert_eq!(lines.last().unwrap(), "  ● ○ ○ ○ ");
    }

    #[test]
    fn test_legacy_strategy_fields() {
        let lines = render(2);
        assert!(lines.iter().any(|l| l.contains("Ask Unnie: Comment Clinic")));
        assert!(lines.iter().any(|l| l.contains("\"Your questions, answered on camera.\"")));
        assert!(lines.iter().any(|l| l.contains("Rotating viewer-requested products")));
        assert!(lines.iter().any(|l| l.contains("pull 23% of viewers")));
        // no concept detail, no scenario section
        assert!(!lines.iter().any(|l| l.contains("CONTENT SCENARIO")));
        assert_eq!(lines.last().unwrap(), "  ○ ○ ● ○ ");
    }

    #[test]
    fn test_scenario_capped_at_two_beats() {
        let lines = render(1);
        assert!(lines.iter().any(|l| l.contains("[Setup]")));
        assert!(lines.iter().any(|l| l.contains("[Routine]")));
        assert!(!lines.iter().any(|l| l.contains("[Outro]")));
    }

    #[test]
    fn test_browse_hint_follows_keybindings() {
        let report = ReportSource::Bundled.load().unwrap();
        let strategies = &report.content.strategies;
        let carousel = Carousel::with_len(strategies.len()).unwrap();
        let keys = KeyBindings {
            next_strategy: "n".to_string(),
            ..KeyBindings::default()
        };

        let lines: Vec<String> = StrategyCarousel::lines(strategies, &carousel, &keys, &Theme::default())
            .iter()
            .map(line_text)
            .collect();
        assert!(lines.iter().any(|l| l.contains("◀ h / n ▶ to browse")));
        assert!(!lines.iter().any(|l| l.contains("h / l")));
    }

    #[test]
    fn test_accent_cycles_with_cursor() {
        let report = ReportSource::Bundled.load().unwrap();
        let strategies = &report.content.strategies;
        let theme = Theme::default();
        let mut carousel = Carousel::with_len(strategies.len()).unwrap();
        carousel.jump_to(3).unwrap();

        let lines = StrategyCarousel::lines(strategies, &carousel, &KeyBindings::default(), &theme);
        let title = lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .find(|span| span.content == "Night Reset Bundle")
            .unwrap();
        assert_eq!(title.style.fg, Some(CAROUSEL_ACCENTS[3]));
    }
}
