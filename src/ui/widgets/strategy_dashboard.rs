//! Content strategy view.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::config::KeyBindings;
use crate::normalize::fields;
use crate::report::ContentReport;
use crate::state::Carousel;
use crate::ui::theme::{BadgeColor, Emphasis, Theme};

use super::strategy_carousel::StrategyCarousel;
use super::text::{badge, blank, caption, emphasized_line, rule, section_title};

/// Renders a [`ContentReport`], with the strategy carousel in the middle.
pub struct StrategyDashboard;

impl StrategyDashboard {
    pub fn text<'a>(
        report: &'a ContentReport,
        carousel: &Carousel,
        keys: &KeyBindings,
        theme: &Theme,
    ) -> Text<'a> {
        let mut lines = Vec::new();
        Self::header(&mut lines, report, theme);
        Self::framework(&mut lines, report, theme);
        Self::requirements(&mut lines, report, theme);
        lines.extend(StrategyCarousel::lines(&report.strategies, carousel, keys, theme));
        lines.push(blank());
        Self::proposal(&mut lines, report, theme);
        Text::from(lines)
    }

    fn header<'a>(lines: &mut Vec<Line<'a>>, report: &'a ContentReport, theme: &Theme) {
        lines.push(Line::from(vec![badge("Strategic Report", BadgeColor::Indigo)]));
        if let Some(title) = report.report_title.as_deref() {
            lines.push(Line::styled(
                title,
                theme.heading().add_modifier(Modifier::UNDERLINED),
            ));
        }
        lines.push(blank());

        let intro = &report.intro;
        lines.push(caption("", "Background", theme.muted()));
        lines.push(emphasized_line(
            "  ",
            fields::INTRO_BACKGROUND.resolve(intro),
            theme.text(),
            Emphasis::OnLight,
            theme,
        ));
        lines.push(caption("", "Objective", theme.muted()));
        lines.push(emphasized_line(
            "  ",
            fields::INTRO_OBJECTIVE.resolve(intro),
            theme.text(),
            Emphasis::OnLight,
            theme,
        ));
        lines.push(blank());
    }

    fn framework<'a>(lines: &mut Vec<Line<'a>>, report: &'a ContentReport, theme: &Theme) {
        lines.push(section_title("Strategic Logic Framework", theme));
        for (i, step) in report.logic_framework.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<5}", fields::logic_step_heading(step, i)),
                    theme.caption().fg(theme.primary),
                ),
                Span::styled(fields::LOGIC_STEP_VALUE.resolve(step), theme.heading()),
            ]));
        }
        lines.push(blank());
    }

    fn requirements<'a>(lines: &mut Vec<Line<'a>>, report: &'a ContentReport, theme: &Theme) {
        let base = &report.base_requirements;

        lines.push(section_title("Base Requirements (Hygiene Factors)", theme));
        lines.push(caption("  ", "Foundation for Success", theme.muted()));
        lines.push(emphasized_line(
            "  ",
            fields::BASE_INTRO.resolve(base),
            theme.text(),
            Emphasis::OnLight,
            theme,
        ));
        lines.push(blank());

        for (i, item) in base.items.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                badge(&format!("Requirement 0{}", i + 1), BadgeColor::Emerald),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(item.title.as_str(), theme.heading()),
            ]));
            lines.push(emphasized_line(
                "  ",
                fields::REQUIREMENT_DESCRIPTION.resolve(item),
                theme.text(),
                Emphasis::OnLight,
                theme,
            ));

            if !item.action_list.is_empty() {
                lines.push(caption("  ", "Mandatory Actions", theme.muted()));
                for action in &item.action_list {
                    lines.push(Line::from(vec![
                        Span::styled("    ✔ ", Style::default().fg(theme.success)),
                        Span::styled(action.as_str(), theme.text()),
                    ]));
                }
            }

            lines.push(caption("  ", "Evidence & Impact", theme.muted()));
            lines.push(Line::from(vec![
                Span::styled("    ▸ ", Style::default().fg(theme.primary)),
                Span::styled(
                    fields::REQUIREMENT_DATA_PROOF.resolve(item),
                    theme.heading().fg(theme.primary),
                ),
            ]));
            let impact = fields::REQUIREMENT_IMPACT.resolve(item);
            if !impact.is_empty() {
                lines.push(Line::styled(format!("    {impact}"), theme.muted()));
            }
            lines.push(blank());
        }
    }

    fn proposal<'a>(lines: &mut Vec<Line<'a>>, report: &'a ContentReport, theme: &Theme) {
        let proposal = &report.proposal;
        let on_panel = Style::default().fg(theme.foreground).bg(theme.dark_panel);

        lines.push(rule(theme));
        lines.push(section_title("Final Partnership Proposal", theme));
        let philosophy = fields::PROPOSAL_PHILOSOPHY.resolve(proposal);
        if !philosophy.is_empty() {
            lines.push(Line::styled(
                format!("  {philosophy}"),
                theme.heading().fg(theme.accent),
            ));
        }
        lines.push(emphasized_line(
            "  ",
            fields::PROPOSAL_INTRO.resolve(proposal),
            on_panel,
            Emphasis::OnDark,
            theme,
        ));
        lines.push(blank());

        for (i, point) in proposal.points.iter().enumerate() {
            let label = if i == 0 {
                "Logic & Evidence"
            } else {
                "Context & Persona"
            };
            lines.push(caption("  ", label, Style::default().fg(theme.accent)));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(point.title.as_str(), theme.heading()),
            ]));
            lines.push(emphasized_line(
                "  ",
                fields::PROPOSAL_POINT_BODY.resolve(point),
                theme.text(),
                Emphasis::OnDark,
                theme,
            ));
            lines.push(blank());
        }

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("VERIFIED INFRASTRUCTURE", theme.caption().fg(theme.success)),
            Span::raw(" "),
            badge("AI Verified", BadgeColor::Emerald),
        ]));
        lines.push(caption("  ", "System Assurance", theme.muted()));
        lines.push(emphasized_line(
            "  ",
            &proposal.infrastructure,
            theme.text(),
            Emphasis::OnDark,
            theme,
        ));
        lines.push(blank());

        lines.push(Line::styled(
            format!("  \"{}\"", fields::PROPOSAL_CLOSING.resolve(proposal)),
            theme.heading().add_modifier(Modifier::ITALIC),
        ));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                " Start Partnership → ",
                Style::default()
                    .fg(theme.dark_panel)
                    .bg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportSource;
    use crate::ui::widgets::text::line_text;

    fn render(report: &ContentReport) -> Vec<String> {
        let carousel = Carousel::with_len(report.strategies.len().max(1)).unwrap();
        StrategyDashboard::text(report, &carousel, &KeyBindings::default(), &Theme::default())
            .lines
            .iter()
            .map(line_text)
            .collect()
    }

    fn position(lines: &[String], needle: &str) -> usize {
        lines
            .iter()
            .position(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("missing {needle:?}"))
    }

    #[test]
    fn test_sections_in_order() {
        let report = ReportSource::Bundled.load().unwrap();
        let lines = render(&report.content);

        let header = position(&lines, "STRATEGIC REPORT");
        let framework = position(&lines, "Strategic Logic Framework");
        let base = position(&lines, "Base Requirements (Hygiene Factors)");
        let carousel = position(&lines, "Core Strategies (Deep Dive Analysis)");
        let proposal = position(&lines, "Final Partnership Proposal");
        assert!(header < framework);
        assert!(framework < base);
        assert!(base < carousel);
        assert!(carousel < proposal);
    }

    #[test]
    fn test_logic_framework_headings() {
        let report = ReportSource::Bundled.load().unwrap();
        let lines = render(&report.content);

        assert!(lines.contains(&"  WHO  Women 25-34, routine-driven".to_string()));
        assert!(lines.contains(&"  WHAT Routine-embedded product proof".to_string()));
        // positional heading for a bare string step
        assert!(lines.contains(&"  HOW  Shorts → Longform → Comment follow-up".to_string()));
    }

    #[test]
    fn test_requirement_fallbacks() {
        let report = ReportSource::Bundled.load().unwrap();
        let lines = render(&report.content);

        assert!(lines.iter().any(|l| l.contains(" REQUIREMENT 02 ")));
        assert!(lines.iter().any(|l| l.contains("Place the product inside a complete routine")));
        assert!(lines.iter().any(|l| l.contains("▸ Data supported")));
        assert!(lines.iter().any(|l| l.contains("✔ Pin a comment with the daily log")));
    }

    #[test]
    fn test_proposal_point_labels() {
        let report = ReportSource::Bundled.load().unwrap();
        let lines = render(&report.content);

        let logic = position(&lines, "LOGIC & EVIDENCE");
        let context = position(&lines, "CONTEXT & PERSONA");
        assert!(logic < context);
        assert!(lines.iter().any(|l| l.contains("already in the comments")));
        assert!(lines.iter().any(|l| l.contains("\"Let's turn trust into the next bestseller together.\"")));
    }

    #[test]
    fn test_missing_title_and_closing() {
        let report = ContentReport::default();
        let lines = render(&report);

        assert_eq!(lines[1], "");
        assert!(lines.iter().any(|l| l.contains("\"Let's build success together.\"")));
        assert!(lines.iter().any(|l| l.contains("Essential elements observed in all high-performing content.")));
    }
}
