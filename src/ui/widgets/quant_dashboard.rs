//! Quantitative metrics view.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::markup::{funnel_steps, headline, summary_heading};
use crate::normalize::fields;
use crate::report::QuantReport;
use crate::ui::theme::{BadgeColor, Emphasis, SUMMARY_ACCENTS, Theme};

use super::text::{
    badge, blank, caption, emphasized, emphasized_line, label_value, ratio_bar, rule, section_title,
};

const EXECUTIVE_SUBTITLE: &str = "데이터가 증명하는 필연적 선택, 지금 투입해야 하는 3가지 결정적 이유";

/// Renders a [`QuantReport`] as one scrollable column of sections.
pub struct QuantDashboard;

impl QuantDashboard {
    /// Build the view. Identical input always yields identical output.
    pub fn text<'a>(report: &'a QuantReport, theme: &Theme) -> Text<'a> {
        let mut lines = Vec::new();
        Self::hero(&mut lines, report, theme);
        Self::kpis(&mut lines, report, theme);
        Self::engagement(&mut lines, report, theme);
        Self::evaluation(&mut lines, report, theme);
        Self::signals(&mut lines, report, theme);
        Self::funnels(&mut lines, report, theme);
        Self::executive_summary(&mut lines, report, theme);
        Text::from(lines)
    }

    fn hero<'a>(lines: &mut Vec<Line<'a>>, report: &'a QuantReport, theme: &Theme) {
        let profile = &report.profile;

        lines.push(Line::from(vec![
            badge("Verified Channel", BadgeColor::Indigo),
            Span::styled(" ✔", Style::default().fg(theme.success)),
        ]));
        lines.push(Line::styled(
            profile.name.as_str(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ));
        lines.push(Line::styled(
            fields::PROFILE_CATEGORY.resolve(profile),
            theme.muted(),
        ));
        lines.push(blank());
        lines.push(caption("", "Total Subscribers", theme.muted()));
        lines.push(Line::from(vec![
            Span::styled(fields::PROFILE_SUBSCRIBERS.resolve(profile), theme.heading()),
            Span::raw("  "),
            Span::styled(
                format!("▲ {}", fields::PROFILE_GROWTH.resolve(profile)),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(caption("", "Core Target", theme.muted()));
        lines.push(Line::styled(
            fields::PROFILE_TARGET.resolve(profile),
            theme.text(),
        ));
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(theme.success)),
            Span::styled(
                format!("Active Analysis • {}", profile.region),
                theme.muted(),
            ),
        ]));
        lines.push(blank());
    }

    fn kpis<'a>(lines: &mut Vec<Line<'a>>, report: &'a QuantReport, theme: &Theme) {
        lines.push(section_title("Key Metrics", theme));
        for kpi in &report.kpis {
            let marker = if kpi.highlight {
                Span::styled("▌ ", Style::default().fg(theme.primary))
            } else {
                Span::raw("  ")
            };

            let mut header = vec![
                marker.clone(),
                Span::styled(kpi.label.to_uppercase(), theme.caption()),
            ];
            if let Some(sub_value) = kpi.sub_value.as_deref().filter(|s| !s.is_empty()) {
                header.push(Span::raw(" "));
                header.push(badge(sub_value, BadgeColor::Purple));
            }
            lines.push(Line::from(header));

            let value_style = if kpi.highlight {
                theme.heading().fg(theme.primary)
            } else {
                theme.heading()
            };
            lines.push(Line::from(vec![
                marker.clone(),
                Span::styled(kpi.value.as_deref().unwrap_or_default(), value_style),
            ]));
            lines.push(Line::from(vec![
                marker,
                Span::styled(kpi.meaning.as_deref().unwrap_or_default(), theme.muted()),
            ]));
            lines.push(blank());
        }
    }

    fn engagement<'a>(lines: &mut Vec<Line<'a>>, report: &'a QuantReport, theme: &Theme) {
        let engagement = &report.engagement;
        let format = &report.format;

        lines.push(Line::from(vec![
            Span::styled("▍", Style::default().fg(theme.primary)),
            Span::styled("Engagement Quality & Format Strategy", theme.section_title()),
            Span::styled("   Data source: Recent uploads", theme.muted()),
        ]));
        lines.push(label_value(
            "  ♥ ",
            "Avg Likes",
            fields::ENGAGEMENT_LIKES.resolve(engagement),
            theme,
        ));
        lines.push(label_value(
            "  ✎ ",
            "Avg Comments",
            fields::ENGAGEMENT_COMMENTS.resolve(engagement),
            theme,
        ));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("COMMENT/LIKE RATIO", theme.caption().fg(theme.primary)),
            Span::raw("  "),
            Span::styled(
                fields::ENGAGEMENT_COMMENT_RATIO.resolve(engagement),
                theme.heading().fg(theme.primary),
            ),
        ]));
        lines.push(blank());

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("LONGFORM FOCUS", theme.caption()),
            Span::raw("  "),
            Span::styled(format!("{}%", format.longform_ratio), theme.heading()),
        ]));
        lines.push(ratio_bar(format.longform_ratio, 30, theme));
        if let (Some(long), Some(short)) = (format.longform_avg.as_deref(), format.shorts_avg.as_deref()) {
            lines.push(Line::styled(
                format!("  Avg length: longform {long} · shorts {short}"),
                theme.muted(),
            ));
        }
        if let Some(description) = format.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(emphasized_line("  ", description, theme.muted(), Emphasis::OnLight, theme));
        }
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("PLATFORM/LONG ER ", theme.caption()),
            Span::styled(
                fields::ENGAGEMENT_PLATFORM_ER.resolve(engagement),
                theme.heading(),
            ),
            Span::raw("    "),
            Span::styled("SHORTS ER ", theme.caption()),
            Span::styled(
                fields::ENGAGEMENT_SHORTS_ER.resolve(engagement),
                theme.heading(),
            ),
        ]));
        lines.push(blank());
    }

    fn evaluation<'a>(lines: &mut Vec<Line<'a>>, report: &'a QuantReport, theme: &Theme) {
        let core = &report.core_definition;

        lines.push(section_title("Comprehensive Commerce Evaluation", theme));
        lines.push(Line::styled(
            format!("\"{}\"", fields::CORE_TITLE.resolve(core)),
            theme.heading().fg(theme.primary),
        ));
        lines.push(Line::styled(core.description.as_str(), theme.text()));
        lines.push(blank());

        for (i, feature) in core.features.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", i + 1),
                    BadgeColor::Indigo.style(),
                ),
                Span::raw(" "),
                Span::styled(
                    fields::FEATURE_LABEL.resolve(feature).to_uppercase(),
                    theme.heading(),
                ),
            ]));
            lines.push(emphasized_line(
                "    ",
                fields::FEATURE_BODY.resolve(feature),
                theme.text(),
                Emphasis::OnLight,
                theme,
            ));
        }
        lines.push(blank());

        lines.push(caption("  ", "Format Strategy Analysis", Style::default().fg(theme.primary)));
        lines.push(emphasized_line(
            "  ",
            fields::CORE_FORMAT_STRATEGY.resolve(core),
            theme.text(),
            Emphasis::OnLight,
            theme,
        ));
        lines.push(blank());
    }

    fn signals<'a>(lines: &mut Vec<Line<'a>>, report: &'a QuantReport, theme: &Theme) {
        lines.push(section_title("Critical Commerce Signals", theme));
        for (i, metric) in report.top3_metrics.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), BadgeColor::Indigo.style()),
                Span::raw(" "),
                Span::styled(headline(fields::METRIC_TITLE.resolve(metric)), theme.heading()),
            ]));
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    fields::METRIC_VALUE.resolve(metric),
                    theme.heading().fg(theme.primary),
                ),
            ]));
            lines.push(caption("    │ ", "Logic", theme.muted()));
            lines.push(Line::from(vec![
                Span::styled("    │ ", theme.border()),
                Span::styled(fields::METRIC_REASON.resolve(metric), theme.text()),
            ]));
            lines.push(caption("    │ ", "Impact", Style::default().fg(theme.success)));
            lines.push(Line::from(vec![
                Span::styled("    │ ", Style::default().fg(theme.success)),
                Span::styled(metric.interpretation.as_str(), theme.heading()),
            ]));
            lines.push(blank());
        }
    }

    fn funnels<'a>(lines: &mut Vec<Line<'a>>, report: &'a QuantReport, theme: &Theme) {
        lines.push(section_title("Conversion Funnel Logic", theme));
        for (i, funnel) in report.funnels.iter().enumerate() {
            let color = if i == 0 {
                BadgeColor::Slate
            } else {
                BadgeColor::Indigo
            };
            lines.push(Line::from(vec![Span::raw("  "), badge(&funnel.kind, color)]));

            let steps = funnel_steps(fields::FUNNEL_FLOW.resolve(funnel));
            let mut flow = vec![Span::raw("  ")];
            for step in &steps {
                if step.is_terminal {
                    flow.push(Span::styled(
                        format!(" {} ", step.label),
                        Style::default()
                            .fg(theme.foreground)
                            .bg(theme.primary)
                            .add_modifier(Modifier::BOLD),
                    ));
                } else {
                    flow.push(Span::styled(format!("[{}]", step.label), theme.text()));
                    flow.push(Span::styled(" → ", theme.muted()));
                }
            }
            lines.push(Line::from(flow));
            lines.push(emphasized_line(
                "  ",
                fields::FUNNEL_DESCRIPTION.resolve(funnel),
                theme.text(),
                Emphasis::OnLight,
                theme,
            ));
            lines.push(blank());
        }
    }

    fn executive_summary<'a>(lines: &mut Vec<Line<'a>>, report: &'a QuantReport, theme: &Theme) {
        let summary = &report.executive_summary;

        lines.push(rule(theme));
        lines.push(Line::from(vec![badge("★ Final Decision", BadgeColor::Amber)]));
        lines.push(Line::styled(
            fields::EXECUTIVE_TITLE.resolve(summary),
            theme.heading(),
        ));
        lines.push(Line::styled(EXECUTIVE_SUBTITLE, theme.muted()));
        lines.push(blank());

        for (i, point) in summary.points.iter().enumerate() {
            let accent = SUMMARY_ACCENTS[i % SUMMARY_ACCENTS.len()];
            let heading = summary_heading(&point.title, i);

            lines.push(Line::from(vec![
                Span::styled(format!("0{}  ", i + 1), theme.muted()),
                Span::styled(
                    heading.category.to_uppercase(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::styled(heading.headline, theme.heading()));
            let mut body = vec![Span::raw("  ")];
            body.extend(emphasized(
                &point.desc,
                theme.text(),
                Emphasis::Accent(accent),
                theme,
            ));
            lines.push(Line::from(body));
            lines.push(blank());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportSource;
    use crate::ui::widgets::text::line_text;

    fn rendered(report: &QuantReport) -> Vec<String> {
        QuantDashboard::text(report, &Theme::default())
            .lines
            .iter()
            .map(line_text)
            .collect()
    }

    fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    #[test]
    fn test_sample_report_sections() {
        let report = ReportSource::Bundled.load().unwrap();
        let lines = rendered(&report.quant);

        assert!(contains(&lines, "SPACE A Hyunjung"));
        assert!(contains(&lines, "412K"));
        assert!(contains(&lines, "Active Analysis • South Korea"));
        assert!(contains(&lines, "Comprehensive Commerce Evaluation"));
        assert!(contains(&lines, "Critical Commerce Signals"));
        assert!(contains(&lines, "Conversion Funnel Logic"));
        assert!(contains(&lines, "68%"));
        // numeric alias
        assert!(contains(&lines, "9840"));
        // empty reason falls back to the placeholder
        assert!(contains(&lines, "See report for details"));
        // metric title annotation is cut
        assert!(!contains(&lines, "(PICS)"));
        // emphasis delimiters never reach the screen
        assert!(!contains(&lines, "**"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let report = ReportSource::Bundled.load().unwrap();
        assert_eq!(rendered(&report.quant), rendered(&report.quant));
    }

    #[test]
    fn test_empty_report_uses_placeholders() {
        let lines = rendered(&QuantReport::default());
        assert!(contains(&lines, "\"Core Definition\""));
        assert!(contains(&lines, "See Format Section"));
        assert!(contains(&lines, "Executive Summary"));
        assert!(contains(&lines, "0%"));
    }

    #[test]
    fn test_executive_summary_headings() {
        let report = ReportSource::Bundled.load().unwrap();
        let lines = rendered(&report.quant);
        assert!(contains(&lines, "01  AUDIENCE"));
        assert!(contains(&lines, "Buyers, not browsers"));
        assert!(contains(&lines, "03  POINT 3"));
    }

    #[test]
    fn test_funnel_terminal_step_highlighted() {
        let report = ReportSource::Bundled.load().unwrap();
        let theme = Theme::default();
        let text = QuantDashboard::text(&report.quant, &theme);

        let terminal = text
            .lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .find(|span| span.content == " Purchase ")
            .unwrap();
        assert_eq!(terminal.style.bg, Some(theme.primary));

        let lines = rendered(&report.quant);
        assert!(contains(&lines, "[Shorts Discovery] → [Longform Review] → [Comment Q&A] →  Purchase "));
    }
}
