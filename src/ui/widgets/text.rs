//! Building blocks shared by the report views.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::markup::{Segment, emphasis_segments};
use crate::ui::theme::{BadgeColor, Emphasis, Theme};

/// Turn `**bold**` markup into spans: plain runs in `base`, emphasised runs
/// in `base` patched with the emphasis variant.
pub fn emphasized<'a>(text: &'a str, base: Style, variant: Emphasis, theme: &Theme) -> Vec<Span<'a>> {
    let strong = base.patch(theme.emphasis(variant));
    emphasis_segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => Span::styled(text, base),
            Segment::Emphasis(text) => Span::styled(text, strong),
        })
        .collect()
}

/// An indented paragraph line with emphasis markup.
pub fn emphasized_line<'a>(
    indent: &'static str,
    text: &'a str,
    base: Style,
    variant: Emphasis,
    theme: &Theme,
) -> Line<'a> {
    let mut spans = vec![Span::raw(indent)];
    spans.extend(emphasized(text, base, variant, theme));
    Line::from(spans)
}

/// A rounded-pill style label.
pub fn badge(label: &str, color: BadgeColor) -> Span<'static> {
    Span::styled(format!(" {} ", label.to_uppercase()), color.style())
}

/// Section heading with a leading marker.
pub fn section_title<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled("▍", Style::default().fg(theme.primary)),
        Span::styled(title, theme.section_title()),
    ])
}

/// A small uppercase caption.
pub fn caption(indent: &'static str, label: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(indent),
        Span::styled(label.to_uppercase(), style.add_modifier(Modifier::BOLD)),
    ])
}

/// `label ........ value` on one line.
pub fn label_value<'a>(indent: &'static str, label: &'a str, value: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::raw(indent),
        Span::styled(label, theme.muted()),
        Span::raw("  "),
        Span::styled(value, theme.heading()),
    ])
}

/// A thin horizontal separator.
pub fn rule(theme: &Theme) -> Line<'static> {
    Line::styled("─".repeat(48), theme.border())
}

pub fn blank() -> Line<'static> {
    Line::default()
}

/// A horizontal bar filled to `percent` of `width` cells.
pub fn ratio_bar(percent: f64, width: usize, theme: &Theme) -> Line<'static> {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    Line::from(vec![
        Span::raw("  "),
        Span::styled("█".repeat(filled), Style::default().fg(theme.foreground)),
        Span::styled("░".repeat(width - filled), Style::default().fg(theme.border)),
    ])
}

/// Plain text of a line.
#[cfg(test)]
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
