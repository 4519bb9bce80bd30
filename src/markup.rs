//! Inline markup used inside report strings.
//!
//! Report text carries two lightweight conventions: `**bold**` emphasis
//! spans and `(label)content` scenario scripts. Display titles also carry
//! parenthesised annotations that are cut off for headlines.

use std::sync::LazyLock;

use regex::Regex;

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    // `.` does not cross newlines, so a span never joins two lines.
    Regex::new(r"\*\*.*?\*\*").expect("emphasis pattern is valid")
});

/// A run of text, either verbatim or emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Emphasis(&'a str),
}

/// Split `text` into plain and emphasised segments.
///
/// Matches are non-greedy, so `**a** and **b**` yields two spans. A `**`
/// without a partner stays in the surrounding plain text.
pub fn emphasis_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in EMPHASIS.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::Plain(&text[cursor..found.start()]));
        }
        let inner = &text[found.start() + 2..found.end() - 2];
        segments.push(Segment::Emphasis(inner));
        cursor = found.end();
    }

    if cursor < text.len() {
        segments.push(Segment::Plain(&text[cursor..]));
    }

    segments
}

/// One `(label)content` beat of a content scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioBeat<'a> {
    pub label: &'a str,
    pub content: &'a str,
}

/// Maximum number of beats shown for a scenario.
pub const MAX_SCENARIO_BEATS: usize = 2;

/// Parse a `(label)content(label)content` script.
///
/// Chunks without content after the `)` are dropped, and only the first
/// [`MAX_SCENARIO_BEATS`] valid beats are kept. Text after a second `)` in
/// the same chunk is ignored.
pub fn scenario_beats(detail: &str) -> Vec<ScenarioBeat<'_>> {
    detail
        .split('(')
        .filter(|chunk| !chunk.is_empty())
        .filter_map(|chunk| {
            let mut pieces = chunk.split(')');
            let label = pieces.next()?;
            let content = pieces.next().filter(|content| !content.is_empty())?;
            Some(ScenarioBeat { label, content })
        })
        .take(MAX_SCENARIO_BEATS)
        .collect()
}

/// The part of a title before its first `(` annotation.
pub fn headline(title: &str) -> &str {
    title.split('(').next().unwrap_or_default()
}

/// A step of a conversion funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunnelStep<'a> {
    pub label: &'a str,
    /// The last step, highlighted as the conversion point.
    pub is_terminal: bool,
}

/// Split a `A → B → C` flow into trimmed steps.
pub fn funnel_steps(flow: &str) -> Vec<FunnelStep<'_>> {
    if flow.trim().is_empty() {
        return Vec::new();
    }

    let labels: Vec<&str> = flow
        .split('→')
        .map(|step| headline(step.trim()).trim_end())
        .collect();
    let last = labels.len() - 1;

    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| FunnelStep {
            label,
            is_terminal: i == last,
        })
        .collect()
}

/// Category and headline of an executive-summary point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryHeading<'a> {
    pub category: String,
    pub headline: &'a str,
}

/// Split `category: headline`; without a `:` the category is `Point N`.
///
/// The first `[` and first `]` are stripped from the category, so both
/// `[Audience]` and `Audience` read the same.
pub fn summary_heading(title: &str, index: usize) -> SummaryHeading<'_> {
    let mut parts = title.split(':');
    let first = parts.next().unwrap_or_default();

    match parts.next() {
        Some(second) => SummaryHeading {
            category: first.trim().replacen('[', "", 1).replacen(']', "", 1),
            headline: second.trim(),
        },
        None => SummaryHeading {
            category: format!("Point {}", index + 1),
            headline: title,
        },
    }
}
