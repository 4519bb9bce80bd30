//! Report data model.
//!
//! A [`Report`] is loaded once, whole, before the first frame and is never
//! mutated afterwards. The shapes mirror the JSON the analysis pipeline
//! emits, including the legacy field names older exports still carry.
//! Which of those fields wins for display is decided in
//! [`crate::normalize`], not here.

mod content;
mod de;
mod loader;
mod quant;

pub use content::{
    BaseRequirement, BaseRequirements, ContentReport, Intro, LegacyLogic, LogicStep, Persona,
    Proposal, ProposalPoint, StrategyConcept, StrategyDetail, StrategyEvidence, StrategyItem,
};
pub use loader::{ReportSource, SAMPLE_REPORT};
pub use quant::{
    CoreDefinition, Engagement, ExecutiveSummary, Feature, FormatMix, Funnel, Kpi, Profile,
    QuantReport, SummaryPoint, TopMetric,
};

use serde::{Deserialize, Serialize};

/// The full dashboard payload: one record per tab.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    /// Quantitative metrics shown on the first tab.
    pub quant: QuantReport,
    /// Content strategy shown on the second tab.
    pub content: ContentReport,
}

impl Report {
    /// Number of strategies in the carousel.
    pub fn strategy_count(&self) -> usize {
        self.content.strategies.len()
    }
}
