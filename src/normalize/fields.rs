//! Fallback chains for every dual-schema display field.

use crate::report::{
    BaseRequirement, BaseRequirements, CoreDefinition, Engagement, ExecutiveSummary, Feature,
    Funnel, Intro, LogicStep, Profile, Proposal, ProposalPoint, StrategyDetail, TopMetric,
};

use super::FallbackChain;

// Profile

pub const PROFILE_CATEGORY: FallbackChain<Profile> = FallbackChain {
    field: "profile.category",
    sources: &[|p| p.category.as_deref(), |p| p.niche_category.as_deref()],
    default: "",
};

pub const PROFILE_SUBSCRIBERS: FallbackChain<Profile> = FallbackChain {
    field: "profile.subscribers",
    sources: &[|p| p.subscribers.as_deref(), |p| p.follower_count.as_deref()],
    default: "",
};

pub const PROFILE_GROWTH: FallbackChain<Profile> = FallbackChain {
    field: "profile.growth",
    sources: &[|p| p.growth.as_deref(), |p| p.growth_momentum.as_deref()],
    default: "",
};

pub const PROFILE_TARGET: FallbackChain<Profile> = FallbackChain {
    field: "profile.target",
    sources: &[|p| p.target.as_deref(), |p| p.target_audience.as_deref()],
    default: "",
};

// Engagement

pub const ENGAGEMENT_LIKES: FallbackChain<Engagement> = FallbackChain {
    field: "engagement.likes",
    sources: &[|e| e.likes.as_deref(), |e| e.avg_likes.as_deref()],
    default: "",
};

pub const ENGAGEMENT_COMMENTS: FallbackChain<Engagement> = FallbackChain {
    field: "engagement.comments",
    sources: &[|e| e.comments.as_deref(), |e| e.avg_comments.as_deref()],
    default: "",
};

pub const ENGAGEMENT_COMMENT_RATIO: FallbackChain<Engagement> = FallbackChain {
    field: "engagement.commentRatio",
    sources: &[
        |e| e.comment_ratio.as_deref(),
        |e| e.comment_to_like_ratio.as_deref(),
    ],
    default: "",
};

pub const ENGAGEMENT_PLATFORM_ER: FallbackChain<Engagement> = FallbackChain {
    field: "engagement.platformEr",
    sources: &[|e| e.platform_er.as_deref(), |e| e.view_er.as_deref()],
    default: "",
};

pub const ENGAGEMENT_SHORTS_ER: FallbackChain<Engagement> = FallbackChain {
    field: "engagement.shortsEr",
    sources: &[|e| e.shorts_er.as_deref()],
    default: "",
};

// Core definition and executive summary

pub const CORE_TITLE: FallbackChain<CoreDefinition> = FallbackChain {
    field: "coreDefinition.title",
    sources: &[|c| c.title.as_deref()],
    default: "Core Definition",
};

pub const CORE_FORMAT_STRATEGY: FallbackChain<CoreDefinition> = FallbackChain {
    field: "coreDefinition.formatStrategy",
    sources: &[|c| c.format_strategy.as_deref()],
    default: "See Format Section",
};

pub const FEATURE_LABEL: FallbackChain<Feature> = FallbackChain {
    field: "feature.keyword",
    sources: &[|f| match f {
        Feature::Detailed { keyword, .. } => keyword.as_deref(),
        Feature::PlainText(_) => None,
    }],
    default: "Feature",
};

pub const FEATURE_BODY: FallbackChain<Feature> = FallbackChain {
    field: "feature.desc",
    sources: &[|f| match f {
        Feature::PlainText(text) => Some(text.as_str()),
        Feature::Detailed { desc, .. } => desc.as_deref(),
    }],
    default: "",
};

pub const EXECUTIVE_TITLE: FallbackChain<ExecutiveSummary> = FallbackChain {
    field: "executiveSummary.title",
    sources: &[|s| s.title.as_deref()],
    default: "Executive Summary",
};

// Top metrics and funnels

pub const METRIC_TITLE: FallbackChain<TopMetric> = FallbackChain {
    field: "top3Metrics.title",
    sources: &[|m| m.title.as_deref(), |m| m.name.as_deref()],
    default: "",
};

pub const METRIC_VALUE: FallbackChain<TopMetric> = FallbackChain {
    field: "top3Metrics.value",
    sources: &[|m| m.value.as_deref()],
    default: "",
};

pub const METRIC_REASON: FallbackChain<TopMetric> = FallbackChain {
    field: "top3Metrics.reason",
    sources: &[|m| m.reason.as_deref()],
    default: "See report for details",
};

pub const FUNNEL_FLOW: FallbackChain<Funnel> = FallbackChain {
    field: "funnels.flow",
    sources: &[|f| f.flow.as_deref(), |f| f.name.as_deref()],
    default: "",
};

pub const FUNNEL_DESCRIPTION: FallbackChain<Funnel> = FallbackChain {
    field: "funnels.description",
    sources: &[|f| f.description.as_deref(), |f| f.desc.as_deref()],
    default: "",
};

// Content intro and framework

pub const INTRO_BACKGROUND: FallbackChain<Intro> = FallbackChain {
    field: "intro.background",
    sources: &[|i| i.background.as_deref(), |i| i.logic.as_deref()],
    default: "",
};

pub const INTRO_OBJECTIVE: FallbackChain<Intro> = FallbackChain {
    field: "intro.objective",
    sources: &[|i| i.objective.as_deref(), |i| i.title.as_deref()],
    default: "",
};

const LOGIC_STEP_HEADING: FallbackChain<LogicStep> = FallbackChain {
    field: "logicFramework.step",
    sources: &[
        |s| match s {
            LogicStep::Labeled { step, .. } => step.as_deref(),
            LogicStep::Text(_) => None,
        },
        |s| match s {
            LogicStep::Labeled { who, .. } => who.as_deref(),
            LogicStep::Text(_) => None,
        },
    ],
    default: "",
};

pub const LOGIC_STEP_VALUE: FallbackChain<LogicStep> = FallbackChain {
    field: "logicFramework.label",
    sources: &[
        |s| match s {
            LogicStep::Text(text) => Some(text.as_str()),
            LogicStep::Labeled { label, .. } => label.as_deref(),
        },
        |s| match s {
            LogicStep::Labeled { desc, .. } => desc.as_deref(),
            LogicStep::Text(_) => None,
        },
        |s| match s {
            LogicStep::Labeled { who, .. } => who.as_deref(),
            LogicStep::Text(_) => None,
        },
        |s| match s {
            LogicStep::Labeled { why, .. } => why.as_deref(),
            LogicStep::Text(_) => None,
        },
        |s| match s {
            LogicStep::Labeled { what, .. } => what.as_deref(),
            LogicStep::Text(_) => None,
        },
        |s| match s {
            LogicStep::Labeled { how, .. } => how.as_deref(),
            LogicStep::Text(_) => None,
        },
    ],
    default: "",
};

const POSITIONAL_STEP_HEADINGS: [&str; 4] = ["WHO", "WHY", "WHAT", "HOW"];

/// Heading for a framework step, falling back to its position.
pub fn logic_step_heading(step: &LogicStep, index: usize) -> &str {
    LOGIC_STEP_HEADING.first_present(step).unwrap_or_else(|| {
        POSITIONAL_STEP_HEADINGS
            .get(index)
            .copied()
            .unwrap_or(POSITIONAL_STEP_HEADINGS[3])
    })
}

// Base requirements

pub const BASE_INTRO: FallbackChain<BaseRequirements> = FallbackChain {
    field: "baseRequirements.intro",
    sources: &[|b| b.intro.as_deref()],
    default: "Essential elements observed in all high-performing content.",
};

pub const REQUIREMENT_DESCRIPTION: FallbackChain<BaseRequirement> = FallbackChain {
    field: "baseRequirements.items.description",
    sources: &[|r| r.description.as_deref(), |r| r.desc.as_deref()],
    default: "",
};

pub const REQUIREMENT_DATA_PROOF: FallbackChain<BaseRequirement> = FallbackChain {
    field: "baseRequirements.items.dataProof",
    sources: &[|r| r.data_proof.as_deref()],
    default: "Data supported",
};

pub const REQUIREMENT_IMPACT: FallbackChain<BaseRequirement> = FallbackChain {
    field: "baseRequirements.items.impact",
    sources: &[|r| r.impact.as_deref()],
    default: "",
};

// Strategies

pub const STRATEGY_TITLE: FallbackChain<StrategyDetail> = FallbackChain {
    field: "strategies.title",
    sources: &[|s| s.title.as_deref(), |s| s.name.as_deref()],
    default: "Strategy",
};

pub const STRATEGY_DEFINITION: FallbackChain<StrategyDetail> = FallbackChain {
    field: "strategies.concept.definition",
    sources: &[
        |s| s.concept.as_ref()?.definition.as_deref(),
        |s| s.sentiment.as_deref(),
    ],
    default: "",
};

pub const STRATEGY_EVIDENCE: FallbackChain<StrategyDetail> = FallbackChain {
    field: "strategies.evidence.desc",
    sources: &[
        |s| s.evidence.as_ref()?.desc.as_deref(),
        |s| s.logic.as_ref()?.evidence.as_deref(),
    ],
    default: "",
};

pub const STRATEGY_ITEM_NAME: FallbackChain<StrategyDetail> = FallbackChain {
    field: "strategies.item.name",
    sources: &[
        |s| s.item.as_ref()?.name.as_deref(),
        |s| s.instance.as_deref(),
    ],
    default: "",
};

pub const STRATEGY_ITEM_SPEC: FallbackChain<StrategyDetail> = FallbackChain {
    field: "strategies.item.spec",
    sources: &[|s| s.item.as_ref()?.spec.as_deref()],
    default: "",
};

pub const STRATEGY_SCENARIO: FallbackChain<StrategyDetail> = FallbackChain {
    field: "strategies.concept.detail",
    sources: &[|s| s.concept.as_ref()?.detail.as_deref()],
    default: "",
};

// Proposal

pub const PROPOSAL_PHILOSOPHY: FallbackChain<Proposal> = FallbackChain {
    field: "proposal.philosophy",
    sources: &[|p| p.philosophy.as_deref()],
    default: "",
};

pub const PROPOSAL_INTRO: FallbackChain<Proposal> = FallbackChain {
    field: "proposal.intro",
    sources: &[|p| p.intro.as_deref()],
    default: "",
};

pub const PROPOSAL_CLOSING: FallbackChain<Proposal> = FallbackChain {
    field: "proposal.closing",
    sources: &[|p| p.closing.as_deref()],
    default: "Let's build success together.",
};

pub const PROPOSAL_POINT_BODY: FallbackChain<ProposalPoint> = FallbackChain {
    field: "proposal.points.content",
    sources: &[|p| p.content.as_deref(), |p| p.desc.as_deref()],
    default: "",
};
