//! Quantitative metrics report.

use serde::{Deserialize, Serialize};

use super::de::lenient_string;

/// Quantitative report for one creator channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuantReport {
    pub profile: Profile,
    pub kpis: Vec<Kpi>,
    pub engagement: Engagement,
    pub format: FormatMix,
    pub core_definition: CoreDefinition,
    pub top3_metrics: Vec<TopMetric>,
    pub funnels: Vec<Funnel>,
    pub executive_summary: ExecutiveSummary,
}

/// Channel profile. Each display field has a legacy alternate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub category: Option<String>,
    pub niche_category: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subscribers: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub follower_count: Option<String>,
    pub growth: Option<String>,
    pub growth_momentum: Option<String>,
    pub target: Option<String>,
    pub target_audience: Option<String>,
    pub region: String,
}

/// A headline KPI card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Kpi {
    pub label: String,
    #[serde(deserialize_with = "lenient_string")]
    pub value: Option<String>,
    pub sub_value: Option<String>,
    pub meaning: Option<String>,
    pub highlight: bool,
}

/// Engagement averages and ratios.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Engagement {
    #[serde(deserialize_with = "lenient_string")]
    pub likes: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub avg_likes: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub comments: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub avg_comments: Option<String>,
    pub comment_ratio: Option<String>,
    pub comment_to_like_ratio: Option<String>,
    pub view_er: Option<String>,
    pub engagement_rate: Option<String>,
    pub platform_er: Option<String>,
    pub shorts_er: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub avg_views: Option<String>,
    pub saturation_rate: Option<String>,
}

/// Longform vs. shorts mix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatMix {
    /// Share of longform uploads, 0 to 100.
    pub longform_ratio: f64,
    pub longform_avg: Option<String>,
    pub shorts_avg: Option<String>,
    pub description: Option<String>,
}

/// The report's one-sentence positioning of the channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreDefinition {
    pub title: Option<String>,
    pub description: String,
    pub features: Vec<Feature>,
    pub format_strategy: Option<String>,
}

/// A core-definition feature: either bare text or a keyword with a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Feature {
    PlainText(String),
    Detailed {
        #[serde(default)]
        keyword: Option<String>,
        #[serde(default)]
        desc: Option<String>,
    },
}

/// One of the three signals the report singles out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopMetric {
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub value: Option<String>,
    pub reason: Option<String>,
    pub interpretation: String,
}

/// A conversion funnel, `flow` being a `→`-separated step list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Funnel {
    #[serde(rename = "type")]
    pub kind: String,
    pub flow: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutiveSummary {
    pub title: Option<String>,
    pub points: Vec<SummaryPoint>,
}

/// `title` may read `category: headline`; `desc` may carry `**bold**` spans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryPoint {
    pub title: String,
    pub desc: String,
}
