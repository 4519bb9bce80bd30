//! Content strategy report.

use serde::{Deserialize, Serialize};

/// Content strategy report for one creator channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentReport {
    pub report_title: Option<String>,
    pub intro: Intro,
    pub logic_framework: Vec<LogicStep>,
    pub base_requirements: BaseRequirements,
    /// Never empty once the report has passed the loader.
    pub strategies: Vec<StrategyDetail>,
    pub proposal: Proposal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Intro {
    pub title: Option<String>,
    pub background: Option<String>,
    pub objective: Option<String>,
    pub logic: Option<String>,
}

/// One step of the WHO/WHY/WHAT/HOW framework.
///
/// Exports disagree on the shape: some write a bare string, some a record
/// keyed by `step`/`label`, some by the question words themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogicStep {
    Text(String),
    Labeled {
        #[serde(default)]
        step: Option<String>,
        #[serde(default)]
        who: Option<String>,
        #[serde(default)]
        why: Option<String>,
        #[serde(default)]
        what: Option<String>,
        #[serde(default)]
        how: Option<String>,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        desc: Option<String>,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseRequirements {
    pub intro: Option<String>,
    pub items: Vec<BaseRequirement>,
}

/// A hygiene factor every piece of content has to satisfy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseRequirement {
    pub title: String,
    pub description: Option<String>,
    pub desc: Option<String>,
    pub action_list: Vec<String>,
    pub data_proof: Option<String>,
    pub impact: Option<String>,
}

/// A single strategy card in the carousel.
///
/// Current exports fill `title`, `concept`, `evidence` and `item`; legacy
/// ones use `name`, `sentiment`, `logic` and `instance` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategyDetail {
    pub id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub sentiment: Option<String>,
    pub instance: Option<String>,
    pub logic: Option<LegacyLogic>,
    pub persona: Persona,
    pub evidence: Option<StrategyEvidence>,
    pub item: Option<StrategyItem>,
    pub concept: Option<StrategyConcept>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyLogic {
    pub evidence: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Persona {
    pub label: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategyEvidence {
    pub label: Option<String>,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategyItem {
    pub name: Option<String>,
    pub context: Option<String>,
    pub data_proof: Option<String>,
    pub spec: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategyConcept {
    pub definition: Option<String>,
    /// `(label)content(label)content` scenario script.
    pub detail: Option<String>,
    pub emphasis: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Proposal {
    pub intro: Option<String>,
    pub philosophy: Option<String>,
    pub points: Vec<ProposalPoint>,
    pub closing: Option<String>,
    pub infrastructure: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProposalPoint {
    pub title: String,
    pub content: Option<String>,
    pub desc: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logic_steps_accept_mixed_shapes() {
        let steps: Vec<LogicStep> = serde_json::from_str(
            r#"["Target fans", {"step": "WHY", "label": "Trust"}, {"who": "2030 women"}]"#,
        )
        .unwrap();

        assert_eq!(steps[0], LogicStep::Text("Target fans".to_string()));
        assert!(matches!(
            &steps[1],
            LogicStep::Labeled { step: Some(s), label: Some(l), .. } if s == "WHY" && l == "Trust"
        ));
        assert!(matches!(
            &steps[2],
            LogicStep::Labeled { who: Some(w), step: None, .. } if w == "2030 women"
        ));
    }

    #[test]
    fn test_legacy_strategy_shape() {
        let strategy: StrategyDetail = serde_json::from_str(
            r#"{
                "name": "Morning Routine",
                "sentiment": "Calm confidence",
                "instance": "Cushion foundation",
                "logic": {"evidence": "Top 3 videos are routines"},
                "persona": {"label": "Office worker", "desc": "Short on time"}
            }"#,
        )
        .unwrap();

        assert_eq!(strategy.title, None);
        assert_eq!(strategy.name.as_deref(), Some("Morning Routine"));
        assert_eq!(
            strategy.logic.and_then(|l| l.evidence).as_deref(),
            Some("Top 3 videos are routines")
        );
        assert!(strategy.concept.is_none());
        assert_eq!(strategy.persona.label, "Office worker");
    }
}
