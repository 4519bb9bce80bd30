//! Loading and validating report files.

use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

use super::Report;

/// Sample report compiled into the binary.
pub const SAMPLE_REPORT: &str = include_str!("../../data/sample_report.json");

/// Where the report comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportSource {
    /// The compiled-in sample report.
    #[default]
    Bundled,
    /// A JSON file on disk.
    File(PathBuf),
}

impl ReportSource {
    /// Pick the first configured path, falling back to the bundled sample.
    pub fn resolve(cli_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Self {
        cli_path
            .or(config_path)
            .map(Self::File)
            .unwrap_or(Self::Bundled)
    }

    /// Read, parse and validate the report.
    pub fn load(&self) -> Result<Report> {
        let report = match self {
            Self::Bundled => Report::from_json(SAMPLE_REPORT)?,
            Self::File(path) => {
                let content = std::fs::read_to_string(path)?;
                Report::from_json(&content)?
            }
        };

        tracing::info!(
            source = %self,
            channel = %report.quant.profile.name,
            strategies = report.strategy_count(),
            "Report loaded"
        );

        Ok(report)
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "bundled sample"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Report {
    /// Parse a report from JSON and check its invariants.
    pub fn from_json(json: &str) -> Result<Self> {
        let report: Report = serde_json::from_str(json)?;
        report.validate()?;
        Ok(report)
    }

    /// Reject reports the views cannot display.
    ///
    /// The carousel indexes modulo the strategy count, so an empty list is
    /// refused here rather than handled by the views.
    pub fn validate(&self) -> Result<()> {
        if self.content.strategies.is_empty() {
            return Err(Error::invalid_report(
                "content.strategies must contain at least one strategy",
            ));
        }

        let ratio = self.quant.format.longform_ratio;
        if !(0.0..=100.0).contains(&ratio) {
            return Err(Error::invalid_report(format!(
                "quant.format.longformRatio must be within 0..=100, got {ratio}"
            )));
        }

        Ok(())
    }
}
