//! Classification outcomes for a single biomarker and for a whole mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of one biomarker value.
///
/// The derived `Ord` follows severity: `Optimal < Suboptimal < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiomarkerStatus {
    Optimal,
    Suboptimal,
    Critical,
}

impl BiomarkerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Suboptimal => "suboptimal",
            Self::Critical => "critical",
        }
    }

    /// Badge shown next to a result row.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Optimal => "✅",
            Self::Suboptimal => "⚠️",
            Self::Critical => "🔴",
        }
    }
}

impl fmt::Display for BiomarkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Worst-case status across every evaluated biomarker of a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Optimal,
    Suboptimal,
    Critical,
    /// Nothing could be evaluated (no mapping, or no classifiable entry).
    #[serde(rename = "none")]
    NoData,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Suboptimal => "suboptimal",
            Self::Critical => "critical",
            Self::NoData => "none",
        }
    }

    /// Dashboard headline for the status.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Optimal => "Your Health Status: Optimal",
            Self::Suboptimal => "Your Health Status: On Range",
            Self::Critical => "Your Health Status: At Risk",
            Self::NoData => "Health Status: Not verified",
        }
    }

    /// Sub-heading counting the tested biomarkers.
    pub fn tested_summary(&self, tested: usize) -> String {
        match self {
            Self::NoData => "Upload or enter your lab results".to_string(),
            _ if tested == 1 => "1 biomarker tested".to_string(),
            _ => format!("{tested} biomarkers tested"),
        }
    }

    pub fn has_data(&self) -> bool {
        !matches!(self, Self::NoData)
    }
}

impl From<BiomarkerStatus> for OverallStatus {
    fn from(status: BiomarkerStatus) -> Self {
        match status {
            BiomarkerStatus::Optimal => Self::Optimal,
            BiomarkerStatus::Suboptimal => Self::Suboptimal,
            BiomarkerStatus::Critical => Self::Critical,
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_order() {
        assert!(BiomarkerStatus::Critical > BiomarkerStatus::Suboptimal);
        assert!(BiomarkerStatus::Suboptimal > BiomarkerStatus::Optimal);
        let worst = [BiomarkerStatus::Optimal, BiomarkerStatus::Critical]
            .into_iter()
            .max();
        assert_eq!(worst, Some(BiomarkerStatus::Critical));
    }

    #[test]
    fn no_data_serializes_as_none() {
        let json = serde_json::to_string(&OverallStatus::NoData).unwrap();
        assert_eq!(json, "\"none\"");
        let status: OverallStatus = serde_json::from_str("\"suboptimal\"").unwrap();
        assert_eq!(status, OverallStatus::Suboptimal);
    }

    #[test]
    fn tested_summary_pluralizes() {
        assert_eq!(OverallStatus::Optimal.tested_summary(1), "1 biomarker tested");
        assert_eq!(OverallStatus::Critical.tested_summary(3), "3 biomarkers tested");
        assert_eq!(
            OverallStatus::NoData.tested_summary(0),
            "Upload or enter your lab results"
        );
    }
}
