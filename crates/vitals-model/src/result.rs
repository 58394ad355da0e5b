//! Evaluation outputs for the two display surfaces.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::biomarker::{BiomarkerId, Panel};
use crate::numeric::parse_leading_numeric;
use crate::status::BiomarkerStatus;

/// One classified biomarker from the strict band table.
///
/// Built fresh on every evaluation pass and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomarkerResult {
    pub id: BiomarkerId,
    /// Display name, e.g. `Glucose (fasting)`.
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub status: BiomarkerStatus,
    /// Human-readable optimal range, e.g. `4.0-8.0` or `<100`.
    pub range: String,
    pub category: Panel,
}

impl BiomarkerResult {
    /// Value with its unit, as shown in result tables.
    pub fn value_with_unit(&self) -> String {
        format!("{} {}", self.value, self.unit)
    }

    /// Range with its unit, as shown in result tables.
    pub fn range_with_unit(&self) -> String {
        format!("{} {}", self.range, self.unit)
    }
}

/// Outcome of the tolerance-scaled lookup used for backend panels.
///
/// Unlike [`BiomarkerResult`] it always exists: unknown keys and unreadable
/// values come back as a suboptimal placeholder with range `-`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEvaluation {
    pub range: String,
    pub status: BiomarkerStatus,
}

impl RangeEvaluation {
    /// Range shown when no rule applies.
    pub const PLACEHOLDER_RANGE: &'static str = "-";

    pub fn placeholder() -> Self {
        Self {
            range: Self::PLACEHOLDER_RANGE.to_string(),
            status: BiomarkerStatus::Suboptimal,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.range == Self::PLACEHOLDER_RANGE
    }
}

/// A value from a backend lab panel: a JSON number, a string, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PanelValue {
    Number(f64),
    Text(String),
    /// Field present in the panel but left empty.
    Null,
}

impl PanelValue {
    /// Numeric reading of the value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            Self::Number(_) => None,
            Self::Text(text) => parse_leading_numeric(text),
            Self::Null => None,
        }
    }
}

impl fmt::Display for PanelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Null => f.write_str(RangeEvaluation::PLACEHOLDER_RANGE),
        }
    }
}

impl From<f64> for PanelValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PanelValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
