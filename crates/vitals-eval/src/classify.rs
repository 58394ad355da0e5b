//! The two classification strategies.
//!
//! [`classify`] uses the strict band table and yields nothing for input it
//! cannot grade. [`classify_tolerance`] uses the widened `[min, max]` table
//! and always yields an evaluation, falling back to a suboptimal placeholder.
//! Both are pure and never panic.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use vitals_model::{BiomarkerId, BiomarkerResult, PanelValue, RangeEvaluation};
use vitals_rules::{strict_rule, strict_rule_for, tolerance_rule};

/// Named classification strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Three-tier optimal/suboptimal bands; unknown input is skipped.
    #[default]
    StrictBand,
    /// `[min, max]` widened by 10%; unknown input becomes a placeholder.
    ToleranceScaled,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StrictBand => "strict-band",
            Self::ToleranceScaled => "tolerance-scaled",
        }
    }
}

/// Classify a value with the strict band table.
///
/// Returns `None` when the value is absent or not finite, or when `key` is
/// not a known biomarker.
pub fn classify(key: &str, value: Option<f64>) -> Option<BiomarkerResult> {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        trace!(key, "skipping biomarker without a usable value");
        return None;
    };
    let Some(rule) = strict_rule(key) else {
        debug!(key, "skipping unknown biomarker");
        return None;
    };
    Some(build_result(rule.id, value))
}

/// Classify a known biomarker with the strict band table.
pub fn classify_id(id: BiomarkerId, value: f64) -> Option<BiomarkerResult> {
    value.is_finite().then(|| build_result(id, value))
}

fn build_result(id: BiomarkerId, value: f64) -> BiomarkerResult {
    let rule = strict_rule_for(id);
    let status = rule.grade(value);
    debug!(key = id.as_str(), status = %status, "classified biomarker");
    BiomarkerResult {
        id,
        name: rule.display_name.to_string(),
        value,
        unit: rule.unit.to_string(),
        status,
        range: rule.range.to_string(),
        category: rule.panel,
    }
}

/// Classify a backend panel value with the tolerance-scaled table.
///
/// Unknown keys and values without a numeric reading produce
/// [`RangeEvaluation::placeholder`].
pub fn classify_tolerance(key: &str, value: &PanelValue) -> RangeEvaluation {
    let Some(numeric) = value.as_number() else {
        debug!(key, "panel value is not numeric");
        return RangeEvaluation::placeholder();
    };
    let Some(rule) = tolerance_rule(key) else {
        debug!(key, "no tolerance rule for panel key");
        return RangeEvaluation::placeholder();
    };
    let status = rule.grade(numeric);
    debug!(key, status = %status, "graded panel value");
    RangeEvaluation {
        range: rule.range.to_string(),
        status,
    }
}
