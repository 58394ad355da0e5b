//! Tolerance-scaled range table for backend lab panels.
//!
//! Each rule is a plain `[min, max]` reference interval. Values inside are
//! optimal, values outside but within 10% of the nearer edge are suboptimal,
//! and anything further out is critical. The bounds differ from the strict
//! table on purpose; the two tables back different displays.

use serde::Serialize;

use vitals_model::{BiomarkerId, BiomarkerStatus};

/// Factor applied to `min` below which a value is critical.
pub const LOWER_TOLERANCE: f64 = 0.9;
/// Factor applied to `max` above which a value is critical.
pub const UPPER_TOLERANCE: f64 = 1.1;

/// Reference interval for one backend panel key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToleranceRule {
    /// Key as sent by the backend.
    pub key: &'static str,
    /// Other spellings accepted for the same key.
    pub aliases: &'static [&'static str],
    pub id: BiomarkerId,
    pub range: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ToleranceRule {
    pub fn matches(&self, key: &str) -> bool {
        self.key == key || self.aliases.contains(&key)
    }

    /// Grade a finite value against the widened interval.
    pub fn grade(&self, value: f64) -> BiomarkerStatus {
        if value < self.min * LOWER_TOLERANCE || value > self.max * UPPER_TOLERANCE {
            BiomarkerStatus::Critical
        } else if value < self.min || value > self.max {
            BiomarkerStatus::Suboptimal
        } else {
            BiomarkerStatus::Optimal
        }
    }
}

const fn rule(
    key: &'static str,
    id: BiomarkerId,
    range: &'static str,
    min: f64,
    max: f64,
) -> ToleranceRule {
    ToleranceRule {
        key,
        aliases: &[],
        id,
        range,
        min,
        max,
    }
}

pub static TOLERANCE_RULES: [ToleranceRule; 17] = [
    rule("hemoglobin", BiomarkerId::Hemoglobin, "13.5–17.5 g/dL", 13.5, 17.5),
    rule("wbc", BiomarkerId::Wbc, "4.0–11.0 x10⁹/L", 4.0, 11.0),
    rule("platelets", BiomarkerId::Platelets, "150–450 x10⁹/L", 150.0, 450.0),
    rule("rbc", BiomarkerId::Rbc, "4.5–5.9 x10⁶/µL", 4.5, 5.9),
    rule("hematocrit", BiomarkerId::Hematocrit, "41–53%", 41.0, 53.0),
    rule(
        "totalCholesterol",
        BiomarkerId::TotalCholesterol,
        "<200 mg/dL",
        0.0,
        200.0,
    ),
    rule("ldl", BiomarkerId::Ldl, "<130 mg/dL", 0.0, 130.0),
    rule("hdl", BiomarkerId::Hdl, ">40 mg/dL", 40.0, 100.0),
    rule("triglycerides", BiomarkerId::Triglycerides, "<150 mg/dL", 0.0, 150.0),
    rule("glucose", BiomarkerId::Glucose, "70–99 mg/dL", 70.0, 99.0),
    rule("calcium", BiomarkerId::Calcium, "8.6–10.2 mg/dL", 8.6, 10.2),
    rule("sodium", BiomarkerId::Sodium, "135–145 mmol/L", 135.0, 145.0),
    rule("potassium", BiomarkerId::Potassium, "3.5–5.0 mmol/L", 3.5, 5.0),
    rule("creatinine", BiomarkerId::Creatinine, "0.7–1.3 mg/dL", 0.7, 1.3),
    ToleranceRule {
        aliases: &["egfr"],
        ..rule("eGFR", BiomarkerId::Egfr, ">60 mL/min", 60.0, 120.0)
    },
    rule("alt", BiomarkerId::Alt, "7–56 U/L", 7.0, 56.0),
    rule("albumin", BiomarkerId::Albumin, "3.4–5.4 g/dL", 3.4, 5.4),
];

/// Rule for a backend key or one of its aliases.
pub fn tolerance_rule(key: &str) -> Option<&'static ToleranceRule> {
    TOLERANCE_RULES.iter().find(|rule| rule.matches(key))
}
