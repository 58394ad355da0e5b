//! Strict three-tier band table.
//!
//! Each biomarker carries an optimal and a suboptimal band union. Grading
//! checks optimal first, then suboptimal; anything else is critical. Bands
//! are inclusive unless written with `open`, `below` or `above`.

use serde::Serialize;

use vitals_model::{BiomarkerId, BiomarkerStatus, Panel};

use crate::band::{Band, any_contains};

/// Reference rule for one biomarker in the strict table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrictRule {
    pub id: BiomarkerId,
    pub display_name: &'static str,
    pub unit: &'static str,
    /// Optimal range as shown to users.
    pub range: &'static str,
    pub optimal: &'static [Band],
    pub suboptimal: &'static [Band],
    pub panel: Panel,
}

impl StrictRule {
    /// Grade a finite value. Optimal wins where bands overlap.
    pub fn grade(&self, value: f64) -> BiomarkerStatus {
        if any_contains(self.optimal, value) {
            BiomarkerStatus::Optimal
        } else if any_contains(self.suboptimal, value) {
            BiomarkerStatus::Suboptimal
        } else {
            BiomarkerStatus::Critical
        }
    }
}

const fn rule(
    id: BiomarkerId,
    display_name: &'static str,
    unit: &'static str,
    range: &'static str,
    optimal: &'static [Band],
    suboptimal: &'static [Band],
    panel: Panel,
) -> StrictRule {
    StrictRule {
        id,
        display_name,
        unit,
        range,
        optimal,
        suboptimal,
        panel,
    }
}

/// Strict rule table in [`BiomarkerId::all`] order.
pub static STRICT_RULES: [StrictRule; 17] = [
    // CBC
    rule(
        BiomarkerId::Wbc,
        "WBC",
        "×10⁹/L",
        "4.0-8.0",
        &[Band::closed(4.0, 8.0)],
        &[Band::closed_open(3.0, 4.0), Band::open_closed(8.0, 10.0)],
        Panel::Cbc,
    ),
    rule(
        BiomarkerId::Rbc,
        "RBC",
        "×10¹²/L",
        "4.2-5.5",
        &[Band::closed(4.2, 5.5)],
        &[Band::closed_open(3.8, 4.2), Band::open_closed(5.5, 6.0)],
        Panel::Cbc,
    ),
    rule(
        BiomarkerId::Hemoglobin,
        "Hemoglobin",
        "g/dL",
        "12-16.5",
        &[Band::closed(12.0, 16.5)],
        &[Band::closed_open(11.0, 12.0), Band::open_closed(16.5, 18.0)],
        Panel::Cbc,
    ),
    rule(
        BiomarkerId::Hematocrit,
        "Hematocrit",
        "%",
        "36-50",
        &[Band::closed(36.0, 50.0)],
        &[Band::closed_open(30.0, 36.0), Band::open_closed(50.0, 55.0)],
        Panel::Cbc,
    ),
    rule(
        BiomarkerId::Platelets,
        "Platelets",
        "×10⁹/L",
        "150-350",
        &[Band::closed(150.0, 350.0)],
        &[Band::closed_open(120.0, 150.0), Band::open_closed(350.0, 450.0)],
        Panel::Cbc,
    ),
    // CMP
    rule(
        BiomarkerId::Glucose,
        "Glucose (fasting)",
        "mg/dL",
        "75-90",
        &[Band::closed(75.0, 90.0)],
        &[Band::closed_open(65.0, 75.0), Band::open(90.0, 100.0)],
        Panel::Cmp,
    ),
    rule(
        BiomarkerId::Creatinine,
        "Creatinine",
        "mg/dL",
        "0.6-1.1",
        &[Band::closed(0.6, 1.1)],
        &[Band::open_closed(1.1, 1.3)],
        Panel::Cmp,
    ),
    rule(
        BiomarkerId::Egfr,
        "eGFR",
        "mL/min",
        ">90",
        &[Band::above(90.0)],
        &[Band::closed(60.0, 90.0)],
        Panel::Cmp,
    ),
    rule(
        BiomarkerId::Sodium,
        "Sodium",
        "mmol/L",
        "137-142",
        &[Band::closed(137.0, 142.0)],
        &[Band::closed_open(133.0, 137.0), Band::open_closed(142.0, 145.0)],
        Panel::Cmp,
    ),
    rule(
        BiomarkerId::Potassium,
        "Potassium",
        "mmol/L",
        "4.0-4.8",
        &[Band::closed(4.0, 4.8)],
        &[Band::closed_open(3.6, 4.0), Band::open_closed(4.8, 5.1)],
        Panel::Cmp,
    ),
    rule(
        BiomarkerId::Calcium,
        "Calcium",
        "mg/dL",
        "9.2-10.0",
        &[Band::closed(9.2, 10.0)],
        &[Band::closed_open(8.8, 9.2), Band::open_closed(10.0, 10.4)],
        Panel::Cmp,
    ),
    rule(
        BiomarkerId::Alt,
        "ALT",
        "U/L",
        "<25",
        &[Band::below(25.0)],
        &[Band::closed(25.0, 40.0)],
        Panel::Cmp,
    ),
    rule(
        BiomarkerId::Albumin,
        "Albumin",
        "g/dL",
        "4.2-5.0",
        &[Band::closed(4.2, 5.0)],
        &[Band::closed_open(3.8, 4.2)],
        Panel::Cmp,
    ),
    // Lipid panel
    rule(
        BiomarkerId::TotalCholesterol,
        "Total Cholesterol",
        "mg/dL",
        "150-180",
        &[Band::closed(150.0, 180.0)],
        &[Band::open(180.0, 200.0)],
        Panel::LipidPanel,
    ),
    rule(
        BiomarkerId::Ldl,
        "LDL",
        "mg/dL",
        "<100",
        &[Band::below(100.0)],
        &[Band::closed_open(100.0, 130.0)],
        Panel::LipidPanel,
    ),
    rule(
        BiomarkerId::Hdl,
        "HDL",
        "mg/dL",
        ">60",
        &[Band::above(60.0)],
        &[Band::closed(45.0, 60.0)],
        Panel::LipidPanel,
    ),
    rule(
        BiomarkerId::Triglycerides,
        "Triglycerides",
        "mg/dL",
        "<90",
        &[Band::below(90.0)],
        &[Band::closed(90.0, 130.0)],
        Panel::LipidPanel,
    ),
];

/// Rule for a known biomarker.
pub fn strict_rule_for(id: BiomarkerId) -> &'static StrictRule {
    // Table order matches `BiomarkerId::all()`, checked in tests.
    &STRICT_RULES[id as usize]
}

/// Rule for a mapping key; `None` when the key is not in the table.
pub fn strict_rule(key: &str) -> Option<&'static StrictRule> {
    BiomarkerId::from_key(key).map(strict_rule_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_identifier_order() {
        for (rule, id) in STRICT_RULES.iter().zip(BiomarkerId::all()) {
            assert_eq!(rule.id, *id);
            assert_eq!(strict_rule_for(*id).id, *id);
            assert_eq!(rule.panel, id.panel());
        }
    }

    #[test]
    fn unknown_key_has_no_rule() {
        assert!(strict_rule("unknown-id").is_none());
        assert!(strict_rule("eGFR").is_none());
        assert_eq!(strict_rule("ldl").map(|r| r.display_name), Some("LDL"));
    }

    #[test]
    fn grades_in_priority_order() {
        let wbc = strict_rule_for(BiomarkerId::Wbc);
        assert_eq!(wbc.grade(4.0), BiomarkerStatus::Optimal);
        assert_eq!(wbc.grade(3.0), BiomarkerStatus::Suboptimal);
        assert_eq!(wbc.grade(10.0), BiomarkerStatus::Suboptimal);
        assert_eq!(wbc.grade(10.01), BiomarkerStatus::Critical);
        assert_eq!(wbc.grade(2.99), BiomarkerStatus::Critical);
    }

    #[test]
    fn optimal_wins_on_overlap() {
        const OPTIMAL: &[Band] = &[Band::closed(1.0, 5.0)];
        const SUBOPTIMAL: &[Band] = &[Band::closed(4.0, 8.0)];
        let overlapping = StrictRule {
            optimal: OPTIMAL,
            suboptimal: SUBOPTIMAL,
            ..*strict_rule_for(BiomarkerId::Wbc)
        };
        assert_eq!(overlapping.grade(4.5), BiomarkerStatus::Optimal);
        assert_eq!(overlapping.grade(6.0), BiomarkerStatus::Suboptimal);
    }

    #[test]
    fn one_sided_rules() {
        let egfr = strict_rule_for(BiomarkerId::Egfr);
        assert_eq!(egfr.grade(90.0), BiomarkerStatus::Suboptimal);
        assert_eq!(egfr.grade(90.5), BiomarkerStatus::Optimal);
        assert_eq!(egfr.grade(59.9), BiomarkerStatus::Critical);

        let ldl = strict_rule_for(BiomarkerId::Ldl);
        assert_eq!(ldl.grade(0.0), BiomarkerStatus::Optimal);
        assert_eq!(ldl.grade(130.0), BiomarkerStatus::Critical);
    }

    #[test]
    fn table_serializes() {
        let json = serde_json::to_value(strict_rule_for(BiomarkerId::Alt)).unwrap();
        assert_eq!(json["id"], "alt");
        assert_eq!(json["panel"], "CMP");
        assert_eq!(json["optimal"][0]["lower"]["kind"], "unbounded");
    }
}
