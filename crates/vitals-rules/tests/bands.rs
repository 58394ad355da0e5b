//! Property tests for the strict band table.

use proptest::prelude::*;

use vitals_model::BiomarkerStatus;
use vitals_rules::{Band, Bound, STRICT_RULES, strict_rule};

/// A point strictly inside `band`, chosen by `t` in `(0, 1)`.
fn point_inside(band: &Band, t: f64) -> f64 {
    let edge = |bound: Bound| match bound {
        Bound::Inclusive(v) | Bound::Exclusive(v) => Some(v),
        Bound::Unbounded => None,
    };
    match (edge(band.lower), edge(band.upper)) {
        (Some(lo), Some(hi)) => lo + t * (hi - lo),
        (Some(lo), None) => lo + 0.01 + t * 500.0,
        (None, Some(hi)) => hi - 0.01 - t * 500.0,
        (None, None) => t,
    }
}

proptest! {
    #[test]
    fn values_inside_optimal_bands_are_optimal(
        index in 0usize..STRICT_RULES.len(),
        t in 0.01f64..0.99,
    ) {
        let rule = &STRICT_RULES[index];
        for band in rule.optimal {
            let value = point_inside(band, t);
            prop_assert_eq!(
                rule.grade(value),
                BiomarkerStatus::Optimal,
                "{} = {}", rule.display_name, value
            );
        }
    }

    #[test]
    fn values_inside_suboptimal_bands_are_suboptimal(
        index in 0usize..STRICT_RULES.len(),
        t in 0.01f64..0.99,
    ) {
        let rule = &STRICT_RULES[index];
        for band in rule.suboptimal {
            let value = point_inside(band, t);
            prop_assert_eq!(
                rule.grade(value),
                BiomarkerStatus::Suboptimal,
                "{} = {}", rule.display_name, value
            );
        }
    }

    #[test]
    fn grading_is_idempotent(index in 0usize..STRICT_RULES.len(), value in -1000.0f64..1000.0) {
        let rule = &STRICT_RULES[index];
        prop_assert_eq!(rule.grade(value), rule.grade(value));
    }
}

#[test]
fn far_outside_values_are_critical() {
    let lows = ["wbc", "rbc", "hemoglobin", "hematocrit", "platelets", "glucose", "sodium"];
    for rule in STRICT_RULES.iter().filter(|r| lows.contains(&r.id.as_str())) {
        assert_eq!(rule.grade(-1.0), BiomarkerStatus::Critical, "{}", rule.display_name);
        assert_eq!(rule.grade(10_000.0), BiomarkerStatus::Critical, "{}", rule.display_name);
    }
}

#[test]
fn every_row_grades_its_published_edges() {
    use BiomarkerStatus::{Critical as C, Optimal as O, Suboptimal as S};

    let rows: [(&str, &[(f64, BiomarkerStatus)]); 17] = [
        ("wbc", &[(2.99, C), (3.0, S), (3.99, S), (4.0, O), (8.0, O), (8.01, S), (10.0, S), (10.01, C)]),
        ("rbc", &[(3.79, C), (3.8, S), (4.19, S), (4.2, O), (5.5, O), (5.51, S), (6.0, S), (6.01, C)]),
        ("hemoglobin", &[(10.99, C), (11.0, S), (11.99, S), (12.0, O), (16.5, O), (16.51, S), (18.0, S), (18.01, C)]),
        ("hematocrit", &[(29.99, C), (30.0, S), (35.99, S), (36.0, O), (50.0, O), (50.01, S), (55.0, S), (55.01, C)]),
        ("platelets", &[(119.99, C), (120.0, S), (149.99, S), (150.0, O), (350.0, O), (350.01, S), (450.0, S), (450.01, C)]),
        ("glucose", &[(64.99, C), (65.0, S), (74.99, S), (75.0, O), (90.0, O), (90.01, S), (99.99, S), (100.0, C)]),
        ("creatinine", &[(0.59, C), (0.6, O), (1.1, O), (1.11, S), (1.3, S), (1.31, C)]),
        ("egfr", &[(59.99, C), (60.0, S), (90.0, S), (90.01, O), (1000.0, O)]),
        ("sodium", &[(132.99, C), (133.0, S), (136.99, S), (137.0, O), (142.0, O), (142.01, S), (145.0, S), (145.01, C)]),
        ("potassium", &[(3.59, C), (3.6, S), (3.99, S), (4.0, O), (4.8, O), (4.81, S), (5.1, S), (5.11, C)]),
        ("calcium", &[(8.79, C), (8.8, S), (9.19, S), (9.2, O), (10.0, O), (10.01, S), (10.4, S), (10.41, C)]),
        ("alt", &[(0.0, O), (24.99, O), (25.0, S), (40.0, S), (40.01, C)]),
        ("albumin", &[(3.79, C), (3.8, S), (4.19, S), (4.2, O), (5.0, O), (5.01, C)]),
        ("totalCholesterol", &[(149.99, C), (150.0, O), (180.0, O), (180.01, S), (199.99, S), (200.0, C)]),
        ("ldl", &[(0.0, O), (99.99, O), (100.0, S), (129.99, S), (130.0, C)]),
        ("hdl", &[(44.99, C), (45.0, S), (60.0, S), (60.01, O), (150.0, O)]),
        ("triglycerides", &[(0.0, O), (89.99, O), (90.0, S), (130.0, S), (130.01, C)]),
    ];

    for (key, cases) in rows {
        let rule = strict_rule(key).unwrap_or_else(|| panic!("{key} missing from table"));
        for &(value, expected) in cases {
            assert_eq!(rule.grade(value), expected, "{key} = {value}");
        }
    }
}
