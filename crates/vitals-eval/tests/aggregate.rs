//! Integration tests for classification and aggregation.

use insta::assert_json_snapshot;
use proptest::prelude::*;

use vitals_eval::{
    Evaluation, classify, classify_tolerance, evaluate, overall_status, overall_status_of,
};
use vitals_model::{
    BiomarkerId, BiomarkerMapping, BiomarkerResult, BiomarkerStatus, OverallStatus, PanelValue,
};

fn severity(status: OverallStatus) -> u8 {
    match status {
        OverallStatus::NoData => 0,
        OverallStatus::Optimal => 1,
        OverallStatus::Suboptimal => 2,
        OverallStatus::Critical => 3,
    }
}

fn entries() -> impl Strategy<Value = Vec<(usize, f64)>> {
    prop::collection::vec((0usize..BiomarkerId::all().len(), 0.0f64..500.0), 0..12)
}

fn results_of(entries: &[(usize, f64)]) -> Vec<BiomarkerResult> {
    entries
        .iter()
        .filter_map(|(index, value)| classify(BiomarkerId::all()[*index].as_str(), Some(*value)))
        .collect()
}

fn to_mapping(entries: &[(usize, f64)]) -> BiomarkerMapping {
    entries
        .iter()
        .map(|(index, value)| (BiomarkerId::all()[*index].as_str(), *value))
        .collect()
}

proptest! {
    #[test]
    fn overall_is_worst_individual_status(entries in entries()) {
        let mapping = to_mapping(&entries);
        let worst = mapping
            .iter()
            .filter_map(|(key, value)| classify(key, Some(value)))
            .map(|result| result.status)
            .max()
            .map_or(OverallStatus::NoData, OverallStatus::from);
        prop_assert_eq!(overall_status(Some(&mapping)), worst);
    }

    #[test]
    fn overall_of_results_ignores_their_order(
        (results, shuffled) in entries()
            .prop_map(|entries| results_of(&entries))
            .prop_flat_map(|results| (Just(results.clone()), Just(results).prop_shuffle())),
    ) {
        prop_assert_eq!(overall_status_of(&results), overall_status_of(&shuffled));
    }

    #[test]
    fn mapping_insertion_order_does_not_matter(entries in entries()) {
        let mut seen = std::collections::BTreeSet::new();
        let mut unique = entries.clone();
        unique.retain(|(index, _)| seen.insert(*index));
        let forward = to_mapping(&unique);
        unique.reverse();
        let reversed = to_mapping(&unique);
        prop_assert_eq!(overall_status(Some(&forward)), overall_status(Some(&reversed)));
        prop_assert_eq!(evaluate(&forward), evaluate(&reversed));
    }

    #[test]
    fn adding_a_biomarker_never_improves_status(
        entries in entries(),
        extra in (0usize..BiomarkerId::all().len(), 0.0f64..500.0),
    ) {
        let base = to_mapping(&entries);
        let id = BiomarkerId::all()[extra.0];
        prop_assume!(base.value_of(id).is_none());
        let mut extended = base.clone();
        extended.insert(id.as_str(), extra.1);
        prop_assert!(
            severity(overall_status(Some(&extended))) >= severity(overall_status(Some(&base)))
        );
    }

    #[test]
    fn classify_is_idempotent(index in 0usize..BiomarkerId::all().len(), value in -50.0f64..500.0) {
        let key = BiomarkerId::all()[index].as_str();
        prop_assert_eq!(classify(key, Some(value)), classify(key, Some(value)));
    }
}

#[test]
fn documented_examples() {
    let wbc: BiomarkerMapping = [("wbc", 6.0)].into_iter().collect();
    assert_eq!(overall_status(Some(&wbc)), OverallStatus::Optimal);

    let wbc_ldl: BiomarkerMapping = [("wbc", 6.0), ("ldl", 150.0)].into_iter().collect();
    assert_eq!(overall_status(Some(&wbc_ldl)), OverallStatus::Critical);

    let glucose: BiomarkerMapping = [("glucose", 95.0)].into_iter().collect();
    assert_eq!(overall_status(Some(&glucose)), OverallStatus::Suboptimal);

    assert_eq!(overall_status(None), OverallStatus::NoData);
    assert_eq!(overall_status(Some(&BiomarkerMapping::new())), OverallStatus::NoData);

    assert!(classify("wbc", None).is_none());
    assert!(classify("unknown-id", Some(5.0)).is_none());

    let low = classify_tolerance("hemoglobin", &PanelValue::Number(13.0));
    assert_eq!(low.status, BiomarkerStatus::Suboptimal);
    let very_low = classify_tolerance("hemoglobin", &PanelValue::Number(11.0));
    assert_eq!(very_low.status, BiomarkerStatus::Critical);
}

#[test]
fn boundary_values_follow_table_edges() {
    let cases = [
        ("wbc", 8.0, BiomarkerStatus::Optimal),
        ("wbc", 8.5, BiomarkerStatus::Suboptimal),
        ("glucose", 90.0, BiomarkerStatus::Optimal),
        ("glucose", 100.0, BiomarkerStatus::Critical),
        ("creatinine", 0.59, BiomarkerStatus::Critical),
        ("creatinine", 1.3, BiomarkerStatus::Suboptimal),
        ("egfr", 60.0, BiomarkerStatus::Suboptimal),
        ("alt", 25.0, BiomarkerStatus::Suboptimal),
        ("alt", 40.5, BiomarkerStatus::Critical),
        ("albumin", 5.1, BiomarkerStatus::Critical),
        ("totalCholesterol", 180.0, BiomarkerStatus::Optimal),
        ("totalCholesterol", 200.0, BiomarkerStatus::Critical),
        ("totalCholesterol", 149.0, BiomarkerStatus::Critical),
        ("hdl", 60.0, BiomarkerStatus::Suboptimal),
        ("hdl", 61.0, BiomarkerStatus::Optimal),
        ("triglycerides", 130.0, BiomarkerStatus::Suboptimal),
    ];
    for (key, value, expected) in cases {
        let result = classify(key, Some(value)).expect("known biomarker");
        assert_eq!(result.status, expected, "{key} = {value}");
    }
}

#[test]
fn evaluation_snapshot() {
    let mapping: BiomarkerMapping = [("ldl", 110.0), ("ferritin", 80.0), ("sodium", 140.0)]
        .into_iter()
        .collect();
    assert_json_snapshot!(Evaluation::of(&mapping), @r#"
    {
      "results": [
        {
          "id": "sodium",
          "name": "Sodium",
          "value": 140.0,
          "unit": "mmol/L",
          "status": "optimal",
          "range": "137-142",
          "category": "CMP"
        },
        {
          "id": "ldl",
          "name": "LDL",
          "value": 110.0,
          "unit": "mg/dL",
          "status": "suboptimal",
          "range": "<100",
          "category": "Lipid Panel"
        }
      ],
      "overall": "suboptimal",
      "skipped": [
        "ferritin"
      ]
    }
    "#);
}
