//! Tests for vitals-model types.

use insta::assert_json_snapshot;

use vitals_model::{
    BiomarkerId, BiomarkerMapping, BiomarkerResult, BiomarkerStatus, OverallStatus, Panel,
};

fn wbc_result() -> BiomarkerResult {
    BiomarkerResult {
        id: BiomarkerId::Wbc,
        name: "WBC".to_string(),
        value: 6.0,
        unit: "×10⁹/L".to_string(),
        status: BiomarkerStatus::Optimal,
        range: "4.0-8.0".to_string(),
        category: Panel::Cbc,
    }
}

#[test]
fn result_serializes_with_panel_label() {
    assert_json_snapshot!(wbc_result(), @r#"
    {
      "id": "wbc",
      "name": "WBC",
      "value": 6.0,
      "unit": "×10⁹/L",
      "status": "optimal",
      "range": "4.0-8.0",
      "category": "CBC"
    }
    "#);
}

#[test]
fn result_display_helpers() {
    let result = wbc_result();
    assert_eq!(result.value_with_unit(), "6 ×10⁹/L");
    assert_eq!(result.range_with_unit(), "4.0-8.0 ×10⁹/L");
}

#[test]
fn mapping_round_trips_unknown_keys() {
    let json = r#"{"wbc":6.0,"vitaminD":30.0}"#;
    let mapping: BiomarkerMapping = serde_json::from_str(json).expect("parse mapping");
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.known().count(), 1);
    let back = serde_json::to_string(&mapping).expect("serialize mapping");
    assert_eq!(back, json);
}

#[test]
fn overall_status_from_worst_biomarker() {
    let worst = [
        BiomarkerStatus::Suboptimal,
        BiomarkerStatus::Optimal,
        BiomarkerStatus::Suboptimal,
    ]
    .into_iter()
    .max()
    .map(OverallStatus::from);
    assert_eq!(worst, Some(OverallStatus::Suboptimal));
    assert!(OverallStatus::Suboptimal.has_data());
    assert!(!OverallStatus::NoData.has_data());
}
