//! Mapping-level evaluation and the worst-case overall status.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use vitals_model::{BiomarkerMapping, BiomarkerResult, OverallStatus, Panel};

use crate::classify::classify;

/// Classify every entry of a mapping with the strict table.
///
/// Entries that cannot be classified are dropped. Results come back in table
/// order regardless of the mapping's key order.
pub fn evaluate(mapping: &BiomarkerMapping) -> Vec<BiomarkerResult> {
    let mut results: Vec<BiomarkerResult> = mapping
        .iter()
        .filter_map(|(key, value)| classify(key, Some(value)))
        .collect();
    results.sort_by_key(|result| result.id);
    results
}

/// Reduce a set of results to the worst status, or `NoData` when empty.
pub fn overall_status_of(results: &[BiomarkerResult]) -> OverallStatus {
    results
        .iter()
        .map(|result| result.status)
        .max()
        .map_or(OverallStatus::NoData, OverallStatus::from)
}

/// Overall health status of a mapping.
///
/// Critical beats suboptimal beats optimal. An absent mapping, an empty one,
/// or one with nothing classifiable yields [`OverallStatus::NoData`].
pub fn overall_status(mapping: Option<&BiomarkerMapping>) -> OverallStatus {
    let Some(mapping) = mapping else {
        return OverallStatus::NoData;
    };
    let status = overall_status_of(&evaluate(mapping));
    debug!(entries = mapping.len(), status = %status, "computed overall status");
    status
}

/// Group results under their panel, panels in display order.
pub fn group_by_panel(results: &[BiomarkerResult]) -> BTreeMap<Panel, Vec<BiomarkerResult>> {
    let mut grouped: BTreeMap<Panel, Vec<BiomarkerResult>> = BTreeMap::new();
    for result in results {
        grouped
            .entry(result.category)
            .or_default()
            .push(result.clone());
    }
    grouped
}

/// Full strict evaluation of a mapping, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub results: Vec<BiomarkerResult>,
    pub overall: OverallStatus,
    /// Keys present in the mapping that were not classified.
    pub skipped: Vec<String>,
}

impl Evaluation {
    pub fn of(mapping: &BiomarkerMapping) -> Self {
        let results = evaluate(mapping);
        let overall = overall_status_of(&results);
        let skipped = mapping
            .iter()
            .map(|(key, _)| key)
            .filter(|key| !results.iter().any(|result| result.id.as_str() == *key))
            .map(str::to_string)
            .collect();
        Self {
            results,
            overall,
            skipped,
        }
    }

    pub fn by_panel(&self) -> BTreeMap<Panel, Vec<BiomarkerResult>> {
        group_by_panel(&self.results)
    }
}
