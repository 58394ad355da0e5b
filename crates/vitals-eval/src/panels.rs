//! Tolerance-scaled evaluation of backend lab panels.

use serde::Serialize;

use vitals_model::{CREATED_AT_KEY, PanelData, PanelValue, RangeEvaluation, UserPanels};

use crate::classify::classify_tolerance;

/// One displayed row of a backend panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRow {
    pub key: String,
    pub value: PanelValue,
    pub evaluation: RangeEvaluation,
}

/// Evaluated backend panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelReport {
    pub title: String,
    pub rows: Vec<PanelRow>,
    /// Raw `createdAt` value, if the panel carried one.
    pub created_at: Option<String>,
}

/// Evaluate every entry of a panel except its `createdAt` stamp.
pub fn evaluate_panel(title: &str, panel: &PanelData) -> PanelReport {
    let rows = panel
        .iter()
        .filter(|(key, _)| key.as_str() != CREATED_AT_KEY)
        .map(|(key, value)| PanelRow {
            key: key.clone(),
            value: value.clone(),
            evaluation: classify_tolerance(key, value),
        })
        .collect();
    let created_at = panel
        .get(CREATED_AT_KEY)
        .filter(|value| !matches!(value, PanelValue::Null))
        .map(ToString::to_string);
    PanelReport {
        title: title.to_string(),
        rows,
        created_at,
    }
}

/// Evaluate all present panels of a user, in display order.
pub fn evaluate_user_panels(user: &UserPanels) -> Vec<PanelReport> {
    user.panels()
        .into_iter()
        .map(|(title, panel)| evaluate_panel(title, panel))
        .collect()
}
