//! Lab panels as stored by the backend for a user.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::result::PanelValue;

/// Key carrying the panel's creation timestamp instead of a biomarker.
pub const CREATED_AT_KEY: &str = "createdAt";

/// One stored panel: biomarker key → value, plus `createdAt`.
pub type PanelData = BTreeMap<String, PanelValue>;

/// User profile with the latest stored panels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPanels {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_blood_panel: Option<PanelData>,
    #[serde(default)]
    pub user_lipid_panel: Option<PanelData>,
    #[serde(default)]
    pub metabolic_panel: Option<PanelData>,
}

impl UserPanels {
    /// Present panels with their display titles, in display order.
    pub fn panels(&self) -> Vec<(&'static str, &PanelData)> {
        [
            ("Blood Panel", self.user_blood_panel.as_ref()),
            ("Lipid Panel", self.user_lipid_panel.as_ref()),
            ("Metabolic Panel", self.metabolic_panel.as_ref()),
        ]
        .into_iter()
        .filter_map(|(title, panel)| panel.map(|panel| (title, panel)))
        .collect()
    }
}
