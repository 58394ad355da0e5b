//! On-disk storage document.
//!
//! ```text
//! {
//!   "state": { "biomarkerData": { "wbc": 6.2, ... } | null },
//!   "version": 0
//! }
//! ```

use serde::{Deserialize, Serialize};

use vitals_model::BiomarkerMapping;

/// Fixed storage name; the file backend stores `<name>.json`.
pub const STORAGE_NAME: &str = "biomarker-storage";

/// Highest schema version this build reads and the one it writes.
pub const CURRENT_SCHEMA_VERSION: u32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageEnvelope {
    pub state: StoredState,
    pub version: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredState {
    #[serde(default)]
    pub biomarker_data: Option<BiomarkerMapping>,
}

impl StorageEnvelope {
    pub fn new(biomarker_data: Option<BiomarkerMapping>) -> Self {
        Self {
            state: StoredState { biomarker_data },
            version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn into_mapping(self) -> Option<BiomarkerMapping> {
        self.state.biomarker_data
    }
}

/// Only the version, read before the full document.
#[derive(Debug, Deserialize)]
pub(crate) struct VersionProbe {
    #[serde(default)]
    pub version: u32,
}
