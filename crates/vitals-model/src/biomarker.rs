//! Biomarker identifiers and the lab panels they belong to.
//!
//! The identifier set is closed: every key a lab report, form submission or
//! stored mapping can carry maps to exactly one [`BiomarkerId`]. Keys are
//! case-sensitive and use the camelCase spelling of the lab forms
//! (`totalCholesterol`, not `total_cholesterol`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Lab panel a biomarker is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Panel {
    /// Complete Blood Count.
    #[serde(rename = "CBC")]
    Cbc,
    /// Comprehensive Metabolic Panel.
    #[serde(rename = "CMP")]
    Cmp,
    /// Cholesterol and triglycerides.
    #[serde(rename = "Lipid Panel")]
    LipidPanel,
}

impl Panel {
    /// All panels in display order.
    pub const fn all() -> &'static [Self] {
        &[Self::Cbc, Self::Cmp, Self::LipidPanel]
    }

    /// Short label used as the category tag on results.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cbc => "CBC",
            Self::Cmp => "CMP",
            Self::LipidPanel => "Lipid Panel",
        }
    }

    /// Heading shown above the panel's result rows.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Cbc => "Complete Blood Count (CBC)",
            Self::Cmp => "Comprehensive Metabolic Panel (CMP)",
            Self::LipidPanel => "Lipid Panel",
        }
    }

    /// One-line description for entry forms.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Cbc => "White blood cells, red blood cells, and platelets",
            Self::Cmp => "Blood sugar, kidney function, and electrolytes",
            Self::LipidPanel => "Cholesterol and cardiovascular health",
        }
    }

    /// Biomarkers reported under this panel, in table order.
    pub fn biomarkers(&self) -> impl Iterator<Item = BiomarkerId> + '_ {
        BiomarkerId::all()
            .iter()
            .copied()
            .filter(move |id| id.panel() == *self)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier of a supported biomarker.
///
/// Variants are declared in table order (CBC, then CMP, then lipids), which
/// is also the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BiomarkerId {
    Wbc,
    Rbc,
    Hemoglobin,
    Hematocrit,
    Platelets,
    Glucose,
    Creatinine,
    Egfr,
    Sodium,
    Potassium,
    Calcium,
    Alt,
    Albumin,
    TotalCholesterol,
    Ldl,
    Hdl,
    Triglycerides,
}

impl BiomarkerId {
    /// Every supported biomarker in table order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Wbc,
            Self::Rbc,
            Self::Hemoglobin,
            Self::Hematocrit,
            Self::Platelets,
            Self::Glucose,
            Self::Creatinine,
            Self::Egfr,
            Self::Sodium,
            Self::Potassium,
            Self::Calcium,
            Self::Alt,
            Self::Albumin,
            Self::TotalCholesterol,
            Self::Ldl,
            Self::Hdl,
            Self::Triglycerides,
        ]
    }

    /// Mapping key as it appears in forms, stored data and AI replies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wbc => "wbc",
            Self::Rbc => "rbc",
            Self::Hemoglobin => "hemoglobin",
            Self::Hematocrit => "hematocrit",
            Self::Platelets => "platelets",
            Self::Glucose => "glucose",
            Self::Creatinine => "creatinine",
            Self::Egfr => "egfr",
            Self::Sodium => "sodium",
            Self::Potassium => "potassium",
            Self::Calcium => "calcium",
            Self::Alt => "alt",
            Self::Albumin => "albumin",
            Self::TotalCholesterol => "totalCholesterol",
            Self::Ldl => "ldl",
            Self::Hdl => "hdl",
            Self::Triglycerides => "triglycerides",
        }
    }

    /// Exact, case-sensitive key lookup.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == key)
    }

    /// Panel the biomarker is reported under.
    pub fn panel(&self) -> Panel {
        match self {
            Self::Wbc | Self::Rbc | Self::Hemoglobin | Self::Hematocrit | Self::Platelets => {
                Panel::Cbc
            }
            Self::Glucose
            | Self::Creatinine
            | Self::Egfr
            | Self::Sodium
            | Self::Potassium
            | Self::Calcium
            | Self::Alt
            | Self::Albumin => Panel::Cmp,
            Self::TotalCholesterol | Self::Ldl | Self::Hdl | Self::Triglycerides => {
                Panel::LipidPanel
            }
        }
    }
}

impl fmt::Display for BiomarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BiomarkerId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ModelError::UnknownBiomarker(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_key() {
        for id in BiomarkerId::all() {
            assert_eq!(BiomarkerId::from_key(id.as_str()), Some(*id));
        }
        assert_eq!(BiomarkerId::all().len(), 17);
    }

    #[test]
    fn key_lookup_is_case_sensitive() {
        assert_eq!(BiomarkerId::from_key("eGFR"), None);
        assert_eq!(BiomarkerId::from_key("totalcholesterol"), None);
        assert!("unknown-id".parse::<BiomarkerId>().is_err());
    }

    #[test]
    fn serde_uses_mapping_keys() {
        let json = serde_json::to_string(&BiomarkerId::TotalCholesterol).unwrap();
        assert_eq!(json, "\"totalCholesterol\"");
        let panel = serde_json::to_string(&Panel::LipidPanel).unwrap();
        assert_eq!(panel, "\"Lipid Panel\"");
    }

    #[test]
    fn panels_partition_the_identifier_set() {
        let counts: Vec<usize> = Panel::all().iter().map(|p| p.biomarkers().count()).collect();
        assert_eq!(counts, vec![5, 8, 4]);
    }
}
