//! Manual lab entry.
//!
//! A submission is a set of `field → raw text` pairs as typed into the entry
//! form. Blank fields are "not tested" and skipped; everything else must be a
//! finite number for a known biomarker.

use std::collections::BTreeMap;

use tracing::debug;

use vitals_model::{BiomarkerId, BiomarkerMapping, parse_numeric};

use crate::error::{IngestError, Result};

/// Validate a form submission into a mapping.
///
/// Fails on the first unknown field or unparseable value, and when no field
/// carries a value at all.
pub fn parse_submission<'a, I>(fields: I) -> Result<BiomarkerMapping>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut mapping = BiomarkerMapping::new();
    for (field, raw) in fields {
        let Some(id) = BiomarkerId::from_key(field) else {
            return Err(IngestError::UnknownField {
                field: field.to_string(),
            });
        };
        if raw.trim().is_empty() {
            continue;
        }
        let value = parse_numeric(raw).ok_or_else(|| IngestError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })?;
        mapping.insert(id.as_str(), value);
    }
    if mapping.is_empty() {
        return Err(IngestError::EmptySubmission);
    }
    debug!(fields = mapping.len(), "accepted manual submission");
    Ok(mapping)
}

/// Form text for every known value of a mapping, for pre-filling.
///
/// Unknown keys are not form fields and are left out.
pub fn prefill(mapping: &BiomarkerMapping) -> BTreeMap<String, String> {
    mapping
        .known()
        .map(|(id, value)| (id.as_str().to_string(), value.to_string()))
        .collect()
}
