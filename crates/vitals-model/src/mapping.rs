//! Sparse biomarker key → value mapping.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::biomarker::BiomarkerId;

/// Sparse mapping from biomarker key to measured value.
///
/// A missing key means "not tested". Keys are kept verbatim so a mapping read
/// back from storage round-trips unchanged even when it carries keys outside
/// the known set; evaluation simply skips those. Entries keep insertion order,
/// and replacing a value keeps the key's original position.
#[derive(Debug, Clone, Default)]
pub struct BiomarkerMapping {
    values: Vec<(String, f64)>,
}

impl BiomarkerMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        let key = key.into();
        match self.values.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.values.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values
            .iter()
            .find_map(|(existing, value)| (existing == key).then_some(*value))
    }

    /// Value recorded for a known biomarker.
    pub fn value_of(&self, id: BiomarkerId) -> Option<f64> {
        self.get(id.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All entries in insertion order, including unknown keys.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(key, value)| (key.as_str(), *value))
    }

    /// Entries whose key is a known biomarker, in table order.
    pub fn known(&self) -> impl Iterator<Item = (BiomarkerId, f64)> + '_ {
        BiomarkerId::all()
            .iter()
            .filter_map(|id| self.value_of(*id).map(|value| (*id, value)))
    }

    /// Keys that do not name a known biomarker.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .map(|(key, _)| key.as_str())
            .filter(|key| BiomarkerId::from_key(key).is_none())
    }
}

impl PartialEq for BiomarkerMapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for BiomarkerMapping {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl Serialize for BiomarkerMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BiomarkerMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = BiomarkerMapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of biomarker values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut mapping = BiomarkerMapping::new();
                while let Some((key, value)) = access.next_entry::<String, f64>()? {
                    mapping.insert(key, value);
                }
                Ok(mapping)
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}
