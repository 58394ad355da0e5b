//! Numeric bands with explicit inclusive/exclusive bounds.
//!
//! Every rule in the strict table is plain data built from these types, so a
//! table can be printed, serialized and tested without running any closure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One end of a band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Bound {
    Unbounded,
    Inclusive(f64),
    Exclusive(f64),
}

impl Bound {
    fn admits_from_below(&self, value: f64) -> bool {
        match *self {
            Self::Unbounded => true,
            Self::Inclusive(bound) => value >= bound,
            Self::Exclusive(bound) => value > bound,
        }
    }

    fn admits_from_above(&self, value: f64) -> bool {
        match *self {
            Self::Unbounded => true,
            Self::Inclusive(bound) => value <= bound,
            Self::Exclusive(bound) => value < bound,
        }
    }
}

/// Contiguous interval between a lower and an upper [`Bound`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub lower: Bound,
    pub upper: Bound,
}

impl Band {
    pub const fn new(lower: Bound, upper: Bound) -> Self {
        Self { lower, upper }
    }

    /// `[lo, hi]`
    pub const fn closed(lo: f64, hi: f64) -> Self {
        Self::new(Bound::Inclusive(lo), Bound::Inclusive(hi))
    }

    /// `[lo, hi)`
    pub const fn closed_open(lo: f64, hi: f64) -> Self {
        Self::new(Bound::Inclusive(lo), Bound::Exclusive(hi))
    }

    /// `(lo, hi]`
    pub const fn open_closed(lo: f64, hi: f64) -> Self {
        Self::new(Bound::Exclusive(lo), Bound::Inclusive(hi))
    }

    /// `(lo, hi)`
    pub const fn open(lo: f64, hi: f64) -> Self {
        Self::new(Bound::Exclusive(lo), Bound::Exclusive(hi))
    }

    /// `(-∞, hi)`
    pub const fn below(hi: f64) -> Self {
        Self::new(Bound::Unbounded, Bound::Exclusive(hi))
    }

    /// `(lo, ∞)`
    pub const fn above(lo: f64) -> Self {
        Self::new(Bound::Exclusive(lo), Bound::Unbounded)
    }

    /// Whether `value` lies inside the band. `NaN` is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.lower.admits_from_below(value) && self.upper.admits_from_above(value)
    }
}

/// Whether any band of a union contains `value`.
pub fn any_contains(bands: &[Band], value: f64) -> bool {
    bands.iter().any(|band| band.contains(value))
}

/// Render a union of bands in interval notation, e.g. `[3, 4) ∪ (8, 10]`.
pub fn format_bands(bands: &[Band]) -> String {
    if bands.is_empty() {
        return "∅".to_string();
    }
    bands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ∪ ")
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Bound::Unbounded => write!(f, "(-∞")?,
            Bound::Inclusive(lo) => write!(f, "[{lo}")?,
            Bound::Exclusive(lo) => write!(f, "({lo}")?,
        }
        match self.upper {
            Bound::Unbounded => write!(f, ", ∞)"),
            Bound::Inclusive(hi) => write!(f, ", {hi}]"),
            Bound::Exclusive(hi) => write!(f, ", {hi})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_band_includes_edges() {
        let band = Band::closed(4.0, 8.0);
        assert!(band.contains(4.0));
        assert!(band.contains(8.0));
        assert!(!band.contains(3.999));
        assert!(!band.contains(8.001));
    }

    #[test]
    fn open_edges_are_excluded() {
        assert!(!Band::closed_open(3.0, 4.0).contains(4.0));
        assert!(!Band::open_closed(8.0, 10.0).contains(8.0));
        assert!(Band::open_closed(8.0, 10.0).contains(10.0));
        assert!(!Band::open(90.0, 100.0).contains(100.0));
    }

    #[test]
    fn half_lines() {
        assert!(Band::below(25.0).contains(-1000.0));
        assert!(!Band::below(25.0).contains(25.0));
        assert!(Band::above(90.0).contains(1.0e9));
        assert!(!Band::above(90.0).contains(90.0));
    }

    #[test]
    fn nan_is_never_contained() {
        assert!(!Band::new(Bound::Unbounded, Bound::Inclusive(1.0)).contains(f64::NAN));
        assert!(!Band::closed(0.0, 1.0).contains(f64::NAN));
    }

    #[test]
    fn interval_notation() {
        let bands = [Band::closed_open(3.0, 4.0), Band::open_closed(8.0, 10.0)];
        assert_eq!(format_bands(&bands), "[3, 4) ∪ (8, 10]");
        assert_eq!(Band::below(25.0).to_string(), "(-∞, 25)");
        assert_eq!(Band::above(60.0).to_string(), "(60, ∞)");
        assert_eq!(format_bands(&[]), "∅");
    }

    #[test]
    fn bound_serializes_tagged() {
        let json = serde_json::to_string(&Band::closed_open(3.0, 4.5)).unwrap();
        assert_eq!(
            json,
            r#"{"lower":{"kind":"inclusive","value":3.0},"upper":{"kind":"exclusive","value":4.5}}"#
        );
    }
}
