//! Reference range tables for biomarker classification.
//!
//! Two independent tables back two displays and are never merged:
//!
//! - [`strict`]: three-tier optimal/suboptimal bands used for entered and
//!   extracted results and for the overall status.
//! - [`tolerance`]: `[min, max]` intervals widened by 10% used for the
//!   backend's stored lab panels.

pub mod band;
pub mod strict;
pub mod tolerance;

pub use band::{Band, Bound, any_contains, format_bands};
pub use strict::{STRICT_RULES, StrictRule, strict_rule, strict_rule_for};
pub use tolerance::{
    LOWER_TOLERANCE, TOLERANCE_RULES, ToleranceRule, UPPER_TOLERANCE, tolerance_rule,
};
