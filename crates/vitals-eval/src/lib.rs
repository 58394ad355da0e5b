//! Biomarker range classification and overall health aggregation.
//!
//! # Strategies
//!
//! - **Strict band** ([`classify`]): optimal band, then suboptimal band,
//!   otherwise critical. Unknown keys and missing or non-finite values yield
//!   `None` and are left out of results and aggregation.
//! - **Tolerance scaled** ([`classify_tolerance`]): `[min, max]` with a 10%
//!   margin. Unknown keys and non-numeric values yield a suboptimal
//!   placeholder with range `-`.
//!
//! The aggregator ([`overall_status`]) only ever uses the strict strategy.
//!
//! # Example
//!
//! ```
//! use vitals_eval::overall_status;
//! use vitals_model::{BiomarkerMapping, OverallStatus};
//!
//! let mapping: BiomarkerMapping = [("wbc", 6.0), ("ldl", 150.0)].into_iter().collect();
//! assert_eq!(overall_status(Some(&mapping)), OverallStatus::Critical);
//! assert_eq!(overall_status(None), OverallStatus::NoData);
//! ```

mod aggregate;
mod classify;
mod panels;

pub use aggregate::{Evaluation, evaluate, group_by_panel, overall_status, overall_status_of};
pub use classify::{Policy, classify, classify_id, classify_tolerance};
pub use panels::{PanelReport, PanelRow, evaluate_panel, evaluate_user_panels};
