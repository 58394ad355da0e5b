//! Data model for biomarker evaluation.
//!
//! - [`biomarker`]: the closed identifier set and lab panels
//! - [`mapping`]: sparse key → value mapping produced by entry or extraction
//! - [`result`]: per-biomarker evaluation outputs
//! - [`status`]: per-biomarker and overall statuses
//! - [`plan`]: weekly action plan
//! - [`panels`]: backend lab panels shown with the tolerance table
//! - [`numeric`]: text → lab value parsing

pub mod biomarker;
pub mod error;
pub mod mapping;
pub mod numeric;
pub mod panels;
pub mod plan;
pub mod result;
pub mod status;

pub use biomarker::{BiomarkerId, Panel};
pub use error::{ModelError, Result};
pub use mapping::BiomarkerMapping;
pub use numeric::{parse_leading_numeric, parse_numeric};
pub use panels::{CREATED_AT_KEY, PanelData, UserPanels};
pub use plan::{ActionPlan, DayPlan, weekday_abbr};
pub use result::{BiomarkerResult, PanelValue, RangeEvaluation};
pub use status::{BiomarkerStatus, OverallStatus};
