//! Turning user and model input into biomarker mappings.
//!
//! - [`manual`]: validation of manual entry forms
//! - [`extraction`]: lab-report extraction prompts and reply parsing
//! - [`plan`]: action plan prompts and reply parsing
//! - [`gateway`]: AI gateway error classification

pub mod error;
pub mod extraction;
pub mod gateway;
pub mod manual;
pub mod plan;

pub use error::{IngestError, Result};
pub use extraction::{
    EXTRACTION_SYSTEM_PROMPT, ExtractionResponse, extraction_user_prompt, parse_extraction_reply,
    parse_extraction_response,
};
pub use gateway::GatewayFailure;
pub use manual::{parse_submission, prefill};
pub use plan::{
    ACTION_PLAN_SYSTEM_PROMPT, action_plan_context, action_plan_prompt, parse_action_plan_reply,
};
