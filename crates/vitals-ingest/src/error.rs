//! Ingest error types.
//!
//! Errors carry enough context to point the user at the offending field or
//! reply, and [`IngestError::user_message`] gives the wording shown in
//! notifications.

use thiserror::Error;

use crate::gateway::GatewayFailure;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Form field outside the supported biomarker set.
    #[error("unknown biomarker field: {field}")]
    UnknownField { field: String },

    /// Form value that is not a finite number.
    #[error("invalid value for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    /// Submission without a single filled field.
    #[error("no biomarker values entered")]
    EmptySubmission,

    /// AI reply that could not be turned into JSON.
    #[error("failed to parse AI reply: {reason}")]
    MalformedReply {
        reason: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Extraction service reported failure.
    #[error("extraction failed: {message}")]
    ExtractionFailed { message: String },

    /// AI gateway answered with an error status.
    #[error("AI gateway error: {0}")]
    Gateway(GatewayFailure),
}

impl IngestError {
    pub(crate) fn malformed(reason: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedReply {
            reason: reason.into(),
            source: Some(source),
        }
    }

    /// Wording for user-facing notifications.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownField { field } => format!("\"{field}\" is not a supported biomarker."),
            Self::InvalidNumber { field, .. } => {
                format!("Please check your inputs and try again ({field} must be a number).")
            }
            Self::EmptySubmission => "Please enter at least one biomarker value.".to_string(),
            Self::MalformedReply { .. } => "Failed to parse AI response".to_string(),
            Self::ExtractionFailed { message } => message.clone(),
            Self::Gateway(failure) => failure.user_message().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
