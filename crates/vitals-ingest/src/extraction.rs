//! Parsing of lab-report extraction replies.
//!
//! The extraction model is asked for a flat JSON object keyed by biomarker id
//! (see [`EXTRACTION_SYSTEM_PROMPT`]). Replies are often wrapped in prose or a
//! markdown fence, so the outermost `{ ... }` span is parsed when present.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use vitals_model::{BiomarkerMapping, parse_numeric};

use crate::error::{IngestError, Result};
use crate::gateway::GatewayFailure;

/// System prompt sent with every extraction request.
pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"You are a medical data extraction assistant. Extract biomarker values from lab reports.

Return a JSON object with these exact field names (use null if not found):
{
  "wbc": number or null,
  "rbc": number or null,
  "hemoglobin": number or null,
  "hematocrit": number or null,
  "platelets": number or null,
  "glucose": number or null,
  "creatinine": number or null,
  "egfr": number or null,
  "sodium": number or null,
  "potassium": number or null,
  "calcium": number or null,
  "alt": number or null,
  "albumin": number or null,
  "totalCholesterol": number or null,
  "ldl": number or null,
  "hdl": number or null,
  "triglycerides": number or null
}

Only extract numeric values. Convert all units to standard values.
Return ONLY the JSON object, no other text."#;

/// Fallback wording when a failed extraction carries no message.
const DEFAULT_FAILURE_MESSAGE: &str = "Failed to process document";

/// Greedy, multi-line match of the outermost JSON object.
static JSON_OBJECT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("Invalid JSON object regex"));

/// User message for an extraction request.
pub fn extraction_user_prompt(report_text: &str) -> String {
    format!("Extract biomarker values from this lab report:\n\n{report_text}")
}

/// Parse a raw model reply into a mapping.
///
/// Nulls are dropped silently. Values that are neither numbers nor numeric
/// strings are dropped with a warning. Unknown keys are kept.
pub fn parse_extraction_reply(reply: &str) -> Result<BiomarkerMapping> {
    let candidate = JSON_OBJECT_REGEX
        .find(reply)
        .map_or(reply, |found| found.as_str());
    let value: Value = serde_json::from_str(candidate)
        .map_err(|error| IngestError::malformed("reply is not valid JSON", error))?;
    let Value::Object(object) = value else {
        return Err(IngestError::MalformedReply {
            reason: "reply is not a JSON object".to_string(),
            source: None,
        });
    };
    Ok(mapping_from_object(&object))
}

/// Envelope returned by the extraction service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ExtractionResponse {
    /// Mapping carried by a successful response.
    pub fn into_mapping(self) -> Result<BiomarkerMapping> {
        match self.data {
            Some(data) if self.success => Ok(mapping_from_object(&data)),
            _ => Err(IngestError::ExtractionFailed {
                message: self
                    .error
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            }),
        }
    }
}

/// Interpret an extraction service answer given its HTTP status and body.
pub fn parse_extraction_response(status: u16, body: &str) -> Result<BiomarkerMapping> {
    let failure = GatewayFailure::from_status(status);
    if let Some(failure @ (GatewayFailure::RateLimited | GatewayFailure::CreditsDepleted)) =
        failure
    {
        return Err(IngestError::Gateway(failure));
    }
    let response: ExtractionResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(error) => {
            return Err(match failure {
                Some(failure) => IngestError::Gateway(failure),
                None => IngestError::malformed("response body is not valid JSON", error),
            });
        }
    };
    if failure.is_some() && response.success {
        return Err(IngestError::ExtractionFailed {
            message: DEFAULT_FAILURE_MESSAGE.to_string(),
        });
    }
    response.into_mapping()
}

fn mapping_from_object(object: &Map<String, Value>) -> BiomarkerMapping {
    let mut mapping = BiomarkerMapping::new();
    for (key, value) in object {
        let parsed = match value {
            Value::Null => continue,
            Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
            Value::String(text) => parse_numeric(text),
            _ => None,
        };
        match parsed {
            Some(v) => {
                mapping.insert(key.as_str(), v);
            }
            None => warn!(key = %key, "dropping non-numeric extracted value"),
        }
    }
    debug!(values = mapping.len(), "parsed extraction reply");
    mapping
}
