//! Action plan prompt building and reply parsing.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use vitals_model::{ActionPlan, BiomarkerMapping};

use crate::error::{IngestError, Result};

/// System prompt sent with every action plan request.
pub const ACTION_PLAN_SYSTEM_PROMPT: &str = "You are a medical advisor providing personalized health recommendations. Always respond with valid JSON only.";

static JSON_FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("Invalid JSON fence regex"));

static ANY_FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\s*(.*?)\s*```").expect("Invalid fence regex"));

/// `key: value` pairs joined by `, `, in mapping order.
pub fn action_plan_context(mapping: &BiomarkerMapping) -> String {
    mapping
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// User prompt asking for a seven-day plan based on a mapping.
pub fn action_plan_prompt(mapping: &BiomarkerMapping) -> String {
    let context = action_plan_context(mapping);
    format!(
        r#"You are a health advisor. Based on these biomarker results: {context}

Generate a 7-day personalized action plan. For EACH day, provide:
1. Diet Tips (specific foods to eat or avoid based on the biomarkers)
2. Meal Suggestion (specific meal recommendation)
3. Supplement (specific supplement with dosage if applicable)
4. Exercise (specific exercise type and duration)
5. Lifestyle Tip (one actionable lifestyle change)

Focus on biomarkers that are outside optimal ranges. Provide variety across the week while maintaining therapeutic goals.

Return ONLY valid JSON in this exact format:
{{
  "days": [
    {{
      "day": 0,
      "dietTip": "string",
      "mealSuggestion": "string",
      "supplement": "string",
      "exercise": "string",
      "lifestyleTip": "string",
      "targetBiomarkers": ["biomarker1", "biomarker2"]
    }}
  ]
}}"#
    )
}

/// Parse a model reply into an action plan.
///
/// A ```` ```json ```` fence wins over a bare fence; without either the whole
/// reply is parsed.
pub fn parse_action_plan_reply(reply: &str) -> Result<ActionPlan> {
    let body = JSON_FENCE_REGEX
        .captures(reply)
        .or_else(|| ANY_FENCE_REGEX.captures(reply))
        .and_then(|captures| captures.get(1))
        .map_or(reply, |body| body.as_str());
    let plan: ActionPlan = serde_json::from_str(body)
        .map_err(|error| IngestError::malformed("reply is not a valid action plan", error))?;
    debug!(days = plan.days.len(), "parsed action plan reply");
    Ok(plan)
}
