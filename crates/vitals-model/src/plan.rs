//! Weekly action plan returned by the AI gateway.

use serde::{Deserialize, Serialize};

/// Seven-day plan of diet, exercise and lifestyle guidance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    #[serde(default)]
    pub days: Vec<DayPlan>,
}

impl ActionPlan {
    /// Plan for a weekday, where 0 is Sunday.
    pub fn day(&self, day: u8) -> Option<&DayPlan> {
        self.days.iter().find(|plan| plan.day == day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Guidance for one day of the week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Weekday index, 0 = Sunday.
    pub day: u8,
    #[serde(default)]
    pub diet_tip: String,
    #[serde(default)]
    pub meal_suggestion: String,
    #[serde(default)]
    pub supplement: String,
    #[serde(default)]
    pub exercise: String,
    #[serde(default)]
    pub lifestyle_tip: String,
    #[serde(default)]
    pub target_biomarkers: Vec<String>,
}

/// Two-letter weekday abbreviation, Sunday first.
pub fn weekday_abbr(day: u8) -> &'static str {
    match day % 7 {
        0 => "Su",
        1 => "Mo",
        2 => "Tu",
        3 => "We",
        4 => "Th",
        5 => "Fr",
        _ => "Sa",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_plan_reads_camel_case_fields() {
        let plan: ActionPlan = serde_json::from_str(
            r#"{"days":[{"day":2,"dietTip":"More fiber","targetBiomarkers":["ldl"]}]}"#,
        )
        .unwrap();
        let tuesday = plan.day(2).unwrap();
        assert_eq!(tuesday.diet_tip, "More fiber");
        assert_eq!(tuesday.target_biomarkers, vec!["ldl".to_string()]);
        assert!(tuesday.exercise.is_empty());
        assert!(plan.day(3).is_none());
    }

    #[test]
    fn weekday_abbreviations_wrap() {
        assert_eq!(weekday_abbr(0), "Su");
        assert_eq!(weekday_abbr(6), "Sa");
        assert_eq!(weekday_abbr(7), "Su");
    }
}
