//! API response types

use serde::Serialize;

use crate::recommender::{PlatformLabel, Rule, RuleId};

/// Message returned at the service root
pub const WELCOME_MESSAGE: &str = "Welcome to the Course Platform Suggestion API. \
POST a course description to /suggest_platform, or see /rules for the decision table.";

/// Recommendation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionResponse {
    pub suggested_platform: PlatformLabel,
}

impl SuggestionResponse {
    pub fn new(suggested_platform: PlatformLabel) -> Self {
        Self { suggested_platform }
    }
}

/// Root greeting
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}

/// One row of the published decision table
#[derive(Debug, Clone, Serialize)]
pub struct RuleEntry {
    pub position: usize,
    pub rule: RuleId,
    pub description: &'static str,
    pub suggested_platform: PlatformLabel,
}

impl RuleEntry {
    /// Build the full table, fallback row last
    pub fn table(rules: &[Rule], fallback: PlatformLabel) -> Vec<RuleEntry> {
        rules
            .iter()
            .enumerate()
            .map(|(index, rule)| RuleEntry {
                position: index + 1,
                rule: rule.id,
                description: rule.description,
                suggested_platform: rule.label,
            })
            .chain(std::iter::once(RuleEntry {
                position: rules.len() + 1,
                rule: RuleId::Fallback,
                description: "No rule matched",
                suggested_platform: fallback,
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommender::{FALLBACK_LABEL, RULES};

    #[test]
    fn test_suggestion_response_shape() {
        let resp = SuggestionResponse::new(PlatformLabel::GoogleColab);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value, serde_json::json!({"suggested_platform": "Google Colab"}));
    }

    #[test]
    fn test_rule_table_ends_with_fallback() {
        let table = RuleEntry::table(&RULES, FALLBACK_LABEL);
        assert_eq!(table.len(), 15);
        assert_eq!(table[0].position, 1);
        let last = table.last().unwrap();
        assert_eq!(last.rule, RuleId::Fallback);
        assert_eq!(last.suggested_platform, PlatformLabel::VirtualMachine);
    }

    #[test]
    fn test_welcome_message() {
        let resp = WelcomeResponse::default();
        assert!(resp.message.starts_with("Welcome to the Course Platform Suggestion API"));
    }
}
