use crate::models::Intent;

use super::HeuristicsConfig;

/// Detect the customer's intent from lowercased transcript text
///
/// Rules are checked in priority order, so "order" wins over "refund"
/// when both appear.
pub fn detect_intent(text: &str, config: &HeuristicsConfig) -> Intent {
    config
        .intent_rules
        .iter()
        .find(|(_, keywords)| contains_any(text, keywords))
        .map(|(intent, _)| *intent)
        .unwrap_or(config.default_intent)
}

pub(crate) fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}
