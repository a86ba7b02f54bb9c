pub mod escalation;
pub mod intent;

pub use escalation::*;
pub use intent::*;

use crate::models::{AnalysisSource, CallAnalysis, Improvements, Intent, Outcome};

/// Suggestions returned by every heuristic analysis
pub const HEURISTIC_IMPROVEMENTS: [&str; 2] = [
    "Provide as much useful info as possible before escalation.",
    "Acknowledge customer frustration and explain escalation clearly.",
];

/// Keyword lists driving the heuristic classifier
///
/// All keywords are matched as lowercase substrings.
#[derive(Debug, Clone)]
pub struct HeuristicsConfig {
    /// Intent rules, checked in order; the first rule with a matching keyword wins
    pub intent_rules: Vec<(Intent, Vec<String>)>,
    /// Intent used when no rule matches
    pub default_intent: Intent,
    /// Words indicating the call was handed off to a human
    pub escalation_words: Vec<String>,
    /// Words indicating the customer left satisfied
    pub success_words: Vec<String>,
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            intent_rules: vec![
                (Intent::OrderStatus, vec!["order".to_string()]),
                (
                    Intent::ReturnRefund,
                    vec!["return".to_string(), "refund".to_string()],
                ),
                (Intent::Membership, vec!["membership".to_string()]),
                (Intent::ProductQuestion, vec!["size".to_string()]),
            ],
            default_intent: Intent::GeneralInquiry,
            escalation_words: vec![
                "transfer".to_string(),
                "connect".to_string(),
                "escalate".to_string(),
            ],
            success_words: vec![
                "thank you".to_string(),
                "great".to_string(),
                "resolved".to_string(),
            ],
        }
    }
}

/// Signals extracted from a transcript by keyword matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicSignals {
    pub intent: Intent,
    pub escalated: bool,
    /// Never true when `escalated` is true
    pub successful: bool,
}

impl HeuristicSignals {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_signals(self.escalated, self.successful)
    }
}

/// Extract heuristic signals using the given keyword lists
pub fn detect_signals(transcript: &str, config: &HeuristicsConfig) -> HeuristicSignals {
    let text = transcript.to_lowercase();

    let intent = detect_intent(&text, config);
    let escalated = detect_escalation(&text, &config.escalation_words);
    let successful = detect_success(&text, &config.success_words, escalated);

    HeuristicSignals {
        intent,
        escalated,
        successful,
    }
}

/// Rule-based analysis used when the reasoning service is unavailable
///
/// Total and deterministic: identical input always yields identical output.
pub fn classify_heuristically(transcript: &str, call_id: Option<&str>) -> CallAnalysis {
    classify_with_config(transcript, call_id, &HeuristicsConfig::default())
}

/// Same as [`classify_heuristically`] with custom keyword lists
pub fn classify_with_config(
    transcript: &str,
    call_id: Option<&str>,
    config: &HeuristicsConfig,
) -> CallAnalysis {
    let signals = detect_signals(transcript, config);
    let outcome = signals.outcome();

    CallAnalysis {
        call_id: call_id.map(str::to_string),
        summary: format!(
            "Heuristic analysis - intent: {}, outcome: {}.",
            signals.intent, outcome
        ),
        classification: outcome.label().to_string(),
        improvements: Improvements::Bullets(
            HEURISTIC_IMPROVEMENTS.iter().map(|s| s.to_string()).collect(),
        ),
        source: AnalysisSource::Heuristic,
    }
}
