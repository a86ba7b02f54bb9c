use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Outcome of a support call, from the QA reviewer's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "Automated - Successful")]
    AutomatedSuccessful,
    #[serde(rename = "Automated - Partially Successful")]
    AutomatedPartiallySuccessful,
    #[serde(rename = "Escalated - Partially Successful")]
    EscalatedPartiallySuccessful,
    #[serde(rename = "Escalated - Unsuccessful")]
    EscalatedUnsuccessful,
}

impl Outcome {
    /// Every outcome, in the order they are offered to the model
    pub const ALL: [Outcome; 4] = [
        Outcome::AutomatedSuccessful,
        Outcome::AutomatedPartiallySuccessful,
        Outcome::EscalatedPartiallySuccessful,
        Outcome::EscalatedUnsuccessful,
    ];

    /// Map the escalation and success signals onto an outcome
    pub fn from_signals(escalated: bool, successful: bool) -> Self {
        match (escalated, successful) {
            (false, true) => Outcome::AutomatedSuccessful,
            (false, false) => Outcome::AutomatedPartiallySuccessful,
            (true, true) => Outcome::EscalatedPartiallySuccessful,
            (true, false) => Outcome::EscalatedUnsuccessful,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::AutomatedSuccessful => "Automated - Successful",
            Outcome::AutomatedPartiallySuccessful => "Automated - Partially Successful",
            Outcome::EscalatedPartiallySuccessful => "Escalated - Partially Successful",
            Outcome::EscalatedUnsuccessful => "Escalated - Unsuccessful",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when text does not name one of the four outcomes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized outcome: {0:?}")]
pub struct UnknownOutcome(pub String);

impl FromStr for Outcome {
    type Err = UnknownOutcome;

    /// Lenient match: surrounding whitespace, case and en/em dashes are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Outcome::ALL
            .into_iter()
            .find(|outcome| normalize_label(outcome.label()) == normalized)
            .ok_or_else(|| UnknownOutcome(s.to_string()))
    }
}

fn normalize_label(s: &str) -> String {
    s.trim()
        .trim_end_matches('.')
        .replace(['\u{2013}', '\u{2014}'], "-")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Customer intent detected by the keyword heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    OrderStatus,
    ReturnRefund,
    Membership,
    ProductQuestion,
    GeneralInquiry,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::OrderStatus => "Order status",
            Intent::ReturnRefund => "Return / Refund",
            Intent::Membership => "Membership",
            Intent::ProductQuestion => "Product question",
            Intent::GeneralInquiry => "General inquiry",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_table() {
        assert_eq!(Outcome::from_signals(false, true), Outcome::AutomatedSuccessful);
        assert_eq!(
            Outcome::from_signals(false, false),
            Outcome::AutomatedPartiallySuccessful
        );
        assert_eq!(
            Outcome::from_signals(true, true),
            Outcome::EscalatedPartiallySuccessful
        );
        assert_eq!(Outcome::from_signals(true, false), Outcome::EscalatedUnsuccessful);
    }

    #[test]
    fn test_parse_exact_labels() {
        for outcome in Outcome::ALL {
            assert_eq!(outcome.label().parse::<Outcome>(), Ok(outcome));
        }
    }

    #[test]
    fn test_parse_lenient_variants() {
        assert_eq!(
            "  escalated \u{2013} unsuccessful.\n".parse::<Outcome>(),
            Ok(Outcome::EscalatedUnsuccessful)
        );
        assert_eq!(
            "Automated \u{2014} Partially Successful".parse::<Outcome>(),
            Ok(Outcome::AutomatedPartiallySuccessful)
        );
    }

    #[test]
    fn test_parse_rejects_free_text() {
        let err = "The call was mostly fine".parse::<Outcome>().unwrap_err();
        assert_eq!(err, UnknownOutcome("The call was mostly fine".to_string()));
        assert!("Automated".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Outcome::EscalatedPartiallySuccessful).unwrap();
        assert_eq!(json, "\"Escalated - Partially Successful\"");
    }
}
