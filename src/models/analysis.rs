use serde::{Deserialize, Serialize};

use super::Outcome;

/// Which path produced an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    /// All three reasoning stages completed against the external service
    External,
    /// Keyword heuristics, used when the service is absent or a stage failed
    Heuristic,
}

/// Improvement suggestions
///
/// The external path returns one block of free text (usually bullet points),
/// the heuristic path a fixed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Improvements {
    Text(String),
    Bullets(Vec<String>),
}

impl Improvements {
    pub fn is_empty(&self) -> bool {
        match self {
            Improvements::Text(text) => text.trim().is_empty(),
            Improvements::Bullets(items) => items.is_empty(),
        }
    }
}

/// QA report for a single call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallAnalysis {
    /// Caller-supplied identifier, passed through untouched
    pub call_id: Option<String>,
    pub summary: String,
    /// Outcome label. Always one of [`Outcome::ALL`] for heuristic results;
    /// external results keep whatever the model answered.
    pub classification: String,
    pub improvements: Improvements,
    pub source: AnalysisSource,
}

impl CallAnalysis {
    /// Parse the classification into a known outcome, if it is one
    pub fn outcome(&self) -> Option<Outcome> {
        self.classification.parse().ok()
    }

    pub fn is_fallback(&self) -> bool {
        self.source == AnalysisSource::Heuristic
    }
}
