use crate::models::Outcome;

/// Stage 1: summarize the call
pub const SUMMARY_PROMPT: &str = r#"You are a QA assistant. Summarize the following customer support call.
Focus on:
- The customer’s intent
- The AI agent’s actions
- Whether the issue was resolved or escalated

Transcript:
{transcript}
"#;

/// Stage 2: classify the outcome from the summary
pub const CLASSIFICATION_PROMPT: &str = r#"Based on this summary, classify the call outcome into ONE of the following:
{outcomes}

Summary:
{summary}

Answer with ONLY the classification text.
"#;

/// Stage 3: suggest improvements from the summary and classification
pub const IMPROVEMENT_PROMPT: &str = r#"You are a QA reviewer. Based on the call summary and classification, suggest
2–3 concrete improvements for the AI agent’s behavior.

Summary:
{summary}

Classification:
{classification}

Write clear bullet points.
"#;

/// Build the summary prompt for a transcript
pub fn build_summary_prompt(transcript: &str) -> String {
    SUMMARY_PROMPT.replace("{transcript}", transcript)
}

/// Build the classification prompt; the outcome list is rendered from [`Outcome::ALL`]
pub fn build_classification_prompt(summary: &str) -> String {
    let outcomes = Outcome::ALL
        .iter()
        .map(|o| format!("- {}", o.label()))
        .collect::<Vec<_>>()
        .join("\n");

    // Substitute the summary last so braces inside it are left alone
    CLASSIFICATION_PROMPT
        .replace("{outcomes}", &outcomes)
        .replace("{summary}", summary)
}

/// Build the improvement prompt
pub fn build_improvement_prompt(summary: &str, classification: &str) -> String {
    IMPROVEMENT_PROMPT
        .replace("{classification}", classification)
        .replace("{summary}", summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_embeds_transcript() {
        let prompt = build_summary_prompt("Agent: Hi\nCustomer: Where is my order?");
        assert!(prompt.contains("Transcript:\nAgent: Hi\nCustomer: Where is my order?"));
        assert!(!prompt.contains("{transcript}"));
    }

    #[test]
    fn test_classification_prompt_lists_outcomes() {
        let prompt = build_classification_prompt("Customer got a refund.");
        for outcome in Outcome::ALL {
            assert!(prompt.contains(&format!("- {}", outcome.label())));
        }
        assert!(prompt.contains("Summary:\nCustomer got a refund."));
        assert!(prompt.ends_with("Answer with ONLY the classification text.\n"));
    }

    #[test]
    fn test_improvement_prompt() {
        let prompt = build_improvement_prompt("Short call.", "Escalated - Unsuccessful");
        assert!(prompt.contains("Summary:\nShort call."));
        assert!(prompt.contains("Classification:\nEscalated - Unsuccessful"));
        assert!(!prompt.contains("{summary}"));
    }

    #[test]
    fn test_placeholders_in_input_are_not_expanded() {
        // A transcript quoting a placeholder must not pull in other fields
        let prompt = build_improvement_prompt("said {classification} aloud", "X");
        assert!(prompt.contains("said {classification} aloud"));
    }

    #[test]
    fn test_prose_keeps_typographic_punctuation() {
        let summary = build_summary_prompt("t");
        assert!(summary.contains("- The customer’s intent"));
        assert!(summary.contains("- The AI agent’s actions"));

        let improvement = build_improvement_prompt("s", "c");
        assert!(improvement.contains("2–3 concrete improvements for the AI agent’s behavior."));
    }
}
