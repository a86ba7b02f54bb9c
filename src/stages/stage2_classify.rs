use tracing::{debug, warn};

use super::{PipelineError, PipelineStage};
use crate::llm::{build_classification_prompt, ReasoningClient};
use crate::models::Outcome;

/// Stage 2: classify the call outcome from its summary
///
/// The model's answer is returned as-is. An answer outside the four known
/// outcomes is logged but not rejected.
pub async fn classify(
    client: &dyn ReasoningClient,
    summary: &str,
    model: &str,
) -> Result<String, PipelineError> {
    let prompt = build_classification_prompt(summary);

    let classification = client
        .invoke(&prompt, model)
        .await
        .map_err(|e| PipelineError::new(PipelineStage::Classifying, e))?;

    match classification.parse::<Outcome>() {
        Ok(outcome) => debug!("Classification: {}", outcome),
        Err(e) => warn!("Model returned an {}; keeping it verbatim", e),
    }

    Ok(classification)
}
