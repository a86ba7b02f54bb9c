use super::{PipelineError, PipelineStage};
use crate::llm::{build_improvement_prompt, ReasoningClient};

/// Stage 3: ask for improvement suggestions (free text, usually bullets)
pub async fn suggest_improvements(
    client: &dyn ReasoningClient,
    summary: &str,
    classification: &str,
    model: &str,
) -> Result<String, PipelineError> {
    let prompt = build_improvement_prompt(summary, classification);

    client
        .invoke(&prompt, model)
        .await
        .map_err(|e| PipelineError::new(PipelineStage::Suggesting, e))
}
