use tracing::debug;

use super::{PipelineError, PipelineStage};
use crate::llm::{build_summary_prompt, ReasoningClient};

/// Stage 1: summarize the transcript
pub async fn summarize(
    client: &dyn ReasoningClient,
    transcript: &str,
    model: &str,
) -> Result<String, PipelineError> {
    let prompt = build_summary_prompt(transcript);

    let summary = client
        .invoke(&prompt, model)
        .await
        .map_err(|e| PipelineError::new(PipelineStage::Summarizing, e))?;

    debug!("Summary: {} chars", summary.len());
    Ok(summary)
}
