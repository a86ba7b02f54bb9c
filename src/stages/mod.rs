pub mod stage1_summarize;
pub mod stage2_classify;
pub mod stage3_suggest;

pub use stage1_summarize::*;
pub use stage2_classify::*;
pub use stage3_suggest::*;

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::llm::{ReasoningClient, ReasoningError};
use crate::models::{AnalysisSource, CallAnalysis, Improvements};

/// Working states of the external pipeline
///
/// `Start` moves straight into `Summarizing`; the terminal states are
/// represented by [`AnalysisSource`] on the finished analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Summarizing,
    Classifying,
    Suggesting,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Summarizing => "summarize",
            PipelineStage::Classifying => "classify",
            PipelineStage::Suggesting => "suggest",
        };
        f.write_str(name)
    }
}

/// A reasoning call failed partway through the pipeline
#[derive(Debug, Error)]
#[error("{stage} stage failed: {source}")]
pub struct PipelineError {
    pub stage: PipelineStage,
    #[source]
    pub source: ReasoningError,
}

impl PipelineError {
    pub fn new(stage: PipelineStage, source: ReasoningError) -> Self {
        Self { stage, source }
    }
}

/// Run summarize → classify → suggest against the reasoning service
///
/// Each stage feeds the next. The first failure aborts the run and nothing
/// produced by earlier stages is returned.
pub async fn run_pipeline(
    client: &dyn ReasoningClient,
    transcript: &str,
    call_id: Option<&str>,
    model: &str,
) -> Result<CallAnalysis, PipelineError> {
    debug!(
        call_id = call_id.unwrap_or("-"),
        model,
        client = client.name(),
        "Starting reasoning pipeline"
    );

    let summary = summarize(client, transcript, model).await?;
    let classification = classify(client, &summary, model).await?;
    let improvements = suggest_improvements(client, &summary, &classification, model).await?;

    Ok(CallAnalysis {
        call_id: call_id.map(str::to_string),
        summary,
        classification,
        improvements: Improvements::Text(improvements),
        source: AnalysisSource::External,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ScriptedClient;

    #[tokio::test]
    async fn test_pipeline_chains_outputs() {
        let client = ScriptedClient::with_replies([
            "Customer asked where their order was; agent gave tracking.",
            "Automated - Successful",
            "- Confirm the delivery address",
        ]);

        let analysis = run_pipeline(&client, "Where is my order?", Some("call1"), "gpt-4o")
            .await
            .unwrap();

        assert_eq!(analysis.call_id.as_deref(), Some("call1"));
        assert_eq!(
            analysis.summary,
            "Customer asked where their order was; agent gave tracking."
        );
        assert_eq!(analysis.classification, "Automated - Successful");
        assert_eq!(
            analysis.improvements,
            Improvements::Text("- Confirm the delivery address".to_string())
        );
        assert_eq!(analysis.source, AnalysisSource::External);

        let calls = client.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|c| c.model == "gpt-4o"));
        assert!(calls[0].prompt.contains("Where is my order?"));
        assert!(calls[1].prompt.contains("agent gave tracking"));
        assert!(calls[2].prompt.contains("agent gave tracking"));
        assert!(calls[2].prompt.contains("Classification:\nAutomated - Successful"));
    }

    #[tokio::test]
    async fn test_pipeline_reports_failing_stage() {
        let client = ScriptedClient::with_replies(["summary"]);
        client.push_error(ReasoningError::ServiceError("timeout".to_string()));

        let err = run_pipeline(&client, "hi", None, "m").await.unwrap_err();
        assert_eq!(err.stage, PipelineStage::Classifying);
        assert_eq!(
            err.to_string(),
            "classify stage failed: reasoning service error: timeout"
        );
        // The suggest stage never ran
        assert_eq!(client.calls().len(), 2);
    }
}
