use tracing::{debug, info, warn};

use crate::config::DEFAULT_MODEL;
use crate::heuristics::{classify_with_config, HeuristicsConfig};
use crate::llm::{ReasoningClient, ReasoningError};
use crate::models::CallAnalysis;
use crate::stages::{run_pipeline, PipelineError, PipelineStage};

/// The reasoning service as seen by the analyzer
///
/// Built once at startup. `Absent` keeps the reason the service could not be
/// set up; it is never retried.
pub enum ServiceHandle {
    Available(Box<dyn ReasoningClient>),
    Absent(ReasoningError),
}

impl ServiceHandle {
    pub fn from_result<C>(result: Result<C, ReasoningError>) -> Self
    where
        C: ReasoningClient + 'static,
    {
        match result {
            Ok(client) => ServiceHandle::Available(Box::new(client)),
            Err(e) => ServiceHandle::Absent(e),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ServiceHandle::Available(_))
    }
}

impl std::fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceHandle::Available(client) => {
                f.debug_tuple("Available").field(&client.name()).finish()
            }
            ServiceHandle::Absent(e) => f.debug_tuple("Absent").field(e).finish(),
        }
    }
}

/// Runs the three-stage reasoning pipeline and falls back to heuristics
#[derive(Debug)]
pub struct Analyzer {
    service: ServiceHandle,
    heuristics: HeuristicsConfig,
}

impl Analyzer {
    pub fn new(service: ServiceHandle) -> Self {
        match &service {
            ServiceHandle::Available(client) => {
                info!("Using reasoning service: {}", client.name())
            }
            ServiceHandle::Absent(e) => info!("Reasoning service disabled ({}); using heuristics", e),
        }

        Self {
            service,
            heuristics: HeuristicsConfig::default(),
        }
    }

    /// Analyzer that always uses the heuristic classifier
    pub fn heuristic_only() -> Self {
        Self::new(ServiceHandle::Absent(ReasoningError::CredentialMissing))
    }

    pub fn with_heuristics(mut self, heuristics: HeuristicsConfig) -> Self {
        self.heuristics = heuristics;
        self
    }

    pub fn has_service(&self) -> bool {
        self.service.is_available()
    }

    /// Analyze one transcript; never fails
    ///
    /// Any error from the reasoning pipeline discards its partial output and
    /// returns the heuristic analysis of the same transcript instead.
    pub async fn analyze(
        &self,
        transcript: &str,
        call_id: Option<&str>,
        model: Option<&str>,
    ) -> CallAnalysis {
        match self.try_external(transcript, call_id, model).await {
            Ok(analysis) => analysis,
            Err(e) => {
                match &self.service {
                    ServiceHandle::Available(_) => {
                        warn!("Falling back to heuristics due to error: {}", e)
                    }
                    ServiceHandle::Absent(_) => debug!("Using heuristics: {}", e),
                }
                classify_with_config(transcript, call_id, &self.heuristics)
            }
        }
    }

    /// Run only the reasoning pipeline, without fallback
    pub async fn try_external(
        &self,
        transcript: &str,
        call_id: Option<&str>,
        model: Option<&str>,
    ) -> Result<CallAnalysis, PipelineError> {
        let model = model.unwrap_or(DEFAULT_MODEL);

        match &self.service {
            ServiceHandle::Available(client) => {
                run_pipeline(client.as_ref(), transcript, call_id, model).await
            }
            ServiceHandle::Absent(e) => {
                Err(PipelineError::new(PipelineStage::Summarizing, e.clone()))
            }
        }
    }
}
