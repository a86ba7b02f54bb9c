pub mod analyzer;
pub mod config;
pub mod heuristics;
pub mod io;
pub mod llm;
pub mod models;
pub mod stages;

pub use analyzer::{Analyzer, ServiceHandle};
pub use config::{Environment, DEFAULT_MODEL};
pub use heuristics::{classify_heuristically, detect_signals, HeuristicSignals, HeuristicsConfig};
pub use io::{load_transcript, load_transcript_dir, render_report, BatchReport, TranscriptFile};
pub use llm::{OpenAiClient, OpenAiConfig, ReasoningClient, ReasoningError, ScriptedClient};
pub use models::{AnalysisSource, CallAnalysis, Improvements, Intent, Outcome};
pub use stages::{run_pipeline, PipelineError, PipelineStage};
