use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{CallAnalysis, Improvements};

const RULE_WIDTH: usize = 60;

/// Format one analysis as a console report
pub fn render_report(analysis: &CallAnalysis, model: &str) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{}\n", heavy));
    out.push_str(&format!(
        "Call ID: {}\n",
        analysis.call_id.as_deref().unwrap_or("None")
    ));
    out.push_str(&format!("Model: {}\n", model));
    out.push_str(&format!("{}\n", light));
    out.push_str(&format!("Outcome: {}\n\n", analysis.classification));

    out.push_str("Summary:\n");
    out.push_str(&format!("  {}\n\n", analysis.summary));

    out.push_str("Improvement Suggestions:\n");
    match &analysis.improvements {
        improvements if improvements.is_empty() => out.push_str("  (none)\n"),
        Improvements::Bullets(items) => {
            for (i, suggestion) in items.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }
        Improvements::Text(text) => out.push_str(&format!("  {}\n", text)),
    }
    out.push_str(&format!("{}\n\n", heavy));

    out
}

/// Machine-readable record of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub analyses: Vec<CallAnalysis>,
}

impl BatchReport {
    pub fn new(model: impl Into<String>, analyses: Vec<CallAnalysis>) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            model: model.into(),
            analyses,
        }
    }

    pub fn fallback_count(&self) -> usize {
        self.analyses.iter().filter(|a| a.is_fallback()).count()
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}
