use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use callqa::io::transcript_path;
use callqa::{
    detect_signals, load_transcript, load_transcript_dir, render_report, Analyzer, BatchReport,
    Environment, HeuristicsConfig, OpenAiClient, OpenAiConfig, ReasoningError, ServiceHandle,
    TranscriptFile, DEFAULT_MODEL,
};

#[derive(Parser)]
#[command(name = "callqa")]
#[command(author, version, about = "QA analysis of customer support call transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize, classify and suggest improvements for call transcripts
    Analyze {
        /// Analyze a single call (e.g. call3 for <dir>/call3.txt); default is every call
        #[arg(long)]
        call: Option<String>,

        /// Directory containing <call_id>.txt transcripts
        #[arg(short, long, default_value = "sample_transcripts")]
        transcripts_dir: PathBuf,

        /// Model to use (e.g. gpt-4o, gpt-4o-mini)
        #[arg(short, long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Also write all analyses to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,

        /// Env file consulted for OPENAI_API_KEY when it is not set
        #[arg(long, default_value = ".env")]
        env_file: PathBuf,

        /// Skip the reasoning service (only run heuristics)
        #[arg(long)]
        heuristics_only: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the heuristic signals for a transcript file
    Classify {
        /// Transcript text file
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            call,
            transcripts_dir,
            model,
            json,
            env_file,
            heuristics_only,
            verbose,
        } => {
            setup_logging(verbose);
            let analyzer = build_analyzer(&env_file, heuristics_only)?;
            analyze_calls(
                &analyzer,
                call.as_deref(),
                &transcripts_dir,
                &model,
                json.as_deref(),
            )
            .await
        }
        Commands::Classify { input, verbose } => {
            setup_logging(verbose);
            classify_transcript(&input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Construct the reasoning service once; failure disables it for the whole run
fn build_analyzer(env_file: &Path, heuristics_only: bool) -> Result<Analyzer> {
    if heuristics_only {
        info!("Skipping reasoning service (--heuristics-only)");
        return Ok(Analyzer::heuristic_only());
    }

    let env = Environment::load(env_file).context("Failed to load configuration")?;
    let client = OpenAiConfig::from_environment(&env).and_then(OpenAiClient::new);
    if let Err(ReasoningError::ServiceUnavailable(reason)) = &client {
        warn!("Could not initialize reasoning client: {}", reason);
    }

    Ok(Analyzer::new(ServiceHandle::from_result(client)))
}

async fn analyze_calls(
    analyzer: &Analyzer,
    call: Option<&str>,
    transcripts_dir: &Path,
    model: &str,
    json: Option<&Path>,
) -> Result<()> {
    let transcripts: Vec<TranscriptFile> = match call {
        Some(call_id) => {
            let path = transcript_path(transcripts_dir, call_id);
            if !path.is_file() {
                println!("Transcript not found: {}", path.display());
                return Ok(());
            }
            let mut file = load_transcript(&path)?;
            file.call_id = call_id.to_string();
            vec![file]
        }
        None => {
            println!("Analyzing all transcripts with {}...\n", model);
            load_transcript_dir(transcripts_dir)?
        }
    };

    let mut analyses = Vec::with_capacity(transcripts.len());
    for transcript in &transcripts {
        info!("Analyzing {}", transcript.call_id);
        let analysis = analyzer
            .analyze(&transcript.text, Some(&transcript.call_id), Some(model))
            .await;
        println!("{}", render_report(&analysis, model).trim_end());
        println!();
        analyses.push(analysis);
    }

    let report = BatchReport::new(model, analyses);
    info!(
        "Complete: {} calls analyzed ({} via heuristics)",
        report.analyses.len(),
        report.fallback_count()
    );

    if let Some(path) = json {
        report.write_json(path)?;
        info!("JSON report written to {:?}", path);
    }

    Ok(())
}

fn classify_transcript(input: &Path) -> Result<()> {
    let transcript = load_transcript(input).context("Failed to load transcript")?;
    let signals = detect_signals(&transcript.text, &HeuristicsConfig::default());

    println!("Heuristic Signals");
    println!("=================");
    println!("Call ID: {}", transcript.call_id);
    println!("Intent: {}", signals.intent);
    println!("Escalated: {}", signals.escalated);
    println!("Successful: {}", signals.successful);
    println!("Outcome: {}", signals.outcome());

    Ok(())
}
