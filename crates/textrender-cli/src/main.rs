mod logging;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use textrender_corpus::{CorpusConfig, CorpusError, CorpusKind, SampleOutcome, generate_samples};
use thiserror::Error;

use logging::init_logging;

#[derive(Debug, Error)]
enum CliError {
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "textrender",
    version,
    about = "Sample text for synthetic OCR images"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a corpus strategy and print samples.
    Sample(SampleArgs),
    /// List corpus modes and their effective lengths.
    Modes,
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// TOML file with corpus settings; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Corpus strategy: random, chn, eng, cardid, name or sohu.
    #[arg(long, value_name = "MODE")]
    corpus_mode: Option<CorpusKind>,
    /// File holding one symbol per line.
    #[arg(long)]
    chars_file: Option<PathBuf>,
    /// Root directory of corpus documents or name lists.
    #[arg(long)]
    corpus_dir: Option<PathBuf>,
    /// Requested sample length, before per-mode overrides.
    #[arg(long)]
    length: Option<usize>,
    /// Seed for loading and sampling.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of samples to print.
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// Worker threads, each with its own corpus instance.
    #[arg(long, default_value_t = 1)]
    workers: usize,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Print one JSON object per sample.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct SampleRecord<'a> {
    index: usize,
    text: &'a str,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Sample(args) => run_sample(args),
        Command::Modes => run_modes(),
    }
}

fn run_sample(args: SampleArgs) -> Result<(), CliError> {
    init_logging(args.log_file.as_deref())?;
    let config = resolve_config(&args)?;

    tracing::info!(
        event = "sampling_started",
        mode = %config.mode,
        length = config.effective_length(),
        count = args.count,
        workers = args.workers,
        seed = config.seed
    );
    let timer = Instant::now();

    let outcomes = generate_samples(&config, args.count, args.workers)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for outcome in &outcomes {
        match outcome {
            SampleOutcome::Generated { index, text } => {
                if args.json {
                    let record = SampleRecord {
                        index: *index,
                        text,
                    };
                    writeln!(out, "{}", serde_json::to_string(&record)?)?;
                } else {
                    writeln!(out, "{text}")?;
                }
            }
            SampleOutcome::Failed { index, error } => {
                tracing::warn!(event = "sample_skipped", index, error = %error);
            }
        }
    }
    out.flush()?;

    tracing::info!(
        event = "sampling_finished",
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

fn run_modes() -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for kind in CorpusKind::ALL {
        writeln!(
            out,
            "{:<8} length={:<3} corpus_dir={}",
            kind.name(),
            kind.effective_length(None),
            if kind.requires_corpus_dir() {
                "required"
            } else {
                "unused"
            }
        )?;
    }
    Ok(())
}

fn resolve_config(args: &SampleArgs) -> Result<CorpusConfig, CliError> {
    let base = match &args.config {
        Some(path) => Some(CorpusConfig::from_toml_file(path)?),
        None => None,
    };
    merge_config(base, args)
}

fn merge_config(base: Option<CorpusConfig>, args: &SampleArgs) -> Result<CorpusConfig, CliError> {
    let mode = args
        .corpus_mode
        .or(base.as_ref().map(|config| config.mode))
        .ok_or_else(|| CliError::InvalidConfig("--corpus-mode is required".to_string()))?;
    let chars_file = args
        .chars_file
        .clone()
        .or_else(|| base.as_ref().map(|config| config.chars_file.clone()))
        .ok_or_else(|| CliError::InvalidConfig("--chars-file is required".to_string()))?;

    let mut config = base.unwrap_or_else(|| CorpusConfig::new(mode, chars_file.clone()));
    config.mode = mode;
    config.chars_file = chars_file;
    if let Some(dir) = &args.corpus_dir {
        config.corpus_dir = Some(dir.clone());
    }
    if let Some(length) = args.length {
        config.length = Some(length);
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}
