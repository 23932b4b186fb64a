//! prompt-slimmer: shrink JSON payloads and logs before they go into a prompt.

mod logging;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ps_core::{CompressionLevel, SlimResult, SlimmerConfig};
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "prompt-slimmer", version, about = "Shrink JSON payloads and logs for LLM prompts")]
struct Cli {
    /// JSON config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deduplicate repeated shapes and strip noisy keys from JSON.
    Json(JsonArgs),
    /// Keep the relevant lines of a log or stack trace.
    Log(LogArgs),
    /// Summarize the inferred schema of a JSON document.
    Schema(SchemaArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Input file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// low, medium or aggressive.
    #[arg(long)]
    level: Option<CompressionLevel>,
}

#[derive(Debug, Args)]
struct JsonArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Representatives kept per array.
    #[arg(long)]
    max_samples: Option<usize>,

    /// Key never stripped (repeatable).
    #[arg(long = "preserve-key")]
    preserve_keys: Vec<String>,
}

#[derive(Debug, Args)]
struct LogArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Frames kept per error.
    #[arg(long)]
    max_stack_depth: Option<usize>,

    /// Substring that always keeps a line (repeatable).
    #[arg(long = "preserve-pattern")]
    preserve_patterns: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
struct SchemaArgs {
    #[command(flatten)]
    input: InputArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Command {
    fn input(&self) -> &InputArgs {
        match self {
            Command::Json(a) => &a.input,
            Command::Log(a) => &a.input,
            Command::Schema(a) => &a.input,
        }
    }
}

/// Config file (or defaults) with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<SlimmerConfig> {
    let mut config = match &cli.config {
        Some(path) => SlimmerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SlimmerConfig::default(),
    };

    if let Some(level) = cli.command.input().level {
        config.compression_level = level;
    }
    match &cli.command {
        Command::Json(a) => {
            if a.max_samples.is_some() {
                config.max_array_samples = a.max_samples;
            }
            config.preserve_keys.extend(a.preserve_keys.iter().cloned());
        }
        Command::Log(a) => {
            if a.max_stack_depth.is_some() {
                config.max_stack_depth = a.max_stack_depth;
            }
            config.preserve_patterns.extend(a.preserve_patterns.iter().cloned());
        }
        Command::Schema(_) => {}
    }
    Ok(config)
}

fn read_input(input: &InputArgs) -> Result<String> {
    match &input.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn stats_line(original: usize, slimmed: usize, ratio: f64) -> String {
    format!(
        "original: {original} tokens, slimmed: {slimmed} tokens, reduction: {:.1}%",
        ratio * 100.0
    )
}

fn report(result: &SlimResult) {
    println!("{}", result.transformed);
    eprintln!(
        "{}",
        stats_line(result.original_size, result.transformed_size, result.reduction_ratio)
    );
}

fn run(cli: &Cli, config: &SlimmerConfig) -> Result<()> {
    let text = read_input(cli.command.input())?;

    match &cli.command {
        Command::Json(_) => {
            let result = ps_json::slim(&text, &config.slim_options())?;
            report(&result);
        }
        Command::Log(_) => {
            let result = ps_log::slim_log(&text, &config.log_options());
            report(&result);
        }
        Command::Schema(args) => {
            let result = ps_schema::analyze(&text)?;
            match args.format {
                OutputFormat::Text => println!("{}", result.summary),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.schema)?),
            }
            eprintln!(
                "{}",
                stats_line(result.original_size, result.schema_size, result.reduction_ratio)
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    logging::init(cli.debug, config.log_level.as_deref());
    tracing::debug!(level = %config.compression_level, "config resolved");
    run(&cli, &config)
}
