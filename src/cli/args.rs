//! Command line argument parsing for the humaniseur CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Humaniseur - rewrites French text in a formal academic style
#[derive(Parser, Debug, Clone)]
#[command(name = "humaniseur")]
#[command(about = "Rewrites French text in a formal academic style")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HumaniseurArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HumaniseurArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Transform text into an academic style
    Humanize(HumanizeArgs),

    /// Show word and sentence counts
    Stats(StatsArgs),
}

/// Where the text to process comes from.
#[derive(Parser, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to process (read from stdin when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file instead (takes precedence over TEXT)
    #[arg(short = 'i', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for transforming text
#[derive(Parser, Debug, Clone)]
pub struct HumanizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Enable synonym replacement
    #[arg(short, long)]
    pub synonyms: bool,

    /// Synonym dictionary (JSON array of synonym groups)
    #[arg(long, value_name = "PATH")]
    pub synonym_dict: Option<PathBuf>,

    /// Pre-computed word vectors (JSON object of text to vector)
    #[arg(long, value_name = "PATH", conflicts_with = "model")]
    pub vectors: Option<PathBuf>,

    /// Sentence-embedding model exported to ONNX (needs the `onnx` feature)
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Tokenizer for --model (defaults to tokenizer.json next to the model)
    #[arg(long, value_name = "PATH", requires = "model")]
    pub tokenizer: Option<PathBuf>,

    /// Probability that a sentence goes through synonym replacement
    #[arg(long, value_name = "P")]
    pub p_synonym: Option<f64>,

    /// Probability that a sentence receives a transition phrase
    #[arg(long, value_name = "P")]
    pub p_transition: Option<f64>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Configuration file (JSON); flags override its values
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Default synonym replacement probability used by the CLI.
pub const DEFAULT_P_SYNONYM: f64 = 0.3;

/// Default transition probability used by the CLI.
pub const DEFAULT_P_TRANSITION: f64 = 0.4;

/// Arguments for text statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
