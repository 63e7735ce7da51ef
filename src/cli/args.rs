//! Command line argument parsing for the Wordsmith CLI using clap.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Wordsmith - edit distance, spelling correction and next-word prediction
#[derive(Parser, Debug, Clone)]
#[command(name = "wordsmith")]
#[command(about = "Edit distance, spelling correction and n-gram next-word prediction")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordsmithArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDSMITH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordsmithArgs {
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
    /// Compute the weighted edit distance between two strings
    Distance(DistanceArgs),

    /// Train a corpus model and save it as a snapshot
    Train(TrainArgs),

    /// Suggest spelling corrections for a word
    Correct(CorrectArgs),

    /// Suggest the next word for a prompt, one suggestion per n-gram order
    Suggest(SuggestArgs),

    /// Greedily complete a prompt
    Complete(CompleteArgs),
}

/// Arguments for edit distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Source string
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Target string
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Cost of inserting a character
    #[arg(long, default_value = "1")]
    pub insert_cost: u32,

    /// Cost of deleting a character
    #[arg(long, default_value = "1")]
    pub delete_cost: u32,

    /// Cost of replacing a character
    #[arg(long, default_value = "2")]
    pub replace_cost: u32,

    /// Include the full cost matrix
    #[arg(short, long)]
    pub matrix: bool,
}

/// Arguments for training a corpus snapshot
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Corpus file, one sentence per line
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Snapshot file to write
    #[arg(short, long, value_name = "SNAPSHOT_FILE")]
    pub output: PathBuf,

    /// Write bincode instead of JSON
    #[arg(long)]
    pub binary: bool,
}

/// Arguments for spelling correction
#[derive(Parser, Debug, Clone)]
#[command(group(ArgGroup::new("source").required(true).args(["corpus", "snapshot"])))]
pub struct CorrectArgs {
    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Corpus file to train on
    #[arg(long, value_name = "CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Previously saved snapshot
    #[arg(long, value_name = "SNAPSHOT_FILE")]
    pub snapshot: Option<PathBuf>,

    /// Maximum number of corrections (default: from config)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}

/// Arguments for next-word suggestion
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Corpus file, one sentence per line
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Prompt text
    #[arg(value_name = "PROMPT")]
    pub prompt: String,

    /// Only suggest words starting with this prefix
    #[arg(short, long)]
    pub prefix: Option<String>,
}

/// Arguments for sentence completion
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    /// Corpus file, one sentence per line
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Prompt text
    #[arg(value_name = "PROMPT")]
    pub prompt: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

impl TrainArgs {
    /// Snapshot encoding selected by `--binary`.
    pub fn snapshot_format(&self) -> crate::spelling::SnapshotFormat {
        if self.binary {
            crate::spelling::SnapshotFormat::Binary
        } else {
            crate::spelling::SnapshotFormat::Json
        }
    }
}
