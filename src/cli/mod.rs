//! Command-line interface for Symtree.
//!
//! This module handles argument parsing only. The binary maps each command
//! onto library calls.

use clap::Parser;
use std::path::PathBuf;

/// Symtree: language-configurable symbol trees for source repositories.
#[derive(Parser, Debug)]
#[command(name = "symtree")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_required = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available Symtree commands.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Extract the symbol tree of a whole repository.
    Scan {
        /// Repository root.
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Only process these languages (repeatable).
        #[arg(long = "lang", value_name = "LANG")]
        languages: Vec<String>,

        /// Process at most this many files.
        #[arg(long, value_name = "N")]
        max_files: Option<usize>,

        /// Skip files matching this glob (repeatable).
        #[arg(long = "exclude", value_name = "GLOB")]
        excludes: Vec<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Lay out the text tree by directory instead of by language.
        #[arg(long)]
        by_structure: bool,

        /// Extract files in parallel.
        #[arg(long)]
        parallel: bool,

        /// TOML file with language table overrides.
        #[arg(long = "languages", value_name = "FILE")]
        language_file: Option<PathBuf>,

        /// Write output to this file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Extract the symbols of a single file.
    File {
        /// Source file.
        path: PathBuf,

        /// Language (auto-detect from extension by default).
        #[arg(long = "lang", value_name = "LANG")]
        language: Option<String>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// TOML file with language table overrides.
        #[arg(long = "languages", value_name = "FILE")]
        language_file: Option<PathBuf>,
    },

    /// List configured languages and their support status.
    Languages {
        /// TOML file with language table overrides.
        #[arg(long = "languages", value_name = "FILE")]
        language_file: Option<PathBuf>,
    },
}

/// Output formats.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented text tree.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Parse command-line arguments.
///
/// Exits with a usage message on invalid arguments.
pub fn parse_args() -> Cli {
    Cli::parse()
}
