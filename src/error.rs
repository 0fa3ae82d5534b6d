//! Symtree error types.
//!
//! Only failures at the outer surface (bad repository root, unreadable
//! override file, invalid pattern) become errors. Everything inside the
//! extraction core degrades to "fewer symbols" instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Symtree operations.
#[derive(Error, Debug)]
pub enum SymtreeError {
    /// I/O error during file operations.
    #[error("I/O error for path {path}: {source}")]
    Io {
        /// The file path that caused the I/O error.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Tree-sitter could not produce a tree.
    #[error("Parse error for {language}: {message}")]
    Parse {
        /// Language the parser was configured for.
        language: String,
        /// The parse error message.
        message: String,
    },

    /// Language has no configuration or no parser.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Language table override could not be loaded.
    #[error("Invalid language configuration in {path}: {message}")]
    Config {
        /// The override file.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// Invalid exclude glob.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Repository root does not exist or is not a directory.
    #[error("Not a directory: {0}")]
    InvalidRoot(PathBuf),
}

impl From<std::io::Error> for SymtreeError {
    fn from(err: std::io::Error) -> Self {
        SymtreeError::Io {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Result type alias for Symtree operations.
pub type Result<T> = std::result::Result<T, SymtreeError>;
