//! Symtree: language-configurable symbol trees for source repositories.
//!
//! One generic tree-sitter walk, driven by per-language node-kind tables,
//! turns source files into nested class / function / method symbols with
//! best-effort signatures. Languages are added by configuration; signature
//! rendering is pluggable per language.

#![warn(missing_docs)]

pub mod cli;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod language;
pub mod parser;
pub mod render;
pub mod signature;
pub mod symbol;

/// Re-export common error types for convenience.
pub use error::{Result, SymtreeError};

/// Re-export the engine and model types for convenience.
pub use extract::SymbolEngine;
pub use symbol::{DirectoryInfo, FileInfo, RepoSummary, Symbol, SymbolKind};
