//! Grammar bindings and the per-language parser cache.
//!
//! Grammars are linked statically. `load_grammar` is the only place that
//! knows how a package id maps to a tree-sitter `Language`; everything else
//! goes through `ParserProvider`, which resolves each language at most once
//! and remembers failures until `reset` is called.

use crate::error::{Result, SymtreeError};
use crate::language::LanguageRegistry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tree_sitter::{Language, Parser, Tree};

/// Grammar linked into the binary for a parser package id.
pub fn load_grammar(package: &str) -> Option<Language> {
    let grammar = match package {
        "tree-sitter-python" => tree_sitter_python::language(),
        "tree-sitter-java" => tree_sitter_java::language(),
        "tree-sitter-javascript" => tree_sitter_javascript::language(),
        "tree-sitter-typescript" => tree_sitter_typescript::language_typescript(),
        "tree-sitter-tsx" => tree_sitter_typescript::language_tsx(),
        "tree-sitter-rust" => tree_sitter_rust::language(),
        "tree-sitter-c" => tree_sitter_c::language(),
        "tree-sitter-cpp" => tree_sitter_cpp::language(),
        _ => return None,
    };
    Some(grammar)
}

/// Resolve a package id to a usable grammar, checking ABI compatibility.
fn bind_grammar(package: &str) -> std::result::Result<Language, String> {
    let grammar =
        load_grammar(package).ok_or_else(|| format!("no grammar linked for {}", package))?;
    Parser::new()
        .set_language(&grammar)
        .map_err(|e| format!("incompatible grammar {}: {}", package, e))?;
    Ok(grammar)
}

/// A resolved grammar able to parse source text.
///
/// Every `parse` call uses its own `tree_sitter::Parser`, so one handle can
/// be shared between threads.
#[derive(Debug, Clone)]
pub struct ParserHandle {
    language: String,
    package: String,
    grammar: Language,
}

impl ParserHandle {
    /// Language name this handle was resolved for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Grammar package id.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Parse source text into a syntax tree.
    pub fn parse(&self, source: &str) -> Result<Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.grammar)
            .map_err(|e| SymtreeError::Parse {
                language: self.language.clone(),
                message: format!("Failed to set language: {}", e),
            })?;

        parser
            .parse(source, None)
            .ok_or_else(|| SymtreeError::Parse {
                language: self.language.clone(),
                message: "Parse failed - no tree returned".to_string(),
            })
    }
}

/// Per-language parser cache.
///
/// Built from a language registry snapshot and owned by the engine for the
/// lifetime of a run. Both successes and failures are cached.
#[derive(Debug)]
pub struct ParserProvider {
    packages: HashMap<String, String>,
    cache: Mutex<HashMap<String, Option<Arc<ParserHandle>>>>,
    attempts: AtomicUsize,
}

impl ParserProvider {
    /// Create a provider for the languages configured in `registry`.
    pub fn new(registry: &LanguageRegistry) -> Self {
        let packages = registry
            .languages()
            .filter_map(|name| {
                registry
                    .lookup(name)
                    .map(|config| (name.to_string(), config.parser_package.clone()))
            })
            .collect();
        Self {
            packages,
            cache: Mutex::new(HashMap::new()),
            attempts: AtomicUsize::new(0),
        }
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<String, Option<Arc<ParserHandle>>>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Parser for a language, `None` if it has no configuration or grammar.
    ///
    /// The first call per language resolves the grammar; later calls return
    /// the cached outcome. Absence is logged once, at resolution time.
    pub fn get_parser(&self, language: &str) -> Option<Arc<ParserHandle>> {
        let mut cache = self.cache();
        if let Some(cached) = cache.get(language) {
            return cached.clone();
        }

        self.attempts.fetch_add(1, Ordering::Relaxed);
        let resolved = match self.packages.get(language) {
            None => {
                log::warn!("No configuration found for language: {}", language);
                None
            }
            Some(package) => match bind_grammar(package) {
                Ok(grammar) => {
                    log::debug!("Loaded parser for {} ({})", language, package);
                    Some(Arc::new(ParserHandle {
                        language: language.to_string(),
                        package: package.clone(),
                        grammar,
                    }))
                }
                Err(reason) => {
                    log::warn!("Parser not available for {}: {}", language, reason);
                    None
                }
            },
        };

        cache.insert(language.to_string(), resolved.clone());
        resolved
    }

    /// Whether a parser can be obtained for the language.
    pub fn is_available(&self, language: &str) -> bool {
        self.get_parser(language).is_some()
    }

    /// Forget every cached outcome so the next lookup resolves again.
    pub fn reset(&self) {
        self.cache().clear();
    }

    /// Languages resolved so far with their outcome, sorted by name.
    pub fn cached_languages(&self) -> Vec<(String, bool)> {
        let mut entries: Vec<(String, bool)> = self
            .cache()
            .iter()
            .map(|(name, handle)| (name.clone(), handle.is_some()))
            .collect();
        entries.sort();
        entries
    }

    /// Number of grammar resolutions performed since construction.
    pub fn resolution_attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed)
    }
}
