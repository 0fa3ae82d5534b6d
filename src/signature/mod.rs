//! Signature rendering.
//!
//! A `SignatureExtractor` turns a matched declaration node into a readable
//! one-line signature. Extractors are looked up per language in the
//! `ExtractorRegistry`; languages without one get `UnsupportedExtractor`,
//! which echoes the fallback template instead of failing.

pub mod cfamily;
pub mod ecmascript;
pub mod java;
pub mod python;
pub mod rust;

use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tree_sitter::Node;

/// Reasons a signature could not be rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// A child node the extractor relies on is missing.
    #[error("missing child node '{kind}'")]
    MissingChild {
        /// Node kind that was expected.
        kind: String,
    },

    /// Node byte range does not map onto the source text.
    #[error("node range {start}..{end} is outside the source")]
    OutOfRange {
        /// Start byte offset.
        start: usize,
        /// End byte offset.
        end: usize,
    },

    /// Rendering produced no text.
    #[error("empty signature")]
    Empty,
}

/// Per-language signature rendering strategy.
///
/// `template` is the configured fallback for the construct with the name
/// already substituted. Implementations may ignore it.
pub trait SignatureExtractor: Send + Sync {
    /// Render the signature of a function-like node.
    fn extract_function_signature(
        &self,
        node: Node<'_>,
        source: &str,
        template: &str,
    ) -> Result<String, SignatureError>;

    /// Render the signature of a class-like node.
    fn extract_class_signature(
        &self,
        node: Node<'_>,
        source: &str,
        template: &str,
    ) -> Result<String, SignatureError>;
}

/// Extractor used for languages without a dedicated one.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedExtractor;

impl UnsupportedExtractor {
    fn placeholder(template: &str) -> String {
        if template.trim().is_empty() {
            "(signature unavailable)".to_string()
        } else {
            template.to_string()
        }
    }
}

impl SignatureExtractor for UnsupportedExtractor {
    fn extract_function_signature(
        &self,
        _node: Node<'_>,
        _source: &str,
        template: &str,
    ) -> Result<String, SignatureError> {
        Ok(Self::placeholder(template))
    }

    fn extract_class_signature(
        &self,
        _node: Node<'_>,
        _source: &str,
        template: &str,
    ) -> Result<String, SignatureError> {
        Ok(Self::placeholder(template))
    }
}

/// Mapping from language name to its signature extractor.
#[derive(Clone)]
pub struct ExtractorRegistry {
    extractors: BTreeMap<String, Arc<dyn SignatureExtractor>>,
    fallback: Arc<dyn SignatureExtractor>,
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("languages", &self.extractors.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorRegistry {
    /// Create a registry where every language uses `UnsupportedExtractor`.
    pub fn new() -> Self {
        Self {
            extractors: BTreeMap::new(),
            fallback: Arc::new(UnsupportedExtractor),
        }
    }

    /// Create a registry with the built-in extractors.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("python", python::PythonExtractor);
        registry.register("java", java::JavaExtractor);
        registry.register("javascript", ecmascript::EcmaScriptExtractor);
        registry.register("typescript", ecmascript::EcmaScriptExtractor);
        registry.register("tsx", ecmascript::EcmaScriptExtractor);
        registry.register("rust", rust::RustExtractor);
        registry.register("c", cfamily::CFamilyExtractor);
        registry.register("cpp", cfamily::CFamilyExtractor);
        registry
    }

    /// Register or replace the extractor for a language.
    pub fn register<E>(&mut self, language: &str, extractor: E)
    where
        E: SignatureExtractor + 'static,
    {
        self.extractors
            .insert(language.to_string(), Arc::new(extractor));
    }

    /// Extractor for a language, `UnsupportedExtractor` if none is registered.
    pub fn get(&self, language: &str) -> &dyn SignatureExtractor {
        self.extractors
            .get(language)
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    /// Whether a dedicated extractor is registered for the language.
    pub fn has_signature_support(&self, language: &str) -> bool {
        self.extractors.contains_key(language)
    }

    /// Languages with a dedicated extractor, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.extractors.keys().map(String::as_str)
    }
}

/// Source text covered by a node.
pub fn node_text<'a>(node: Node<'_>, source: &'a str) -> Result<&'a str, SignatureError> {
    let (start, end) = (node.start_byte(), node.end_byte());
    source
        .get(start..end)
        .ok_or(SignatureError::OutOfRange { start, end })
}

/// Collapse every whitespace run to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rules for rendering a declaration header from its children.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderRules<'r> {
    /// Child kinds that start the body. Rendering stops at the first one.
    pub body: &'r [&'r str],
    /// Child kinds glued to the previous part without a space.
    pub attached: &'r [&'r str],
    /// Child kinds left out of the header.
    pub skipped: &'r [&'r str],
    /// Child kinds whose own children are rendered in place.
    pub flattened: &'r [&'r str],
}

/// Render the part of a declaration before its body.
///
/// Children are joined with single spaces, except `attached` kinds which
/// follow the previous part directly (`name` + `(params)`).
pub fn render_header(
    node: Node<'_>,
    source: &str,
    rules: &HeaderRules<'_>,
) -> Result<String, SignatureError> {
    let mut out = String::new();
    push_header_parts(node, source, rules, &mut out)?;
    if out.is_empty() {
        return Err(SignatureError::Empty);
    }
    Ok(out)
}

/// Returns `false` once a body child was reached.
fn push_header_parts(
    node: Node<'_>,
    source: &str,
    rules: &HeaderRules<'_>,
    out: &mut String,
) -> Result<bool, SignatureError> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let kind = child.kind();
        if rules.body.contains(&kind) {
            return Ok(false);
        }
        if rules.skipped.contains(&kind) || child.is_extra() {
            continue;
        }
        if rules.flattened.contains(&kind) {
            if !push_header_parts(child, source, rules, out)? {
                return Ok(false);
            }
            continue;
        }

        let text = collapse_whitespace(node_text(child, source)?);
        if text.is_empty() {
            continue;
        }
        if !out.is_empty() && !rules.attached.contains(&kind) {
            out.push(' ');
        }
        out.push_str(&text);
    }
    Ok(true)
}

/// First direct child of the given kind.
pub fn child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| c.kind() == kind);
    found
}
