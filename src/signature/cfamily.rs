//! C and C++ signature rendering.
//!
//! Functions are matched on their `function_declarator`, which holds the
//! name and parameter list but not the return type. The return type and
//! storage specifiers live on the enclosing declaration, so the signature
//! spans from the start of that declaration to the end of the declarator.

use super::{
    collapse_whitespace, node_text, render_header, HeaderRules, SignatureError,
    SignatureExtractor,
};
use tree_sitter::Node;

const DECLARATION_KINDS: &[&str] = &[
    "function_definition",
    "declaration",
    "field_declaration",
    "parameter_declaration",
];

const CLASS_RULES: HeaderRules<'static> = HeaderRules {
    body: &["field_declaration_list", "enumerator_list"],
    attached: &[],
    skipped: &["attribute_declaration"],
    flattened: &[],
};

/// Signature extractor for tree-sitter-c and tree-sitter-cpp nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct CFamilyExtractor;

/// Declaration owning a declarator, looking only through declarator wrappers
/// (`*f(...)`, `&f(...)`, `(f)(...)`).
fn enclosing_declaration(node: Node<'_>) -> Option<Node<'_>> {
    let mut current = node.parent();
    while let Some(parent) = current {
        let kind = parent.kind();
        if DECLARATION_KINDS.contains(&kind) {
            return Some(parent);
        }
        if !kind.ends_with("declarator") {
            return None;
        }
        current = parent.parent();
    }
    None
}

impl SignatureExtractor for CFamilyExtractor {
    fn extract_function_signature(
        &self,
        node: Node<'_>,
        source: &str,
        _template: &str,
    ) -> Result<String, SignatureError> {
        let start = enclosing_declaration(node)
            .map(|decl| decl.start_byte())
            .unwrap_or_else(|| node.start_byte());
        let end = node.end_byte();
        let text = source
            .get(start..end)
            .ok_or(SignatureError::OutOfRange { start, end })?;
        let signature = collapse_whitespace(text);
        if signature.is_empty() {
            return Err(SignatureError::Empty);
        }
        Ok(signature)
    }

    fn extract_class_signature(
        &self,
        node: Node<'_>,
        source: &str,
        _template: &str,
    ) -> Result<String, SignatureError> {
        match render_header(node, source, &CLASS_RULES) {
            Ok(signature) => Ok(signature),
            Err(SignatureError::Empty) => Ok(collapse_whitespace(node_text(node, source)?)),
            Err(e) => Err(e),
        }
    }
}
