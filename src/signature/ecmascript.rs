//! JavaScript and TypeScript signature rendering.
//!
//! The three grammars (javascript, typescript, tsx) share node kinds for
//! everything rendered here, so one extractor serves all of them.

use super::{render_header, HeaderRules, SignatureError, SignatureExtractor};
use tree_sitter::Node;

const FUNCTION_RULES: HeaderRules<'static> = HeaderRules {
    body: &["statement_block"],
    attached: &[
        "formal_parameters",
        "type_parameters",
        "type_annotation",
        "asserts_annotation",
        "type_predicate_annotation",
        "*",
        "?",
        "!",
    ],
    skipped: &["decorator", ";"],
    flattened: &[],
};

const CLASS_RULES: HeaderRules<'static> = HeaderRules {
    body: &[
        "class_body",
        "interface_body",
        "object_type",
        "enum_body",
    ],
    attached: &["type_parameters"],
    skipped: &["decorator"],
    flattened: &[],
};

/// Signature extractor for tree-sitter-javascript and tree-sitter-typescript nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct EcmaScriptExtractor;

impl SignatureExtractor for EcmaScriptExtractor {
    fn extract_function_signature(
        &self,
        node: Node<'_>,
        source: &str,
        _template: &str,
    ) -> Result<String, SignatureError> {
        render_header(node, source, &FUNCTION_RULES)
    }

    fn extract_class_signature(
        &self,
        node: Node<'_>,
        source: &str,
        _template: &str,
    ) -> Result<String, SignatureError> {
        render_header(node, source, &CLASS_RULES)
    }
}
