//! Rust signature rendering.

use super::{render_header, HeaderRules, SignatureError, SignatureExtractor};
use tree_sitter::Node;

const FUNCTION_RULES: HeaderRules<'static> = HeaderRules {
    body: &["block"],
    attached: &["parameters", "type_parameters"],
    skipped: &[";"],
    flattened: &[],
};

// `impl<T>` keeps its type parameters glued to the keyword as well.
const ITEM_RULES: HeaderRules<'static> = HeaderRules {
    body: &[
        "field_declaration_list",
        "ordered_field_declaration_list",
        "declaration_list",
        "enum_variant_list",
    ],
    attached: &["type_parameters"],
    skipped: &[";"],
    flattened: &[],
};

/// Signature extractor for tree-sitter-rust nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustExtractor;

impl SignatureExtractor for RustExtractor {
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
        render_header(node, source, &ITEM_RULES)
    }
}
