//! Java signature rendering.

use super::{render_header, HeaderRules, SignatureError, SignatureExtractor};
use tree_sitter::Node;

const ANNOTATIONS: &[&str] = &["marker_annotation", "annotation", ";"];

const FUNCTION_RULES: HeaderRules<'static> = HeaderRules {
    body: &["block", "constructor_body"],
    attached: &["formal_parameters", "dimensions"],
    skipped: ANNOTATIONS,
    flattened: &["modifiers"],
};

const CLASS_RULES: HeaderRules<'static> = HeaderRules {
    body: &[
        "class_body",
        "interface_body",
        "enum_body",
        "annotation_type_body",
    ],
    attached: &["type_parameters", "formal_parameters"],
    skipped: ANNOTATIONS,
    flattened: &["modifiers"],
};

/// Signature extractor for tree-sitter-java nodes.
///
/// Renders the declaration header up to its body with annotations dropped:
/// `public static <T> List<T> copy(List<T> items) throws IOException`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaExtractor;

impl SignatureExtractor for JavaExtractor {
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
