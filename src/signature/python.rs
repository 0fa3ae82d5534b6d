//! Python signature rendering.

use super::{child_of_kind, node_text, SignatureError, SignatureExtractor};
use tree_sitter::Node;

/// Signature extractor for tree-sitter-python nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonExtractor;

impl SignatureExtractor for PythonExtractor {
    /// `def`, the name, the parameter list and `-> <type>`, space separated.
    ///
    /// Children are taken in source order and rendering stops after the
    /// return type, so decorators and the body never leak in.
    fn extract_function_signature(
        &self,
        node: Node<'_>,
        source: &str,
        _template: &str,
    ) -> Result<String, SignatureError> {
        let mut parts = vec!["def"];

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "identifier" | "parameters" => parts.push(node_text(child, source)?),
                "type" => {
                    parts.push("->");
                    parts.push(node_text(child, source)?);
                    break;
                }
                _ => {}
            }
        }

        Ok(parts.join(" "))
    }

    /// `class Name(Base, ...)`.
    fn extract_class_signature(
        &self,
        node: Node<'_>,
        source: &str,
        _template: &str,
    ) -> Result<String, SignatureError> {
        let name = child_of_kind(node, "identifier").ok_or_else(|| SignatureError::MissingChild {
            kind: "identifier".to_string(),
        })?;
        let bases = match child_of_kind(node, "argument_list") {
            Some(args) => node_text(args, source)?,
            None => "",
        };
        Ok(format!("class {}{}", node_text(name, source)?, bases))
    }
}
