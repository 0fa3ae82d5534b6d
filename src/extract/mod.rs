//! Generic, configuration-driven symbol extraction.
//!
//! One depth-first, pre-order walk over the syntax tree. Each node is
//! classified by its kind against the language configuration; matching
//! nodes become symbols and their subtree is collected into the symbol's
//! children. Nothing in here fails: a missing configuration, parser or tree
//! yields no symbols, and a failed signature falls back to the template.

use crate::error::{Result, SymtreeError};
use crate::language::{LanguageConfig, LanguageRegistry, NodeCategory};
use crate::parser::ParserProvider;
use crate::signature::{node_text, ExtractorRegistry, SignatureExtractor};
use crate::symbol::{Symbol, SymbolKind};
use std::path::Path;
use tree_sitter::{Node, Tree};

/// Extraction engine owning the registries and the parser cache of a run.
#[derive(Debug)]
pub struct SymbolEngine {
    languages: LanguageRegistry,
    extractors: ExtractorRegistry,
    parsers: ParserProvider,
}

impl SymbolEngine {
    /// Create an engine from explicit registries.
    pub fn new(languages: LanguageRegistry, extractors: ExtractorRegistry) -> Self {
        let parsers = ParserProvider::new(&languages);
        Self {
            languages,
            extractors,
            parsers,
        }
    }

    /// Create an engine with the built-in languages and extractors.
    pub fn builtin() -> Self {
        Self::new(LanguageRegistry::builtin(), ExtractorRegistry::builtin())
    }

    /// Language configurations.
    pub fn languages(&self) -> &LanguageRegistry {
        &self.languages
    }

    /// Signature extractors.
    pub fn extractors(&self) -> &ExtractorRegistry {
        &self.extractors
    }

    /// Parser cache.
    pub fn parsers(&self) -> &ParserProvider {
        &self.parsers
    }

    /// Whether both a configuration and a parser exist for the language.
    pub fn is_supported(&self, language: &str) -> bool {
        self.languages.lookup(language).is_some() && self.parsers.is_available(language)
    }

    /// Whether the language is configured and has a dedicated extractor.
    pub fn has_signature_support(&self, language: &str) -> bool {
        self.languages.lookup(language).is_some() && self.extractors.has_signature_support(language)
    }

    /// Extract the top-level symbols of a source text.
    ///
    /// Returns an empty list when the language is not configured, has no
    /// parser, or the parser produced no tree.
    pub fn extract_symbols(&self, source: &str, language: &str) -> Vec<Symbol> {
        let Some(config) = self.languages.lookup(language) else {
            log::debug!("Language {} not configured", language);
            return Vec::new();
        };
        let Some(parser) = self.parsers.get_parser(language) else {
            return Vec::new();
        };
        let extractor = self.extractors.get(language);

        let tree = match parser.parse(source) {
            Ok(tree) => tree,
            Err(e) => {
                log::warn!("{}", e);
                return Vec::new();
            }
        };
        if tree.root_node().has_error() {
            log::debug!("Syntax errors in {} source, extracting what parsed", language);
        }

        extract_from_tree(source, language, config, extractor, &tree)
    }

    /// Read a file and extract its symbols.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn extract_file(&self, path: &Path, language: &str) -> Result<Vec<Symbol>> {
        let bytes = std::fs::read(path).map_err(|source| SymtreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);
        Ok(self.extract_symbols(&source, language))
    }
}

/// Extract symbols from an already parsed tree.
pub fn extract_from_tree(
    source: &str,
    language: &str,
    config: &LanguageConfig,
    extractor: &dyn SignatureExtractor,
    tree: &Tree,
) -> Vec<Symbol> {
    let walker = Walker {
        source,
        language,
        config,
        extractor,
    };
    let mut symbols = Vec::new();
    walker.visit(tree.root_node(), &mut symbols, false);
    symbols
}

struct Walker<'a> {
    source: &'a str,
    language: &'a str,
    config: &'a LanguageConfig,
    extractor: &'a dyn SignatureExtractor,
}

impl Walker<'_> {
    fn visit(&self, node: Node<'_>, parent: &mut Vec<Symbol>, inside_class: bool) {
        let Some(category) = self.config.classify(node.kind()) else {
            self.visit_children(node, parent, inside_class);
            return;
        };

        let (kind, construct) = match category {
            NodeCategory::Class => (SymbolKind::Class, "class"),
            NodeCategory::Interface => (SymbolKind::Interface, "interface"),
            NodeCategory::Enum => (SymbolKind::Enum, "enum"),
            NodeCategory::Constructor if inside_class => (SymbolKind::Constructor, "constructor"),
            NodeCategory::Function if inside_class => (SymbolKind::Method, "method"),
            NodeCategory::Constructor | NodeCategory::Function => {
                (SymbolKind::Function, "function")
            }
        };

        // Unnamed declarations produce no symbol but must not hide what they contain.
        let Some(name) = self.extract_name(node) else {
            log::trace!("Unnamed {} at line {}", node.kind(), node.start_position().row + 1);
            self.visit_children(node, parent, inside_class);
            return;
        };

        let signature = self.render_signature(node, kind, construct, &name);
        let mut symbol = Symbol::new(
            name,
            kind,
            node.start_position().row + 1,
            signature,
            self.language,
        );
        // Containers open a class context; functions pass the current one through.
        let child_context = kind.is_container() || inside_class;
        self.visit_children(node, &mut symbol.children, child_context);
        parent.push(symbol);
    }

    fn visit_children(&self, node: Node<'_>, parent: &mut Vec<Symbol>, inside_class: bool) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child, parent, inside_class);
        }
    }

    fn extract_name(&self, node: Node<'_>) -> Option<String> {
        let name_node = match self.config.name_field_for(node.kind()) {
            Some(field) => node.child_by_field_name(field)?,
            None => {
                let mut cursor = node.walk();
                let found = node
                    .children(&mut cursor)
                    .find(|child| self.config.is_name_node(child.kind()));
                found?
            }
        };
        let name = node_text(name_node, self.source).ok()?.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    fn render_signature(
        &self,
        node: Node<'_>,
        kind: SymbolKind,
        construct: &str,
        name: &str,
    ) -> String {
        let template = self.config.render_template(construct, name);
        let rendered = if kind.is_container() {
            self.extractor
                .extract_class_signature(node, self.source, &template)
        } else {
            self.extractor
                .extract_function_signature(node, self.source, &template)
        };

        match rendered {
            Ok(signature) if !signature.trim().is_empty() => signature,
            Ok(_) => template,
            Err(e) => {
                log::debug!("Signature extraction failed for {} {}: {}", construct, name, e);
                template
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::SignatureError;

    struct FailingExtractor;

    impl SignatureExtractor for FailingExtractor {
        fn extract_function_signature(
            &self,
            _node: Node<'_>,
            _source: &str,
            _template: &str,
        ) -> std::result::Result<String, SignatureError> {
            Err(SignatureError::Empty)
        }

        fn extract_class_signature(
            &self,
            _node: Node<'_>,
            _source: &str,
            _template: &str,
        ) -> std::result::Result<String, SignatureError> {
            Err(SignatureError::MissingChild {
                kind: "identifier".to_string(),
            })
        }
    }

    struct BlankExtractor;

    impl SignatureExtractor for BlankExtractor {
        fn extract_function_signature(
            &self,
            _node: Node<'_>,
            _source: &str,
            _template: &str,
        ) -> std::result::Result<String, SignatureError> {
            Ok("   ".to_string())
        }

        fn extract_class_signature(
            &self,
            _node: Node<'_>,
            _source: &str,
            _template: &str,
        ) -> std::result::Result<String, SignatureError> {
            Ok(String::new())
        }
    }

    fn python_tree(source: &str) -> Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    fn python_config() -> LanguageConfig {
        LanguageRegistry::builtin().lookup("python").unwrap().clone()
    }

    const SOURCE: &str = "class C:\n    def m(self):\n        pass\n\ndef f(x):\n    return x\n";

    #[test]
    fn test_failing_extractor_falls_back_to_template() {
        let tree = python_tree(SOURCE);
        let symbols =
            extract_from_tree(SOURCE, "python", &python_config(), &FailingExtractor, &tree);

        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].signature, "class C");
        assert_eq!(symbols[0].children[0].signature, "def m(...)");
        assert_eq!(symbols[1].signature, "def f(...)");
    }

    #[test]
    fn test_blank_signature_falls_back_to_template() {
        let tree = python_tree(SOURCE);
        let symbols = extract_from_tree(SOURCE, "python", &python_config(), &BlankExtractor, &tree);
        assert_eq!(symbols[0].signature, "class C");
        assert_eq!(symbols[1].signature, "def f(...)");
    }

    #[test]
    fn test_fallback_without_templates() {
        let config = LanguageConfig::new("tree-sitter-python")
            .classes(&["class_definition"])
            .functions(&["function_definition"])
            .names(&["identifier"]);
        let tree = python_tree(SOURCE);
        let symbols = extract_from_tree(SOURCE, "python", &config, &FailingExtractor, &tree);
        assert_eq!(symbols[0].signature, "class C");
        assert_eq!(symbols[0].children[0].signature, "method m(...)");
        assert_eq!(symbols[1].signature, "function f(...)");
    }

    #[test]
    fn test_unnamed_container_still_yields_children() {
        // decorated_definition has no identifier child of its own.
        let config = python_config().classes(&["decorated_definition"]);
        let source = "@decorator\ndef wrapped():\n    pass\n";
        let tree = python_tree(source);
        let symbols =
            extract_from_tree(source, "python", &config, &FailingExtractor, &tree);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "wrapped");
        assert_eq!(symbols[0].kind, SymbolKind::Function);
        assert_eq!(symbols[0].line, 2);
    }

    #[test]
    fn test_nested_function_inherits_class_context() {
        let source = "class C:\n    def m(self):\n        def inner():\n            pass\n";
        let tree = python_tree(source);
        let symbols =
            extract_from_tree(source, "python", &python_config(), &FailingExtractor, &tree);

        let m = &symbols[0].children[0];
        assert_eq!(m.kind, SymbolKind::Method);
        assert_eq!(m.children[0].name, "inner");
        assert_eq!(m.children[0].kind, SymbolKind::Method);
        assert_eq!(m.children[0].signature, "def inner(...)");
    }

    #[test]
    fn test_name_field_overrides_name_nodes() {
        // `class A(B)`: the superclasses field holds an identifier too.
        let config = python_config().name_field("class_definition", "superclasses");
        let source = "class A(B):\n    pass\n";
        let tree = python_tree(source);
        let symbols = extract_from_tree(source, "python", &config, &FailingExtractor, &tree);
        assert_eq!(symbols[0].name, "(B)");

        // A missing field leaves the node unnamed.
        let source = "class A:\n    def m(self):\n        pass\n";
        let tree = python_tree(source);
        let symbols = extract_from_tree(source, "python", &config, &FailingExtractor, &tree);
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "m");
        assert_eq!(symbols[0].kind, SymbolKind::Function);
    }

    #[test]
    fn test_engine_unknown_language_is_empty() {
        let engine = SymbolEngine::builtin();
        assert!(engine.extract_symbols("anything", "unknown-lang").is_empty());
        assert!(!engine.is_supported("unknown-lang"));
        assert!(!engine.has_signature_support("unknown-lang"));
    }

    #[test]
    fn test_engine_configured_without_parser_is_empty() {
        let engine = SymbolEngine::builtin();
        assert!(engine
            .extract_symbols("package main\nfunc main() {}\n", "go")
            .is_empty());
        assert!(!engine.is_supported("go"));
        assert!(engine.is_supported("python"));
    }

    #[test]
    fn test_extract_file_missing_is_error() {
        let engine = SymbolEngine::builtin();
        let result = engine.extract_file(Path::new("/definitely/not/here.py"), "python");
        assert!(matches!(result, Err(SymtreeError::Io { .. })));
    }
}
