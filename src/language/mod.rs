//! Declarative per-language configuration.
//!
//! A `LanguageConfig` tells the generic engine which tree-sitter node kinds
//! are class-like, interface-like, enum-like or function-like, which child
//! kinds carry the declared name, and which fallback template to use per
//! construct. The registry is filled once at startup from the built-in
//! table and optionally from a TOML override file.

mod builtin;
pub mod detect;

use crate::error::{Result, SymtreeError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

/// Category a node kind falls into, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
    /// Class-like declaration.
    Class,
    /// Interface-like declaration.
    Interface,
    /// Enum-like declaration.
    Enum,
    /// Constructor declaration.
    Constructor,
    /// Function or method declaration.
    Function,
}

/// Configuration record for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageConfig {
    /// Node kinds denoting class-like declarations.
    #[serde(default)]
    pub class_nodes: BTreeSet<String>,

    /// Node kinds denoting interfaces. `None` if the language has no such concept.
    #[serde(default)]
    pub interface_nodes: Option<BTreeSet<String>>,

    /// Node kinds denoting enums.
    #[serde(default)]
    pub enum_nodes: BTreeSet<String>,

    /// Node kinds denoting functions or methods.
    #[serde(default)]
    pub function_nodes: BTreeSet<String>,

    /// Node kinds denoting constructors.
    #[serde(default)]
    pub constructor_nodes: BTreeSet<String>,

    /// Child node kinds holding the declared identifier.
    #[serde(default)]
    pub name_nodes: BTreeSet<String>,

    /// Grammar field holding the name, per node kind. Takes precedence over
    /// `name_nodes` for the kinds listed here.
    #[serde(default)]
    pub name_fields: BTreeMap<String, String>,

    /// Fallback templates keyed by construct kind. `{name}` is substituted.
    #[serde(default)]
    pub templates: BTreeMap<String, String>,

    /// Grammar package the parser provider loads for this language.
    pub parser_package: String,

    /// File extensions (without the dot) classified as this language.
    #[serde(default)]
    pub extensions: Vec<String>,
}

fn to_set(kinds: &[&str]) -> BTreeSet<String> {
    kinds.iter().map(|k| k.to_string()).collect()
}

impl LanguageConfig {
    /// Start a configuration for the given grammar package.
    pub fn new(parser_package: &str) -> Self {
        Self {
            parser_package: parser_package.to_string(),
            ..Self::default()
        }
    }

    /// Set the class-like node kinds.
    pub fn classes(mut self, kinds: &[&str]) -> Self {
        self.class_nodes = to_set(kinds);
        self
    }

    /// Set the interface-like node kinds.
    pub fn interfaces(mut self, kinds: &[&str]) -> Self {
        self.interface_nodes = Some(to_set(kinds));
        self
    }

    /// Set the enum-like node kinds.
    pub fn enums(mut self, kinds: &[&str]) -> Self {
        self.enum_nodes = to_set(kinds);
        self
    }

    /// Set the function-like node kinds.
    pub fn functions(mut self, kinds: &[&str]) -> Self {
        self.function_nodes = to_set(kinds);
        self
    }

    /// Set the constructor node kinds.
    pub fn constructors(mut self, kinds: &[&str]) -> Self {
        self.constructor_nodes = to_set(kinds);
        self
    }

    /// Set the identifier-holding child kinds.
    pub fn names(mut self, kinds: &[&str]) -> Self {
        self.name_nodes = to_set(kinds);
        self
    }

    /// Take the name of `kind` nodes from a grammar field.
    pub fn name_field(mut self, kind: &str, field: &str) -> Self {
        self.name_fields.insert(kind.to_string(), field.to_string());
        self
    }

    /// Add a fallback template.
    pub fn template(mut self, construct: &str, template: &str) -> Self {
        self.templates
            .insert(construct.to_string(), template.to_string());
        self
    }

    /// Set the file extensions.
    pub fn extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|e| e.to_string()).collect();
        self
    }

    /// Classify a node kind. Class wins over interface, interface over enum,
    /// enum over constructor, constructor over function.
    pub fn classify(&self, kind: &str) -> Option<NodeCategory> {
        if self.class_nodes.contains(kind) {
            Some(NodeCategory::Class)
        } else if self
            .interface_nodes
            .as_ref()
            .is_some_and(|kinds| kinds.contains(kind))
        {
            Some(NodeCategory::Interface)
        } else if self.enum_nodes.contains(kind) {
            Some(NodeCategory::Enum)
        } else if self.constructor_nodes.contains(kind) {
            Some(NodeCategory::Constructor)
        } else if self.function_nodes.contains(kind) {
            Some(NodeCategory::Function)
        } else {
            None
        }
    }

    /// Whether a child node kind holds a declared name.
    pub fn is_name_node(&self, kind: &str) -> bool {
        self.name_nodes.contains(kind)
    }

    /// Grammar field naming nodes of this kind, if configured.
    pub fn name_field_for(&self, kind: &str) -> Option<&str> {
        self.name_fields.get(kind).map(String::as_str)
    }

    /// Raw template for a construct kind.
    pub fn get_template(&self, construct: &str) -> Option<&str> {
        self.templates.get(construct).map(String::as_str)
    }

    /// Template for a construct kind with `{name}` substituted.
    ///
    /// Without a configured template this is `"<construct> <name>"` for
    /// containers and `"<construct> <name>(...)"` for callables.
    pub fn render_template(&self, construct: &str, name: &str) -> String {
        match self.get_template(construct) {
            Some(template) if !template.trim().is_empty() => template.replace("{name}", name),
            _ => match construct {
                "class" | "interface" | "enum" => format!("{} {}", construct, name),
                _ => format!("{} {}(...)", construct, name),
            },
        }
    }

    /// Node kinds listed in more than one category.
    pub fn overlapping_kinds(&self) -> Vec<String> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let empty = BTreeSet::new();
        let sets = [
            &self.class_nodes,
            self.interface_nodes.as_ref().unwrap_or(&empty),
            &self.enum_nodes,
            &self.constructor_nodes,
            &self.function_nodes,
        ];
        for set in sets {
            for kind in set {
                *seen.entry(kind.as_str()).or_default() += 1;
            }
        }
        let mut overlapping: Vec<String> = seen
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(kind, _)| kind.to_string())
            .collect();
        overlapping.sort();
        overlapping
    }
}

/// On-disk shape of a language override file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LanguageFile {
    #[serde(default)]
    languages: BTreeMap<String, LanguageConfig>,
}

/// Mapping from language name to its configuration.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    configs: BTreeMap<String, LanguageConfig>,
    by_extension: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in language table.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, config) in builtin::builtin_languages() {
            registry.register(name, config);
        }
        registry
    }

    /// Register or replace a language configuration.
    pub fn register(&mut self, language: &str, config: LanguageConfig) {
        let overlapping = config.overlapping_kinds();
        if !overlapping.is_empty() {
            log::warn!(
                "Language {} lists node kinds in several categories: {:?}",
                language,
                overlapping
            );
        }

        if let Some(previous) = self.configs.get(language) {
            for ext in &previous.extensions {
                if self.by_extension.get(ext).map(String::as_str) == Some(language) {
                    self.by_extension.remove(ext);
                }
            }
        }
        for ext in &config.extensions {
            self.by_extension.insert(ext.clone(), language.to_string());
        }
        self.configs.insert(language.to_string(), config);
    }

    /// Look up a language configuration. `None` means "unsupported".
    pub fn lookup(&self, language: &str) -> Option<&LanguageConfig> {
        self.configs.get(language)
    }

    /// Configured language names, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    /// Language registered for a file extension.
    pub fn language_for_extension(&self, extension: &str) -> Option<&str> {
        self.by_extension.get(extension).map(String::as_str)
    }

    /// Merge languages from a TOML document.
    ///
    /// `origin` is only used in error messages.
    pub fn merge_toml(&mut self, text: &str, origin: &Path) -> Result<usize> {
        let file: LanguageFile = toml::from_str(text).map_err(|e| SymtreeError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

        let count = file.languages.len();
        for (name, config) in file.languages {
            if config.parser_package.trim().is_empty() {
                return Err(SymtreeError::Config {
                    path: origin.to_path_buf(),
                    message: format!("language '{}' has an empty parser_package", name),
                });
            }
            log::debug!("Registering language {} from {}", name, origin.display());
            self.register(&name, config);
        }
        Ok(count)
    }

    /// Merge languages from a TOML override file.
    pub fn load_overrides(&mut self, path: &Path) -> Result<usize> {
        let text = std::fs::read_to_string(path).map_err(|source| SymtreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_toml(&text, path)
    }
}
