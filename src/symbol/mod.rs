//! Output model: symbols, files, directories and the repository summary.
//!
//! Every type here is plain owned data. A `RepoSummary` can be rendered or
//! serialized any number of times without touching the extraction core.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kinds of symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// Class-like declaration.
    Class,
    /// Interface, trait or protocol.
    Interface,
    /// Free function.
    Function,
    /// Function declared directly inside a class-like body.
    Method,
    /// Enumeration.
    Enum,
    /// Constructor inside a class-like body.
    Constructor,
    /// Field of a class-like declaration.
    Field,
    /// Module or local variable.
    Variable,
}

impl SymbolKind {
    /// Convert to string for storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Class => "class",
            SymbolKind::Interface => "interface",
            SymbolKind::Function => "function",
            SymbolKind::Method => "method",
            SymbolKind::Enum => "enum",
            SymbolKind::Constructor => "constructor",
            SymbolKind::Field => "field",
            SymbolKind::Variable => "variable",
        }
    }

    /// Keyword used when a symbol has to be shown without a signature.
    pub fn prefix(&self) -> &'static str {
        match self {
            SymbolKind::Class => "class ",
            SymbolKind::Interface => "interface ",
            SymbolKind::Function => "function ",
            SymbolKind::Method => "method ",
            SymbolKind::Enum => "enum ",
            SymbolKind::Constructor => "constructor ",
            SymbolKind::Field => "field ",
            SymbolKind::Variable => "var ",
        }
    }

    /// Whether symbols of this kind open a class context for their body.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            SymbolKind::Class | SymbolKind::Interface | SymbolKind::Enum
        )
    }
}

/// A declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Declared identifier. Never empty.
    pub name: String,

    /// Symbol kind.
    pub kind: SymbolKind,

    /// Start line of the declaration (1-based).
    pub line: usize,

    /// Best-effort rendered signature. Never empty.
    pub signature: String,

    /// Language name the symbol was extracted with.
    pub language: String,

    /// Declarations lexically nested inside this one, in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Symbol>,
}

impl Symbol {
    /// Create a symbol without children.
    pub fn new(
        name: impl Into<String>,
        kind: SymbolKind,
        line: usize,
        signature: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
            signature: signature.into(),
            language: language.into(),
            children: Vec::new(),
        }
    }

    /// Text shown for this symbol in a tree view.
    pub fn display_line(&self) -> String {
        if self.signature.is_empty() {
            format!("{}{}", self.kind.prefix(), self.name)
        } else {
            self.signature.clone()
        }
    }

    /// Number of symbols in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Symbol::count).sum::<usize>()
    }
}

/// Extraction result for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Path relative to the repository root, `/`-separated.
    pub path: String,

    /// Language the file was classified as.
    pub language: String,

    /// Number of lines in the file.
    pub lines: usize,

    /// Top-level symbols, in source order.
    pub symbols: Vec<Symbol>,

    /// Whether the language has a dedicated signature extractor.
    pub has_signature_support: bool,
}

impl FileInfo {
    /// File name component of `path`.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Total number of symbols in the file, nested ones included.
    pub fn symbol_count(&self) -> usize {
        self.symbols.iter().map(Symbol::count).sum()
    }
}

/// A directory of the repository with its files and subdirectories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryInfo {
    /// Directory name (`.` for the root).
    pub name: String,

    /// Path relative to the repository root (`.` for the root).
    pub path: String,

    /// Files directly inside this directory.
    pub files: Vec<FileInfo>,

    /// Subdirectories, in first-seen order.
    pub subdirs: Vec<DirectoryInfo>,
}

impl DirectoryInfo {
    /// Create the root directory node.
    pub fn root() -> Self {
        Self {
            name: ".".to_string(),
            path: ".".to_string(),
            files: Vec::new(),
            subdirs: Vec::new(),
        }
    }

    /// Insert a file under the directory chain named by its relative path.
    pub fn insert(&mut self, file: FileInfo) {
        let components: Vec<String> = file
            .path
            .split('/')
            .filter(|c| !c.is_empty() && *c != ".")
            .map(str::to_string)
            .collect();
        let dirs = match components.split_last() {
            Some((_, dirs)) => dirs,
            None => &[][..],
        };

        let mut current = self;
        for dir in dirs {
            let index = match current.subdirs.iter().position(|d| &d.name == dir) {
                Some(index) => index,
                None => {
                    let path = if current.path == "." {
                        dir.clone()
                    } else {
                        format!("{}/{}", current.path, dir)
                    };
                    current.subdirs.push(DirectoryInfo {
                        name: dir.clone(),
                        path,
                        files: Vec::new(),
                        subdirs: Vec::new(),
                    });
                    current.subdirs.len() - 1
                }
            };
            current = &mut current.subdirs[index];
        }
        current.files.push(file);
    }

    /// All files in this subtree, depth-first, files before subdirectories.
    pub fn all_files(&self) -> Vec<&FileInfo> {
        let mut out: Vec<&FileInfo> = self.files.iter().collect();
        for sub in &self.subdirs {
            out.extend(sub.all_files());
        }
        out
    }
}

/// Summary of a whole repository run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    /// Display name of the repository.
    pub name: String,

    /// Root path as given by the caller.
    pub root_path: String,

    /// Directory tree holding every processed file.
    pub structure: DirectoryInfo,

    /// Number of discovered files per language.
    pub languages: BTreeMap<String, usize>,

    /// Whether a configuration and a parser exist for each language.
    pub supported_languages: BTreeMap<String, bool>,

    /// Number of discovered files.
    pub total_files: usize,

    /// Number of lines across discovered files.
    pub total_lines: usize,
}

impl RepoSummary {
    /// Whether a language was both configured and parseable during the run.
    pub fn is_supported(&self, language: &str) -> bool {
        self.supported_languages
            .get(language)
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str) -> FileInfo {
        FileInfo {
            path: path.to_string(),
            language: "python".to_string(),
            lines: 1,
            symbols: Vec::new(),
            has_signature_support: true,
        }
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(SymbolKind::Class.as_str(), "class");
        assert_eq!(SymbolKind::Method.as_str(), "method");
        assert_eq!(SymbolKind::Variable.prefix(), "var ");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&SymbolKind::Interface).unwrap();
        assert_eq!(json, "\"interface\"");
    }

    #[test]
    fn test_display_line_falls_back_to_prefix() {
        let mut symbol = Symbol::new("Foo", SymbolKind::Class, 1, "", "python");
        assert_eq!(symbol.display_line(), "class Foo");
        symbol.signature = "class Foo(Base)".to_string();
        assert_eq!(symbol.display_line(), "class Foo(Base)");
    }

    #[test]
    fn test_directory_insert_builds_nested_tree() {
        let mut root = DirectoryInfo::root();
        root.insert(file("main.py"));
        root.insert(file("pkg/a.py"));
        root.insert(file("pkg/sub/b.py"));
        root.insert(file("pkg/c.py"));

        assert_eq!(root.files.len(), 1);
        assert_eq!(root.subdirs.len(), 1);
        let pkg = &root.subdirs[0];
        assert_eq!(pkg.name, "pkg");
        assert_eq!(pkg.path, "pkg");
        assert_eq!(pkg.files.len(), 2);
        assert_eq!(pkg.subdirs[0].path, "pkg/sub");
        assert_eq!(root.all_files().len(), 4);
    }

    #[test]
    fn test_symbol_count_includes_children() {
        let mut class = Symbol::new("C", SymbolKind::Class, 1, "class C", "python");
        class
            .children
            .push(Symbol::new("m", SymbolKind::Method, 2, "def m", "python"));
        let info = FileInfo {
            symbols: vec![class],
            ..file("x.py")
        };
        assert_eq!(info.symbol_count(), 2);
        assert_eq!(info.file_name(), "x.py");
    }
}
