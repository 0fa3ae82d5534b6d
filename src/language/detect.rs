//! Language detection from file extensions.
//!
//! Table-driven: the extension index of the language registry decides.
//! Unknown extensions return None, never infer from content.

use super::LanguageRegistry;
use std::path::Path;

/// Detect the language name of a file from its extension.
///
/// Extensions are matched case-sensitively.
///
/// # Examples
///
/// ```
/// # use symtree::language::{detect::detect_language, LanguageRegistry};
/// # use std::path::Path;
/// let registry = LanguageRegistry::builtin();
/// assert_eq!(detect_language(&registry, Path::new("main.rs")), Some("rust"));
/// assert_eq!(detect_language(&registry, Path::new("script.py")), Some("python"));
/// assert_eq!(detect_language(&registry, Path::new("file.txt")), None);
/// ```
pub fn detect_language<'a>(registry: &'a LanguageRegistry, path: &Path) -> Option<&'a str> {
    let extension = path.extension()?.to_str()?;
    registry.language_for_extension(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(path: &str) -> Option<String> {
        let registry = LanguageRegistry::builtin();
        detect_language(&registry, Path::new(path)).map(str::to_string)
    }

    #[test]
    fn test_detect_rust() {
        assert_eq!(detect("main.rs").as_deref(), Some("rust"));
        assert_eq!(detect("lib.rs").as_deref(), Some("rust"));
    }

    #[test]
    fn test_detect_python() {
        assert_eq!(detect("script.py").as_deref(), Some("python"));
        assert_eq!(detect("stubs.pyi").as_deref(), Some("python"));
    }

    #[test]
    fn test_detect_c_and_cpp() {
        assert_eq!(detect("main.c").as_deref(), Some("c"));
        assert_eq!(detect("header.h").as_deref(), Some("c"));
        assert_eq!(detect("main.cpp").as_deref(), Some("cpp"));
        assert_eq!(detect("header.hpp").as_deref(), Some("cpp"));
        assert_eq!(detect("main.cc").as_deref(), Some("cpp"));
        assert_eq!(detect("main.cxx").as_deref(), Some("cpp"));
    }

    #[test]
    fn test_detect_java() {
        assert_eq!(detect("Main.java").as_deref(), Some("java"));
    }

    #[test]
    fn test_detect_javascript() {
        assert_eq!(detect("script.js").as_deref(), Some("javascript"));
        assert_eq!(detect("module.mjs").as_deref(), Some("javascript"));
        assert_eq!(detect("module.cjs").as_deref(), Some("javascript"));
        assert_eq!(detect("component.jsx").as_deref(), Some("javascript"));
    }

    #[test]
    fn test_detect_typescript() {
        assert_eq!(detect("component.ts").as_deref(), Some("typescript"));
        assert_eq!(detect("component.tsx").as_deref(), Some("tsx"));
    }

    #[test]
    fn test_detect_configured_without_grammar() {
        assert_eq!(detect("main.go").as_deref(), Some("go"));
        assert_eq!(detect("app.rb").as_deref(), Some("ruby"));
    }

    #[test]
    fn test_unknown_extension_returns_none() {
        assert_eq!(detect("file.unknown").as_deref(), None);
        assert_eq!(detect("file.txt").as_deref(), None);
        assert_eq!(detect("file.md").as_deref(), None);
    }

    #[test]
    fn test_no_extension_returns_none() {
        assert_eq!(detect("Makefile").as_deref(), None);
        assert_eq!(detect("Dockerfile").as_deref(), None);
        assert_eq!(detect("").as_deref(), None);
    }

    #[test]
    fn test_dotfile_returns_none() {
        assert_eq!(detect(".gitignore").as_deref(), None);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(detect("file.RS").as_deref(), None);
        assert_eq!(detect("file.PY").as_deref(), None);
    }

    #[test]
    fn test_path_with_directory() {
        assert_eq!(detect("src/module/main.rs").as_deref(), Some("rust"));
        assert_eq!(detect("/usr/local/bin/script.py").as_deref(), Some("python"));
    }
}
