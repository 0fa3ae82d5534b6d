//! Repository ingestion: discovery, per-file extraction, aggregation.
//!
//! A single file failing to read is logged and skipped. Only a bad root or
//! an invalid exclude pattern fails the whole run.

pub mod discover;

use crate::error::{Result, SymtreeError};
use crate::extract::SymbolEngine;
use crate::language::detect::detect_language;
use crate::symbol::{DirectoryInfo, FileInfo, RepoSummary};
use discover::{count_lines, discover, DiscoveredFile, ScanResult};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

/// Options for a repository run.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Only process these languages. Empty means all.
    pub languages: Vec<String>,
    /// Process at most this many files, taken in path order.
    pub max_files: Option<usize>,
    /// Glob patterns matched against relative paths and file names.
    pub excludes: Vec<String>,
    /// Extract files on the rayon thread pool.
    pub parallel: bool,
}

/// Process every discovered file of a repository into a `RepoSummary`.
pub fn process_repository(
    engine: &SymbolEngine,
    root: &Path,
    options: &ScanOptions,
) -> Result<RepoSummary> {
    let scan = discover(engine.languages(), root, options)?;
    log::info!(
        "Processing {} files ({} lines) in {}",
        scan.total_files,
        scan.total_lines,
        scan.repo_name
    );
    Ok(process_scan(engine, scan, options.parallel))
}

/// Extract the files of a finished discovery and aggregate them.
///
/// Files that fail to read are dropped from the tree and from every count,
/// so the totals always describe the files listed in `structure`.
pub fn process_scan(engine: &SymbolEngine, scan: ScanResult, parallel: bool) -> RepoSummary {
    // Resolved once per language; the parser cache makes later lookups free.
    let mut supported_languages: BTreeMap<String, bool> = scan
        .language_counts
        .keys()
        .map(|language| (language.clone(), engine.is_supported(language)))
        .collect();
    let signature_support: BTreeMap<String, bool> = scan
        .language_counts
        .keys()
        .map(|language| (language.clone(), engine.has_signature_support(language)))
        .collect();

    let process = |file: &DiscoveredFile| {
        let supported = supported_languages
            .get(&file.language)
            .copied()
            .unwrap_or(false);
        let has_signature_support = signature_support
            .get(&file.language)
            .copied()
            .unwrap_or(false);
        extract_discovered(engine, file, supported, has_signature_support)
    };

    let results: Vec<Option<FileInfo>> = if parallel {
        scan.files.par_iter().map(process).collect()
    } else {
        scan.files.iter().map(process).collect()
    };

    let mut languages = scan.language_counts;
    let mut total_files = scan.total_files;
    let mut total_lines = scan.total_lines;
    let mut skipped = 0;
    let mut structure = DirectoryInfo::root();
    for (file, result) in scan.files.iter().zip(results) {
        match result {
            Some(info) => structure.insert(info),
            None => {
                skipped += 1;
                total_files = total_files.saturating_sub(1);
                total_lines = total_lines.saturating_sub(file.lines);
                if let Some(count) = languages.get_mut(&file.language) {
                    *count = count.saturating_sub(1);
                }
            }
        }
    }
    if skipped > 0 {
        log::warn!("{} of {} files could not be read", skipped, scan.files.len());
        languages.retain(|_, count| *count > 0);
        supported_languages.retain(|language, _| languages.contains_key(language));
    }

    RepoSummary {
        name: scan.repo_name,
        root_path: scan.root.display().to_string(),
        structure,
        languages,
        supported_languages,
        total_files,
        total_lines,
    }
}

fn extract_discovered(
    engine: &SymbolEngine,
    file: &DiscoveredFile,
    supported: bool,
    has_signature_support: bool,
) -> Option<FileInfo> {
    let symbols = if supported {
        match engine.extract_file(&file.path, &file.language) {
            Ok(symbols) => symbols,
            Err(e) => {
                log::warn!("Skipping {}: {}", file.relative, e);
                return None;
            }
        }
    } else {
        Vec::new()
    };
    log::debug!("{}: {} top-level symbols", file.relative, symbols.len());

    Some(FileInfo {
        path: file.relative.clone(),
        language: file.language.clone(),
        lines: file.lines,
        symbols,
        has_signature_support,
    })
}

/// Extract a single file outside of a repository run.
///
/// The language is detected from the extension unless given.
pub fn process_file(
    engine: &SymbolEngine,
    path: &Path,
    language: Option<&str>,
) -> Result<FileInfo> {
    let language = match language {
        Some(language) => language.to_string(),
        None => detect_language(engine.languages(), path)
            .map(str::to_string)
            .ok_or_else(|| {
                SymtreeError::UnsupportedLanguage(format!(
                    "cannot detect language of {}",
                    path.display()
                ))
            })?,
    };
    if engine.languages().lookup(&language).is_none() {
        return Err(SymtreeError::UnsupportedLanguage(language));
    }

    let bytes = std::fs::read(path).map_err(|source| SymtreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8_lossy(&bytes);

    Ok(FileInfo {
        path: path.display().to_string(),
        lines: count_lines(&source),
        symbols: engine.extract_symbols(&source, &language),
        has_signature_support: engine.has_signature_support(&language),
        language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_unreadable_file_is_skipped() {
        let engine = SymbolEngine::builtin();
        let file = DiscoveredFile {
            path: PathBuf::from("/definitely/not/here.py"),
            relative: "here.py".to_string(),
            language: "python".to_string(),
            lines: 3,
        };
        assert!(extract_discovered(&engine, &file, true, true).is_none());

        // Unsupported languages are never read.
        let info = extract_discovered(&engine, &file, false, false).unwrap();
        assert!(info.symbols.is_empty());
        assert_eq!(info.lines, 3);
    }

    #[test]
    fn test_scan_continues_past_unreadable_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "def a():\n    pass\n").unwrap();
        fs::write(dir.path().join("b.py"), "def b():\n    pass\n\n\n").unwrap();
        fs::write(
            dir.path().join("c.java"),
            "class C {\n  void run() {}\n}\n",
        )
        .unwrap();

        let engine = SymbolEngine::builtin();
        let scan = discover(engine.languages(), dir.path(), &ScanOptions::default()).unwrap();
        assert_eq!(scan.total_files, 3);
        fs::remove_file(dir.path().join("b.py")).unwrap();

        for parallel in [false, true] {
            let summary = process_scan(&engine, scan.clone(), parallel);

            let files = summary.structure.all_files();
            let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
            assert_eq!(paths, vec!["a.py", "c.java"]);
            assert_eq!(files[0].symbols[0].name, "a");
            assert_eq!(files[1].symbols[0].name, "C");

            assert_eq!(summary.total_files, 2);
            assert_eq!(summary.total_lines, 2 + 3);
            assert_eq!(summary.languages.get("python"), Some(&1));
            assert_eq!(summary.languages.get("java"), Some(&1));
        }
    }

    #[test]
    fn test_language_with_only_unreadable_files_is_dropped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "def a():\n    pass\n").unwrap();
        fs::write(dir.path().join("Gone.java"), "class Gone {}\n").unwrap();

        let engine = SymbolEngine::builtin();
        let scan = discover(engine.languages(), dir.path(), &ScanOptions::default()).unwrap();
        fs::remove_file(dir.path().join("Gone.java")).unwrap();

        let summary = process_scan(&engine, scan, false);
        assert_eq!(summary.total_files, 1);
        assert!(!summary.languages.contains_key("java"));
        assert!(!summary.supported_languages.contains_key("java"));
        assert!(summary.is_supported("python"));
    }
}
