//! Repository discovery.
//!
//! Walks a repository root, classifies files by extension and produces the
//! ordered file list the orchestrator consumes. Hidden files and anything
//! matched by `.gitignore` are skipped.

use super::ScanOptions;
use crate::error::{Result, SymtreeError};
use crate::language::{detect::detect_language, LanguageRegistry};
use ignore::WalkBuilder;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A source file selected for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path as found on disk.
    pub path: PathBuf,
    /// Path relative to the repository root, `/`-separated.
    pub relative: String,
    /// Detected language name.
    pub language: String,
    /// Number of lines.
    pub lines: usize,
}

/// Result of walking a repository.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Display name of the repository (root directory name).
    pub repo_name: String,
    /// Root that was walked.
    pub root: PathBuf,
    /// Selected files, sorted by relative path.
    pub files: Vec<DiscoveredFile>,
    /// Number of selected files per language.
    pub language_counts: BTreeMap<String, usize>,
    /// Number of selected files.
    pub total_files: usize,
    /// Lines across selected files.
    pub total_lines: usize,
}

/// Count lines the way editors do: a trailing partial line counts.
pub fn count_lines(text: &str) -> usize {
    let newlines = text.bytes().filter(|&b| b == b'\n').count();
    if text.is_empty() || text.ends_with('\n') {
        newlines
    } else {
        newlines + 1
    }
}

fn count_file_lines(path: &Path) -> usize {
    match std::fs::read(path) {
        Ok(bytes) => count_lines(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            log::debug!("Cannot count lines of {}: {}", path.display(), e);
            0
        }
    }
}

/// Display name for a repository root.
pub fn repo_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Walk `root` and select the files to extract.
///
/// Language filter and excludes are applied first, then files are sorted by
/// relative path and truncated to `max_files`. Lines are only counted for
/// files that survive the cut.
pub fn discover(
    registry: &LanguageRegistry,
    root: &Path,
    options: &ScanOptions,
) -> Result<ScanResult> {
    if !root.is_dir() {
        return Err(SymtreeError::InvalidRoot(root.to_path_buf()));
    }

    let excludes = options
        .excludes
        .iter()
        .map(|pattern| glob::Pattern::new(pattern))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .require_git(false)
        .follow_links(false)
        .build();

    let mut selected: Vec<(PathBuf, String, String)> = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Error walking {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Some(language) = detect_language(registry, path) else {
            continue;
        };
        if !options.languages.is_empty() && !options.languages.iter().any(|l| l == language) {
            continue;
        }

        let relative = relative_path(root, path);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if excludes
            .iter()
            .any(|p| p.matches(&relative) || p.matches(&file_name))
        {
            log::debug!("Excluded {}", relative);
            continue;
        }

        selected.push((path.to_path_buf(), relative, language.to_string()));
    }

    selected.sort_by(|a, b| a.1.cmp(&b.1));
    if let Some(max) = options.max_files {
        if selected.len() > max {
            log::info!("Limiting scan to {} of {} files", max, selected.len());
            selected.truncate(max);
        }
    }

    let mut result = ScanResult {
        repo_name: repo_name(root),
        root: root.to_path_buf(),
        ..ScanResult::default()
    };
    for (path, relative, language) in selected {
        let lines = count_file_lines(&path);
        *result.language_counts.entry(language.clone()).or_default() += 1;
        result.total_lines += lines;
        result.files.push(DiscoveredFile {
            path,
            relative,
            language,
            lines,
        });
    }
    result.total_files = result.files.len();
    Ok(result)
}
