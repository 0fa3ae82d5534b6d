//! Text and JSON rendering of extraction results.
//!
//! Rendering only reads the model; nothing here re-runs extraction.

use crate::error::Result;
use crate::symbol::{DirectoryInfo, FileInfo, RepoSummary, Symbol};
use std::collections::BTreeMap;

const INDENT: &str = "  ";

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

fn support_status(summary: &RepoSummary, language: &str) -> &'static str {
    if summary.is_supported(language) {
        "SUPPORTED"
    } else {
        "NOT_SUPPORTED"
    }
}

/// Render a repository summary as an indented tree.
///
/// With `group_by_language` files are listed per language, otherwise by
/// directory with files before subdirectories.
pub fn format_repository(summary: &RepoSummary, group_by_language: bool) -> String {
    let mut lines = vec![
        format!("Repository: {}", summary.name),
        format!(
            "Total files: {}, Total lines: {}",
            summary.total_files, summary.total_lines
        ),
        String::new(),
        "Language Support:".to_string(),
    ];
    for (language, count) in &summary.languages {
        lines.push(format!(
            "  {}: {} files ({})",
            language,
            count,
            support_status(summary, language)
        ));
    }
    lines.push(String::new());

    if group_by_language {
        format_by_language(summary, &mut lines);
    } else {
        format_directory(&summary.structure, &mut lines, 0);
    }
    lines.join("\n")
}

fn format_by_language(summary: &RepoSummary, lines: &mut Vec<String>) {
    let mut by_language: BTreeMap<&str, Vec<&FileInfo>> = BTreeMap::new();
    for file in summary.structure.all_files() {
        by_language.entry(file.language.as_str()).or_default().push(file);
    }

    for (language, mut files) in by_language {
        files.sort_by(|a, b| a.path.cmp(&b.path));
        lines.push(format!(
            "{} Files ({} files, {}):",
            language.to_uppercase(),
            files.len(),
            support_status(summary, language)
        ));
        for file in files {
            push_file(file, lines, 1);
        }
        lines.push(String::new());
    }
}

fn format_directory(dir: &DirectoryInfo, lines: &mut Vec<String>, depth: usize) {
    let mut files: Vec<&FileInfo> = dir.files.iter().collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    for file in files {
        push_file(file, lines, depth);
    }

    let mut subdirs: Vec<&DirectoryInfo> = dir.subdirs.iter().collect();
    subdirs.sort_by_key(|d| d.name.to_lowercase());
    for sub in subdirs {
        lines.push(format!("{}{}/", indent(depth), sub.name));
        format_directory(sub, lines, depth + 1);
    }
}

fn push_file(file: &FileInfo, lines: &mut Vec<String>, depth: usize) {
    lines.push(format!(
        "{}{} ({}, {} lines)",
        indent(depth),
        file.file_name(),
        file.language,
        file.lines
    ));
    for symbol in &file.symbols {
        push_symbol(symbol, lines, depth + 1);
    }
}

fn push_symbol(symbol: &Symbol, lines: &mut Vec<String>, depth: usize) {
    lines.push(format!("{}{}", indent(depth), symbol.display_line()));
    for child in &symbol.children {
        push_symbol(child, lines, depth + 1);
    }
}

/// Render a single file with its symbols.
pub fn format_file(file: &FileInfo) -> String {
    let mut lines = Vec::new();
    push_file(file, &mut lines, 0);
    lines.join("\n")
}

/// Pretty-printed JSON of any model value.
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
