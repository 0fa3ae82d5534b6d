//! Symtree CLI binary
//!
//! This is the main entry point for the symtree command-line interface.
//! The CLI is a thin adapter over library APIs.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use symtree::cli::{Commands, OutputFormat};
use symtree::extract::SymbolEngine;
use symtree::ingest::{process_file, process_repository, ScanOptions};
use symtree::language::LanguageRegistry;
use symtree::render;
use symtree::signature::ExtractorRegistry;
use symtree::SymtreeError;

fn main() -> ExitCode {
    let cli = symtree::cli::parse_args();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Scan {
            path,
            languages,
            max_files,
            excludes,
            format,
            by_structure,
            parallel,
            language_file,
            output,
        } => {
            let options = ScanOptions {
                languages,
                max_files,
                excludes,
                parallel,
            };
            execute_scan(
                &path,
                &options,
                format,
                by_structure,
                language_file.as_deref(),
                output,
            )
        }
        Commands::File {
            path,
            language,
            format,
            language_file,
        } => execute_file(&path, language.as_deref(), format, language_file.as_deref()),
        Commands::Languages { language_file } => execute_languages(language_file.as_deref()),
    };

    match result {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Build the engine, applying an optional override file.
fn build_engine(language_file: Option<&Path>) -> Result<SymbolEngine, SymtreeError> {
    let mut languages = LanguageRegistry::builtin();
    if let Some(path) = language_file {
        let count = languages.load_overrides(path)?;
        log::info!("Loaded {} language overrides from {}", count, path.display());
    }
    Ok(SymbolEngine::new(languages, ExtractorRegistry::builtin()))
}

fn execute_scan(
    root: &Path,
    options: &ScanOptions,
    format: OutputFormat,
    by_structure: bool,
    language_file: Option<&Path>,
    output: Option<PathBuf>,
) -> Result<String, SymtreeError> {
    let engine = build_engine(language_file)?;
    let summary = process_repository(&engine, root, options)?;

    let rendered = match format {
        OutputFormat::Text => render::format_repository(&summary, !by_structure),
        OutputFormat::Json => render::to_json(&summary)?,
    };

    match output {
        Some(path) => {
            let mut file = std::fs::File::create(&path).map_err(|source| SymtreeError::Io {
                path: path.clone(),
                source,
            })?;
            writeln!(file, "{}", rendered).map_err(|source| SymtreeError::Io {
                path: path.clone(),
                source,
            })?;
            Ok(format!(
                "Wrote {} files to {}",
                summary.total_files,
                path.display()
            ))
        }
        None => Ok(rendered),
    }
}

fn execute_file(
    path: &Path,
    language: Option<&str>,
    format: OutputFormat,
    language_file: Option<&Path>,
) -> Result<String, SymtreeError> {
    let engine = build_engine(language_file)?;
    let info = process_file(&engine, path, language)?;
    if !engine.is_supported(&info.language) {
        log::warn!("No parser available for {}", info.language);
    }
    match format {
        OutputFormat::Text => Ok(render::format_file(&info)),
        OutputFormat::Json => render::to_json(&info),
    }
}

fn execute_languages(language_file: Option<&Path>) -> Result<String, SymtreeError> {
    let engine = build_engine(language_file)?;
    let mut lines = Vec::new();
    for language in engine.languages().languages() {
        let Some(config) = engine.languages().lookup(language) else {
            continue;
        };
        let parser = if engine.is_supported(language) {
            "SUPPORTED"
        } else {
            "NOT_SUPPORTED"
        };
        let signatures = if engine.has_signature_support(language) {
            "signatures"
        } else {
            "templates"
        };
        lines.push(format!(
            "{} ({}): {}, {} [{}]",
            language,
            config.parser_package,
            parser,
            signatures,
            config.extensions.join(", ")
        ));
    }
    Ok(lines.join("\n"))
}
