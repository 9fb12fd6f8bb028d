use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use walkdir::WalkDir;

use jsx_text_lint::checkers::default_checkers;
use jsx_text_lint::config::{Args, Config, OutputFormat};
use jsx_text_lint::parser::parse_document;
use jsx_text_lint::validation::Validator;

/// One diagnostic with its file, for machine-readable output
#[derive(Debug, Serialize)]
struct ReportEntry {
    path: String,
    line: usize,
    rule_id: String,
    message: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.clone()),
    )
    .init();

    let config = Config::from_args(args)?;

    let files = collect_source_files(&config.paths);
    log::info!("linting {} file(s)", files.len());

    let validator = Validator::new(
        config.policy.clone(),
        default_checkers(config.forbidden_phrases.clone()),
    )
    .with_checker_timeout(config.checker_timeout);

    let mut report = Vec::new();
    for file in files {
        let source = match tokio::fs::read_to_string(&file).await {
            Ok(source) => source,
            Err(e) => {
                log::warn!("skipping {}: {e}", file.display());
                continue;
            }
        };
        let doc = parse_document(&file, &source);
        for diagnostic in validator.validate(&doc).await {
            report.push(ReportEntry {
                path: file.display().to_string(),
                line: diagnostic.line,
                rule_id: diagnostic.rule_id,
                message: diagnostic.message,
            });
        }
    }

    match config.format {
        OutputFormat::Text => {
            for entry in &report {
                println!(
                    "{}:{} [{}] {}",
                    entry.path, entry.line, entry.rule_id, entry.message
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if !report.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

/// Expand the given paths into .jsx/.tsx files, skipping node_modules
fn collect_source_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        let walk = WalkDir::new(path)
            .into_iter()
            .filter_entry(|e| e.file_name() != "node_modules");
        for entry in walk {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("walk error under {}: {e}", path.display());
                    continue;
                }
            };
            if entry.file_type().is_file() && is_source_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }
    files.sort();
    files
}

fn is_source_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("jsx") | Some("tsx")
    )
}
