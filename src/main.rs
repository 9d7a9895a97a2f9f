use std::fs;
use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use atlas_lint::config::{Args, Config};
use atlas_lint::report;
use atlas_lint::validate_document;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                // --help and --version
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Validate the configured file; `Ok(false)` when any error was reported
fn run(args: Args) -> Result<bool> {
    let config = Config::from_args_and_env(args)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let content = fs::read_to_string(&config.file)
        .with_context(|| format!("failed to read {}", config.file.display()))?;

    let result = validate_document(&content);
    log::info!(
        "validated {}: {} documents, {} errors, {} warnings",
        config.file.display(),
        result.documents.len(),
        result.error_count(),
        result.warning_count()
    );

    let name = config.display_name();
    let mut stdout = std::io::stdout().lock();
    if config.emit_annotations() {
        stdout.write_all(report::annotations::render(&name, &result.issues).as_bytes())?;
    }
    stdout.write_all(report::render(config.format, &name, &result)?.as_bytes())?;
    stdout.flush()?;

    Ok(result.is_valid())
}
