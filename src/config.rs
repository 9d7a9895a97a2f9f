//! Configuration management for the Atlas validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (project, then user config directory)
//! - CI environment detection, resolved once at startup

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::OutputFormat;

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = "atlas-lint.toml";

/// When to emit GitHub Actions annotations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationMode {
    /// Only when running under GitHub Actions
    #[default]
    Auto,
    Always,
    Never,
}

/// Command-line arguments for the validator
#[derive(Debug, Parser)]
#[command(name = "atlas-lint")]
#[command(about = "Validate Atlas Markdown documents")]
#[command(version)]
pub struct Args {
    /// Atlas Markdown file to validate
    pub file: PathBuf,

    #[arg(long, value_enum, help = "Report format (text, json)")]
    pub format: Option<OutputFormat>,

    #[arg(long, value_enum, help = "Emit GitHub Actions annotations (auto, always, never)")]
    pub annotations: Option<AnnotationMode>,

    /// Explicit config file; skips the default lookup
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings read from a TOML config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
    pub annotations: Option<AnnotationMode>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub annotations: AnnotationMode,
    pub log_level: String,
    /// Whether the process runs under GitHub Actions
    pub github_actions: bool,
}

impl Config {
    /// Create configuration from command-line arguments and the environment
    pub fn from_args_and_env(args: Args) -> Result<Self> {
        let file_config = match &args.config {
            Some(path) => Some(FileConfig::load(path)?),
            None => default_config_paths()
                .into_iter()
                .find(|path| path.is_file())
                .map(|path| FileConfig::load(&path))
                .transpose()?,
        };
        let github_actions = std::env::var("GITHUB_ACTIONS").as_deref() == Ok("true");

        Ok(Self::from_parts(args, file_config.unwrap_or_default(), github_actions))
    }

    /// Merge sources explicitly; CLI flags win over the config file
    pub fn from_parts(args: Args, file_config: FileConfig, github_actions: bool) -> Self {
        Config {
            file: args.file,
            format: args.format.or(file_config.format).unwrap_or_default(),
            annotations: args
                .annotations
                .or(file_config.annotations)
                .unwrap_or_default(),
            log_level: args
                .log_level
                .or(file_config.log_level)
                .unwrap_or_else(|| "warn".to_string()),
            github_actions,
        }
    }

    pub fn emit_annotations(&self) -> bool {
        match self.annotations {
            AnnotationMode::Always => true,
            AnnotationMode::Never => false,
            AnnotationMode::Auto => self.github_actions,
        }
    }

    /// File name as shown in reports
    pub fn display_name(&self) -> String {
        self.file.display().to_string()
    }
}

/// Project config first, then the user config directory
fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("atlas-lint").join("config.toml"));
    }
    paths
}

/// Command-line arguments for the language server
#[derive(Debug, Parser)]
#[command(name = "atlas-ls")]
#[command(about = "Language server for Atlas Markdown documents")]
#[command(version)]
pub struct ServerArgs {
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["atlas-lint", "atlas.md"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_parts(args(&[]), FileConfig::default(), false);
        assert_eq!(config.file, PathBuf::from("atlas.md"));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.annotations, AnnotationMode::Auto);
        assert_eq!(config.log_level, "warn");
        assert!(!config.emit_annotations());
    }

    #[test]
    fn test_auto_annotations_follow_ci_signal() {
        let config = Config::from_parts(args(&[]), FileConfig::default(), true);
        assert!(config.emit_annotations());

        let config = Config::from_parts(args(&["--annotations", "never"]), FileConfig::default(), true);
        assert!(!config.emit_annotations());

        let config = Config::from_parts(args(&["--annotations", "always"]), FileConfig::default(), false);
        assert!(config.emit_annotations());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file_config = FileConfig::parse("format = \"json\"\nlog_level = \"debug\"\n").unwrap();

        let config = Config::from_parts(args(&[]), file_config.clone(), false);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");

        let config = Config::from_parts(args(&["--format", "text"]), file_config, false);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_file_config_rejects_unknown_keys() {
        assert!(FileConfig::parse("fromat = \"json\"").is_err());
        assert!(FileConfig::parse("annotations = \"sometimes\"").is_err());
        assert_eq!(FileConfig::parse("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = FileConfig::load(Path::new("/nonexistent/atlas-lint.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/atlas-lint.toml"));
    }
}
