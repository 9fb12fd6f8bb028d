//! Configuration for the linter
//!
//! Handles:
//! - Command-line argument parsing
//! - TOML configuration file loading, with graceful fallback to defaults

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::validation::attributes::{
    AttributePolicy, DEFAULT_IGNORE_ATTRIBUTES, DEFAULT_TARGET_ATTRIBUTES,
};

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "jsx-text-lint.toml";

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "jsx-text-lint")]
#[command(about = "Lints user-visible text in JSX/TSX sources for spelling and style")]
#[command(version)]
pub struct Args {
    /// Files or directories to scan for .jsx/.tsx sources
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Configuration file to use instead of the discovered one
    #[arg(long, help = "Path to a jsx-text-lint.toml file")]
    pub config: Option<PathBuf>,

    /// Diagnostic output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level for the linter
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    /// Per-checker call timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub checker_timeout_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// On-disk configuration file (TOML)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub attributes: AttributeSection,
    pub style: StyleSection,
}

/// `[attributes]` section: replaces the built-in name sets when present
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AttributeSection {
    pub target: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
}

/// `[style]` section
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct StyleSection {
    pub forbidden_phrases: Vec<String>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub log_level: String,
    pub checker_timeout: Duration,
    pub policy: AttributePolicy,
    pub forbidden_phrases: Vec<String>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match discover_config_path(args.config.as_deref()) {
            Some(path) => match ConfigFile::load(&path) {
                Ok(file) => {
                    log::info!("using configuration from {}", path.display());
                    file
                }
                Err(e) => {
                    // Degrade to defaults rather than refusing to lint
                    log::warn!("{e:#}; using built-in defaults");
                    ConfigFile::default()
                }
            },
            None => ConfigFile::default(),
        };

        Ok(Self {
            paths: args.paths,
            format: args.format,
            log_level: args.log_level,
            checker_timeout: Duration::from_millis(args.checker_timeout_ms),
            policy: file.attribute_policy(),
            forbidden_phrases: file.style.forbidden_phrases,
        })
    }
}

impl ConfigFile {
    /// Parse a configuration file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Build the attribute policy, falling back to the built-in sets for
    /// any list the file does not specify
    pub fn attribute_policy(&self) -> AttributePolicy {
        let target = self
            .attributes
            .target
            .clone()
            .unwrap_or_else(|| DEFAULT_TARGET_ATTRIBUTES.iter().map(|s| s.to_string()).collect());
        let ignore = self
            .attributes
            .ignore
            .clone()
            .unwrap_or_else(|| DEFAULT_IGNORE_ATTRIBUTES.iter().map(|s| s.to_string()).collect());
        AttributePolicy::new(target, ignore)
    }
}

/// Resolution order: explicit flag, project-local file, user config dir
fn discover_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join("jsx-text-lint").join("config.toml");
        if user.is_file() {
            return Some(user);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::AttributeDisposition;

    #[test]
    fn test_parse_full_config_file() {
        let raw = r#"
            [attributes]
            target = ["label"]
            ignore = ["data-*"]

            [style]
            forbidden-phrases = ["click here"]
        "#;
        let file: ConfigFile = toml::from_str(raw).unwrap();
        assert_eq!(file.attributes.target, Some(vec!["label".to_string()]));
        assert_eq!(file.style.forbidden_phrases, vec!["click here"]);

        let policy = file.attribute_policy();
        assert_eq!(policy.classify("label"), AttributeDisposition::Checked);
        assert_eq!(policy.classify("title"), AttributeDisposition::NotChecked);
        assert_eq!(policy.classify("data-x"), AttributeDisposition::Ignored);
    }

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        let policy = file.attribute_policy();
        assert_eq!(policy.classify("title"), AttributeDisposition::Checked);
        assert_eq!(policy.classify("className"), AttributeDisposition::Ignored);
    }

    #[test]
    fn test_empty_lists_check_nothing() {
        let raw = "[attributes]\ntarget = []\nignore = []\n";
        let file: ConfigFile = toml::from_str(raw).unwrap();
        let policy = file.attribute_policy();
        assert_eq!(policy.classify("title"), AttributeDisposition::NotChecked);
    }
}
