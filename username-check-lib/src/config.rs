//! Configuration file parsing and environment overrides.
//!
//! This module handles loading configuration from TOML files and from
//! `UC_*` environment variables. Precedence merging lives in the caller
//! (the CLI): CLI flags > environment > local file > home file > defaults.

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loaded from a TOML file.
///
/// ```toml
/// [defaults]
/// timeout = "10s"
/// concurrency = 20
/// platforms_file = "socials.txt"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Default values for scan options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

/// Default configuration values that map to CLI options.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Per-probe timeout as a string, e.g. "10s", "2m"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,

    /// Probe concurrency cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,

    /// Platform-list file to scan instead of the builtin table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms_file: Option<String>,
}

/// Configuration collected from `UC_*` environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// UC_TIMEOUT, e.g. "10s"
    pub timeout: Option<String>,

    /// UC_CONCURRENCY
    pub concurrency: Option<usize>,

    /// UC_PLATFORMS_FILE
    pub platforms_file: Option<String>,
}

/// Read `UC_*` environment variables into an [`EnvConfig`].
///
/// Invalid values are ignored rather than fatal; explicit CLI flags remain
/// the place for strict validation.
pub fn load_env_config() -> EnvConfig {
    let mut config = EnvConfig::default();

    if let Ok(timeout) = env::var("UC_TIMEOUT") {
        config.timeout = Some(timeout);
    }

    if let Ok(concurrency) = env::var("UC_CONCURRENCY") {
        match concurrency.parse::<usize>() {
            Ok(value) if (1..=100).contains(&value) => config.concurrency = Some(value),
            _ => debug!(value = %concurrency, "ignoring invalid UC_CONCURRENCY"),
        }
    }

    if let Ok(path) = env::var("UC_PLATFORMS_FILE") {
        config.platforms_file = Some(path);
    }

    config
}

/// Configuration discovery and loading.
pub struct ConfigManager {
    /// Whether to emit debug output for config discovery
    pub verbose: bool,
}

impl ConfigManager {
    /// Create a new configuration manager.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Load configuration from a specific file.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<FileConfig, ScanError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ScanError::file_error(
                path.to_string_lossy(),
                "Configuration file not found",
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ScanError::file_error(
                path.to_string_lossy(),
                format!("Failed to read configuration file: {}", e),
            )
        })?;

        let config: FileConfig = toml::from_str(&content)
            .map_err(|e| ScanError::config(format!("Failed to parse TOML configuration: {}", e)))?;

        self.validate(&config)?;

        Ok(config)
    }

    /// Discover and load the first config file found, searching the current
    /// directory then the home directory.
    ///
    /// Returns an empty config if no file exists.
    pub fn discover_and_load(&self) -> Result<FileConfig, ScanError> {
        for path in self.candidate_paths() {
            if path.exists() {
                if self.verbose {
                    debug!(path = %path.display(), "loading discovered config file");
                }
                return self.load_file(&path);
            }
        }

        Ok(FileConfig::default())
    }

    fn candidate_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".username-check.toml")];

        if let Some(home) = env::var_os("HOME") {
            paths.push(PathBuf::from(home).join(".username-check.toml"));
        }

        paths
    }

    fn validate(&self, config: &FileConfig) -> Result<(), ScanError> {
        if let Some(defaults) = &config.defaults {
            if let Some(concurrency) = defaults.concurrency {
                if !(1..=100).contains(&concurrency) {
                    return Err(ScanError::config(format!(
                        "concurrency must be between 1 and 100, got {}",
                        concurrency
                    )));
                }
            }

            if let Some(timeout) = &defaults.timeout {
                parse_timeout_string(timeout)?;
            }
        }

        Ok(())
    }
}

/// Parse a timeout string like "10s", "2m", or bare seconds into seconds.
pub fn parse_timeout_string(timeout_str: &str) -> Result<u64, ScanError> {
    let timeout_str = timeout_str.trim().to_lowercase();

    let parsed = if let Some(secs) = timeout_str.strip_suffix('s') {
        secs.parse::<u64>().ok()
    } else if let Some(mins) = timeout_str.strip_suffix('m') {
        mins.parse::<u64>().ok().map(|m| m * 60)
    } else {
        // Assume seconds if no unit
        timeout_str.parse::<u64>().ok()
    };

    parsed.ok_or_else(|| ScanError::config(format!("Invalid timeout format: '{}'", timeout_str)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_timeout_strings() {
        assert_eq!(parse_timeout_string("10s").unwrap(), 10);
        assert_eq!(parse_timeout_string("2m").unwrap(), 120);
        assert_eq!(parse_timeout_string("30").unwrap(), 30);
        assert_eq!(parse_timeout_string(" 5S ").unwrap(), 5);
        assert!(parse_timeout_string("fast").is_err());
        assert!(parse_timeout_string("").is_err());
    }

    #[test]
    fn loads_full_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[defaults]\ntimeout = \"5s\"\nconcurrency = 40\nplatforms_file = \"socials.txt\""
        )
        .unwrap();

        let config = ConfigManager::new(false).load_file(file.path()).unwrap();
        let defaults = config.defaults.unwrap();

        assert_eq!(defaults.timeout.as_deref(), Some("5s"));
        assert_eq!(defaults.concurrency, Some(40));
        assert_eq!(defaults.platforms_file.as_deref(), Some("socials.txt"));
    }

    #[test]
    fn rejects_out_of_range_concurrency() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nconcurrency = 500").unwrap();

        let err = ConfigManager::new(false).load_file(file.path()).unwrap_err();
        assert!(matches!(err, ScanError::ConfigError { .. }));
    }

    #[test]
    fn rejects_unparseable_timeout() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\ntimeout = \"soon\"").unwrap();

        let err = ConfigManager::new(false).load_file(file.path()).unwrap_err();
        assert!(matches!(err, ScanError::ConfigError { .. }));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = ConfigManager::new(false)
            .load_file("/nonexistent/.username-check.toml")
            .unwrap_err();
        assert!(matches!(err, ScanError::FileError { .. }));
    }
}
