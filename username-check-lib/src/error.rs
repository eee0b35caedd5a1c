//! Error handling for username scanning operations.
//!
//! This module defines one error type covering the ways a scan can fail,
//! from an unreadable platform list to per-probe network errors.

use std::fmt;

/// Main error type for username scanning operations.
///
/// Per-probe failures never escalate beyond the affected platform's
/// [`crate::ProbeResult`]; only a total platform-list failure aborts a scan.
#[derive(Debug, Clone)]
pub enum ScanError {
    /// The platform list could not be loaded at all (I/O failure)
    SourceUnavailable { path: String, message: String },

    /// A platform-list line survived the skip filter but could not be
    /// parsed. Malformed lines are normally skipped, so this is reserved
    /// for callers that want strict parsing.
    SourceMalformed { line: usize, content: String },

    /// Network-related errors (connection, DNS, TLS, etc.)
    NetworkError {
        message: String,
        source: Option<String>,
    },

    /// A probe exceeded its per-request timeout
    Timeout {
        operation: String,
        duration: std::time::Duration,
    },

    /// Configuration errors (invalid settings, unparseable config file)
    ConfigError { message: String },

    /// File I/O errors outside the platform list (config files, etc.)
    FileError { path: String, message: String },

    /// Generic internal errors that don't fit other categories
    Internal { message: String },
}

impl ScanError {
    /// Create a new source-unavailable error.
    pub fn source_unavailable<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new source-malformed error.
    pub fn source_malformed<C: Into<String>>(line: usize, content: C) -> Self {
        Self::SourceMalformed {
            line,
            content: content.into(),
        }
    }

    /// Create a new network error.
    pub fn network<M: Into<String>>(message: M) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new network error with source information.
    pub fn network_with_source<M: Into<String>, S: Into<String>>(message: M, source: S) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new timeout error.
    pub fn timeout<O: Into<String>>(operation: O, duration: std::time::Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error means the whole scan must be aborted rather than
    /// recorded against a single platform.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable { path, message } => {
                write!(f, "Failed to load platform list '{}': {}", path, message)
            }
            Self::SourceMalformed { line, content } => {
                write!(f, "Malformed platform entry at line {}: '{}'", line, content)
            }
            Self::NetworkError { message, source } => {
                if let Some(source) = source {
                    write!(f, "Network error: {} (source: {})", message, source)
                } else {
                    write!(f, "Network error: {}", message)
                }
            }
            Self::Timeout {
                operation,
                duration,
            } => {
                write!(f, "Timeout after {:?} during: {}", duration, operation)
            }
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::FileError { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for ScanError {}

// From conversions for common error types
impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout("HTTP request", std::time::Duration::from_secs(10))
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err.to_string())
        } else {
            Self::network_with_source("HTTP request failed", err.to_string())
        }
    }
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal {
            message: format!("I/O error: {}", err),
        }
    }
}
