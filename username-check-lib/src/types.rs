//! Core data types for username existence scanning.
//!
//! This module defines the main data structures used throughout the library:
//! platform specifications, probe targets, probe results, and scan
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Sentinel platform label used when the platform list itself cannot be
/// loaded and the scan is aborted before any probe is dispatched.
pub const SOURCE_FAILURE_PLATFORM: &str = "Error";

/// A platform to probe, described by a URL template.
///
/// The template contains exactly one `%s` placeholder that is replaced by
/// the username at scan time. The name is optional; when absent, a
/// best-effort label is derived from the URL host (see [`crate::target`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSpec {
    /// Human-readable platform label (e.g. "GitHub")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URL template with a single `%s` placeholder for the username
    pub url_template: String,
}

impl PlatformSpec {
    /// Create a spec with an explicit platform name.
    pub fn named<N: Into<String>, T: Into<String>>(name: N, url_template: T) -> Self {
        Self {
            name: Some(name.into()),
            url_template: url_template.into(),
        }
    }

    /// Create a spec without a name. The scan will fall back to deriving
    /// a label from the URL host, which is fragile; prefer [`named`].
    ///
    /// [`named`]: PlatformSpec::named
    pub fn unnamed<T: Into<String>>(url_template: T) -> Self {
        Self {
            name: None,
            url_template: url_template.into(),
        }
    }
}

/// A concrete probe target: one platform, one fully substituted URL.
///
/// Derived from a [`PlatformSpec`] and a username; immutable, one per
/// platform per scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Platform label carried through to the result
    pub platform: String,

    /// Full URL to probe
    pub url: String,
}

/// Outcome of probing one platform for one username.
///
/// Invariant: `error` set implies `exists == false`. When `error` is unset,
/// `exists` reflects a definitive HTTP status comparison against 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Platform label
    pub platform: String,

    /// Full URL that was probed
    pub url: String,

    /// Whether a profile appears to exist (HTTP 200 heuristic)
    pub exists: bool,

    /// Transport error description, if the probe never got a response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeResult {
    /// Build a result from a received HTTP status code.
    pub fn from_status<P: Into<String>, U: Into<String>>(
        platform: P,
        url: U,
        status: u16,
    ) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
            exists: status == 200,
            error: None,
        }
    }

    /// Build a result for a probe that failed before receiving a response.
    pub fn failed<P: Into<String>, U: Into<String>, E: Into<String>>(
        platform: P,
        url: U,
        error: E,
    ) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
            exists: false,
            error: Some(error.into()),
        }
    }

    /// Build the single sentinel result returned when the platform list
    /// cannot be loaded at all.
    pub fn source_failure<E: Into<String>>(error: E) -> Self {
        Self {
            platform: SOURCE_FAILURE_PLATFORM.to_string(),
            url: String::new(),
            exists: false,
            error: Some(error.into()),
        }
    }
}

/// Configuration options for scan operations.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Timeout for each individual probe request.
    /// Default: 10 seconds
    pub timeout: Duration,

    /// Maximum number of probes in flight at once.
    /// Default: 20, Range: 1-100
    pub concurrency: usize,

    /// Optional platform-list file. When None, the builtin table is used.
    pub platforms_file: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            concurrency: 20,
            platforms_file: None,
        }
    }
}

impl ScanConfig {
    /// Set the per-probe timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the probe concurrency cap.
    ///
    /// Automatically clamps to 1-100 to prevent resource exhaustion.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.clamp(1, 100);
        self
    }

    /// Use a platform-list file instead of the builtin table.
    pub fn with_platforms_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.platforms_file = Some(path.into());
        self
    }
}
