//! Scan coordinator: fan one username out across every platform
//! concurrently and aggregate the results.

use crate::error::ScanError;
use crate::platforms::PlatformSource;
use crate::probe::{probe, HttpTransport, Transport};
use crate::target::build_target;
use crate::types::{ProbeResult, ScanConfig};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Coordinates a concurrent scan of all platforms for one username.
///
/// # Example
///
/// ```rust,no_run
/// use username_check_lib::UsernameScanner;
///
/// #[tokio::main]
/// async fn main() {
///     let scanner = UsernameScanner::new();
///     for result in scanner.scan("octocat").await {
///         println!("{}: {}", result.platform, result.exists);
///     }
/// }
/// ```
pub struct UsernameScanner {
    /// Configuration settings for this scanner instance
    config: ScanConfig,
    /// Transport shared read-only by all concurrent probes
    transport: Arc<dyn Transport>,
}

impl UsernameScanner {
    /// Create a scanner with default configuration.
    ///
    /// Default settings:
    /// - Timeout: 10 seconds per probe
    /// - Concurrency: 20 probes in flight
    /// - Platform list: builtin table
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    /// Create a scanner with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use username_check_lib::{UsernameScanner, ScanConfig};
    /// use std::time::Duration;
    ///
    /// let config = ScanConfig::default()
    ///     .with_timeout(Duration::from_secs(5))
    ///     .with_concurrency(50);
    /// let scanner = UsernameScanner::with_config(config);
    /// ```
    pub fn with_config(config: ScanConfig) -> Self {
        let transport =
            HttpTransport::new(config.timeout).expect("Failed to create HTTP transport");

        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    /// Create a scanner with a caller-supplied transport.
    ///
    /// This is the seam for tests and for embedding the scanner behind a
    /// different HTTP stack.
    pub fn with_transport(transport: Arc<dyn Transport>, config: ScanConfig) -> Self {
        Self { config, transport }
    }

    /// Scan every platform for `username` and return one result per
    /// platform.
    ///
    /// The platform list comes from `config.platforms_file` when set,
    /// otherwise from the builtin table. If the list cannot be loaded, the
    /// returned vector contains exactly one sentinel entry and no probe is
    /// dispatched.
    ///
    /// Guarantees:
    /// - returns only after every dispatched probe has produced a result;
    /// - output length equals the platform count;
    /// - no ordering: results arrive in completion order. Sort by
    ///   `platform` if you need stable output.
    pub async fn scan(&self, username: &str) -> Vec<ProbeResult> {
        let source = match &self.config.platforms_file {
            Some(path) => PlatformSource::File(path.clone()),
            None => PlatformSource::Builtin,
        };

        self.scan_with_source(username, &source).await
    }

    /// Scan using an explicit platform source.
    pub async fn scan_with_source(
        &self,
        username: &str,
        source: &PlatformSource,
    ) -> Vec<ProbeResult> {
        let specs = match source.load() {
            Ok(specs) => specs,
            Err(e) => {
                warn!(error = %e, "platform list unavailable, aborting scan");
                return vec![ProbeResult::source_failure(e.to_string())];
            }
        };

        let start = Instant::now();
        let timeout = self.config.timeout;

        let probes = specs.iter().map(|spec| {
            let target = build_target(spec, username);
            let transport = Arc::clone(&self.transport);
            async move { probe(transport.as_ref(), target, timeout).await }
        });

        // One future per platform; buffer_unordered caps how many are in
        // flight and yields results in completion order. Collection is
        // result-count-driven, so every dispatched probe lands exactly once.
        let results: Vec<ProbeResult> = stream::iter(probes)
            .buffer_unordered(self.config.concurrency)
            .collect()
            .await;

        info!(
            username,
            platforms = results.len(),
            hits = results.iter().filter(|r| r.exists).count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan complete"
        );

        results
    }

    /// Resolve the platform list this scanner would scan, without probing.
    ///
    /// Useful for presentation layers that want to show the platform count
    /// up front.
    pub fn platform_specs(&self) -> Result<Vec<crate::PlatformSpec>, ScanError> {
        match &self.config.platforms_file {
            Some(path) => PlatformSource::File(path.clone()).load(),
            None => PlatformSource::Builtin.load(),
        }
    }

    /// Get the current configuration for this scanner.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}

impl Default for UsernameScanner {
    fn default() -> Self {
        Self::new()
    }
}
