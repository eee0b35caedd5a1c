//! Probe unit: one HTTP GET per platform, reduced to an existence verdict.
//!
//! The HTTP transport is kept behind the [`Transport`] trait so tests can
//! substitute a deterministic implementation and so the reduction policy
//! stays independent of reqwest.

use crate::error::ScanError;
use crate::types::{ProbeResult, ProbeTarget};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Opaque fetch capability: GET a URL within a timeout and report the HTTP
/// status code, or fail with a transport error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<u16, ScanError>;
}

/// reqwest-backed [`Transport`] used for real scans.
///
/// The response body is never read; dropping the response releases the
/// connection on every exit path.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport whose underlying client enforces `timeout` as a
    /// hard upper bound (with a small buffer over the per-probe timeout).
    pub fn new(timeout: Duration) -> Result<Self, ScanError> {
        let client = reqwest::Client::builder()
            .timeout(timeout + Duration::from_secs(2))
            .build()
            .map_err(|e| {
                ScanError::network_with_source("Failed to create HTTP client", e.to_string())
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<u16, ScanError> {
        let response = tokio::time::timeout(timeout, self.client.get(url).send())
            .await
            .map_err(|_| ScanError::timeout("profile probe", timeout))??;

        Ok(response.status().as_u16())
    }
}

/// Probe one target and reduce the outcome to a [`ProbeResult`].
///
/// Reduction policy:
/// - transport failure (connect, DNS, TLS, timeout) → `exists=false` with
///   the error description;
/// - any received response → `exists = (status == 200)`, no error.
///
/// The 200-only check is a deliberately coarse heuristic: redirects, 403s
/// from bot detection, and soft-404 pages that return 200 all produce
/// verdicts that may not reflect true profile existence. Preserved as-is
/// for compatibility. No retries; a failed attempt is final for this scan.
pub async fn probe(
    transport: &dyn Transport,
    target: ProbeTarget,
    timeout: Duration,
) -> ProbeResult {
    match transport.fetch(&target.url, timeout).await {
        Ok(status) => {
            debug!(platform = %target.platform, url = %target.url, status, "probe completed");
            ProbeResult::from_status(target.platform, target.url, status)
        }
        Err(e) => {
            debug!(platform = %target.platform, url = %target.url, error = %e, "probe failed");
            ProbeResult::failed(target.platform, target.url, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTransport(Result<u16, ScanError>);

    #[async_trait]
    impl Transport for FixedTransport {
        async fn fetch(&self, _url: &str, _timeout: Duration) -> Result<u16, ScanError> {
            self.0.clone()
        }
    }

    fn target() -> ProbeTarget {
        ProbeTarget {
            platform: "GitHub".to_string(),
            url: "https://github.com/octocat".to_string(),
        }
    }

    #[tokio::test]
    async fn status_200_is_a_hit() {
        let transport = FixedTransport(Ok(200));
        let result = probe(&transport, target(), Duration::from_secs(10)).await;

        assert!(result.exists);
        assert!(result.error.is_none());
        assert_eq!(result.platform, "GitHub");
        assert_eq!(result.url, "https://github.com/octocat");
    }

    #[tokio::test]
    async fn non_200_is_a_miss_without_error() {
        // Documents the heuristic: a 404 is "not found", but so is a 403
        // from a bot wall. Neither is a probe error.
        for status in [301, 403, 404, 500] {
            let transport = FixedTransport(Ok(status));
            let result = probe(&transport, target(), Duration::from_secs(10)).await;
            assert!(!result.exists);
            assert!(result.error.is_none());
        }
    }

    #[tokio::test]
    async fn transport_failure_sets_error_and_clears_exists() {
        let transport = FixedTransport(Err(ScanError::timeout(
            "profile probe",
            Duration::from_secs(10),
        )));
        let result = probe(&transport, target(), Duration::from_secs(10)).await;

        assert!(!result.exists);
        let error = result.error.unwrap();
        assert!(error.contains("Timeout"), "unexpected error: {}", error);
    }
}
