//! # Username Check Library
//!
//! Concurrently probe social platforms to infer whether a profile with a
//! given username exists, using HTTP response status as the sole signal.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use username_check_lib::UsernameScanner;
//!
//! #[tokio::main]
//! async fn main() {
//!     let scanner = UsernameScanner::new();
//!     for result in scanner.scan("octocat").await {
//!         println!("{}: exists={}", result.platform, result.exists);
//!     }
//! }
//! ```
//!
//! ## How it works
//!
//! - **Platform source**: a builtin table of well-known platforms, or a
//!   line-oriented `label: url-template` file.
//! - **Probe**: one GET per platform with a fixed timeout; a profile is
//!   considered to exist exactly when the response status is 200. This is a
//!   deliberately coarse heuristic kept for compatibility.
//! - **Coordinator**: bounded concurrent fan-out; per-probe failures are
//!   isolated, and the scan always returns one result per platform.

// Re-export main public API types and functions
pub use config::{load_env_config, parse_timeout_string, ConfigManager, DefaultsConfig, EnvConfig, FileConfig};
pub use error::ScanError;
pub use platforms::{builtin_platforms, load_platforms_from_file, PlatformSource};
pub use probe::{probe, HttpTransport, Transport};
pub use scanner::UsernameScanner;
pub use target::{build_target, derive_platform_label};
pub use types::{
    PlatformSpec, ProbeResult, ProbeTarget, ScanConfig, SOURCE_FAILURE_PLATFORM,
};

// Internal modules
mod config;
mod error;
mod platforms;
mod probe;
mod scanner;
mod target;
mod types;

/// Type alias for convenience
pub type Result<T> = std::result::Result<T, ScanError>;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
