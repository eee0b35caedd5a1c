//! Username Check CLI Application
//!
//! A command-line interface for scanning social platforms for a username.
//! All probing logic lives in username-check-lib; this crate owns argument
//! parsing, configuration precedence, and output.

mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use std::process;
use std::time::Duration;
use username_check_lib::{
    load_env_config, parse_timeout_string, ConfigManager, FileConfig, ScanConfig, UsernameScanner,
};

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for username-check
#[derive(Parser, Debug)]
#[command(name = "username-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan social platforms for a username")]
#[command(
    long_about = "Concurrently probe social platforms to see whether a username is registered.\n\nExistence is inferred from HTTP status alone: a 200 response counts as a hit.\nSupports a custom platform list file, JSON output, and config files."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Usernames to scan for
    #[arg(value_name = "USERNAMES", help_heading = "Scan Selection")]
    pub usernames: Vec<String>,

    /// Platform list file (one 'Label: https://host/%s' per line)
    #[arg(
        short = 'f',
        long = "platforms-file",
        value_name = "FILE",
        help_heading = "Scan Selection"
    )]
    pub platforms_file: Option<String>,

    /// Output results as JSON
    #[arg(short = 'j', long = "json", help_heading = "Output Format")]
    pub json: bool,

    /// Structured output with headers and summaries
    #[arg(short = 'p', long = "pretty", help_heading = "Output Format")]
    pub pretty: bool,

    /// Sort results by platform name (engine output is completion-ordered)
    #[arg(long = "sort", help_heading = "Output Format")]
    pub sort: bool,

    /// Per-probe timeout (e.g. "10s", "2m")
    #[arg(
        short = 't',
        long = "timeout",
        value_name = "DURATION",
        help_heading = "Performance"
    )]
    pub timeout: Option<String>,

    /// Max concurrent probes (1-100)
    #[arg(
        short = 'c',
        long = "concurrency",
        value_name = "N",
        help_heading = "Performance"
    )]
    pub concurrency: Option<usize>,

    /// Use specific config file instead of automatic discovery
    #[arg(long = "config", value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", help_heading = "Configuration")]
    pub verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = validate_args(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    init_tracing(args.verbose);

    if let Err(e) = run_scan(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Initialize the tracing subscriber. RUST_LOG wins when set; otherwise
/// --verbose selects debug for our crates.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("username_check=debug,username_check_lib=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Validate command line arguments
fn validate_args(args: &Args) -> Result<(), String> {
    if args.usernames.is_empty() {
        return Err("You must specify at least one username".to_string());
    }

    if args.json && args.pretty {
        return Err("Cannot specify both --json and --pretty".to_string());
    }

    if let Some(concurrency) = args.concurrency {
        if !(1..=100).contains(&concurrency) {
            return Err("Concurrency must be between 1 and 100".to_string());
        }
    }

    if let Some(timeout) = &args.timeout {
        parse_timeout_string(timeout).map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// Main scanning logic
async fn run_scan(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(&args)?;
    let scanner = UsernameScanner::with_config(config.clone());

    let platform_count = scanner.platform_specs().map(|s| s.len()).ok();

    let mut all_results = Vec::with_capacity(args.usernames.len());

    for username in &args.usernames {
        if args.pretty {
            ui::print_header(username, platform_count.unwrap_or(0), config.concurrency);
        }

        let start = std::time::Instant::now();
        let mut results = scanner.scan(username).await;
        let duration = start.elapsed();

        if args.sort {
            results.sort_by(|a, b| a.platform.cmp(&b.platform));
        }

        if !args.json {
            for result in &results {
                ui::print_result(result, args.pretty);
            }
            if args.pretty {
                println!();
                ui::print_summary(&results, duration);
                println!();
            }
        }

        all_results.push((username.clone(), results));
    }

    if args.json {
        print_json(&all_results)?;
    }

    Ok(())
}

/// Print results as JSON: a bare array for a single username (the classic
/// endpoint payload), an object keyed by username for several.
fn print_json(
    all_results: &[(String, Vec<username_check_lib::ProbeResult>)],
) -> Result<(), Box<dyn std::error::Error>> {
    if let [(_, results)] = all_results {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        let map: std::collections::BTreeMap<_, _> = all_results
            .iter()
            .map(|(username, results)| (username.as_str(), results))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    }

    Ok(())
}

/// Build ScanConfig from CLI arguments with config file integration.
///
/// Precedence order (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables (UC_*)
/// 3. Explicit config file (--config or UC_CONFIG)
/// 4. Discovered config file (./.username-check.toml, ~/.username-check.toml)
/// 5. Built-in defaults
fn build_config(args: &Args) -> Result<ScanConfig, Box<dyn std::error::Error>> {
    let mut config = ScanConfig::default();

    let config_manager = ConfigManager::new(args.verbose);

    // Step 1: Load a config file (explicit path wins over discovery)
    let file_config = if let Some(explicit_path) = &args.config {
        config_manager
            .load_file(explicit_path)
            .map_err(|e| format!("Failed to load config file '{}': {}", explicit_path, e))?
    } else if let Ok(env_path) = std::env::var("UC_CONFIG") {
        config_manager
            .load_file(&env_path)
            .map_err(|e| format!("Failed to load config file '{}': {}", env_path, e))?
    } else {
        config_manager.discover_and_load().unwrap_or_default()
    };

    config = merge_file_config(config, file_config)?;

    // Step 2: Apply environment variables (UC_*)
    config = apply_env_config(config)?;

    // Step 3: Apply CLI arguments (highest precedence)
    config = apply_cli_args(config, args)?;

    tracing::debug!(
        timeout_secs = config.timeout.as_secs(),
        concurrency = config.concurrency,
        platforms_file = ?config.platforms_file,
        "resolved scan configuration"
    );

    Ok(config)
}

/// Merge FileConfig defaults into ScanConfig.
fn merge_file_config(
    mut config: ScanConfig,
    file_config: FileConfig,
) -> Result<ScanConfig, Box<dyn std::error::Error>> {
    if let Some(defaults) = file_config.defaults {
        if let Some(timeout_str) = defaults.timeout {
            let secs = parse_timeout_string(&timeout_str)?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(concurrency) = defaults.concurrency {
            config = config.with_concurrency(concurrency);
        }
        if let Some(platforms_file) = defaults.platforms_file {
            config = config.with_platforms_file(platforms_file);
        }
    }

    Ok(config)
}

/// Apply UC_* environment variables to the config.
fn apply_env_config(mut config: ScanConfig) -> Result<ScanConfig, Box<dyn std::error::Error>> {
    let env_config = load_env_config();

    if let Some(timeout_str) = env_config.timeout {
        let secs = parse_timeout_string(&timeout_str)?;
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(concurrency) = env_config.concurrency {
        config = config.with_concurrency(concurrency);
    }
    if let Some(platforms_file) = env_config.platforms_file {
        config = config.with_platforms_file(platforms_file);
    }

    Ok(config)
}

/// Apply CLI arguments to the config (highest precedence).
fn apply_cli_args(
    mut config: ScanConfig,
    args: &Args,
) -> Result<ScanConfig, Box<dyn std::error::Error>> {
    if let Some(timeout_str) = &args.timeout {
        let secs = parse_timeout_string(timeout_str)?;
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(concurrency) = args.concurrency {
        config = config.with_concurrency(concurrency);
    }
    if let Some(platforms_file) = &args.platforms_file {
        config = config.with_platforms_file(platforms_file);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_args() -> Args {
        Args {
            usernames: vec!["alice".to_string()],
            platforms_file: None,
            json: false,
            pretty: false,
            sort: false,
            timeout: None,
            concurrency: None,
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_args_requires_username() {
        let mut args = create_test_args();
        args.usernames.clear();

        let result = validate_args(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least one username"));
    }

    #[test]
    fn test_validate_args_rejects_json_with_pretty() {
        let mut args = create_test_args();
        args.json = true;
        args.pretty = true;

        let result = validate_args(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("--json and --pretty"));
    }

    #[test]
    fn test_validate_args_concurrency_bounds() {
        let mut args = create_test_args();
        args.concurrency = Some(0);
        assert!(validate_args(&args).is_err());

        args.concurrency = Some(101);
        assert!(validate_args(&args).is_err());

        args.concurrency = Some(50);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_rejects_bad_timeout() {
        let mut args = create_test_args();
        args.timeout = Some("soon".to_string());
        assert!(validate_args(&args).is_err());

        args.timeout = Some("15s".to_string());
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_cli_args_override_config() {
        let mut args = create_test_args();
        args.timeout = Some("3s".to_string());
        args.concurrency = Some(7);
        args.platforms_file = Some("custom.txt".to_string());

        let config = apply_cli_args(ScanConfig::default(), &args).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.concurrency, 7);
        assert_eq!(
            config.platforms_file.as_deref(),
            Some(std::path::Path::new("custom.txt"))
        );
    }

    #[test]
    fn test_cli_args_absent_preserve_config() {
        let args = create_test_args();
        let base = ScanConfig::default()
            .with_timeout(Duration::from_secs(42))
            .with_concurrency(9);

        let config = apply_cli_args(base, &args).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(42));
        assert_eq!(config.concurrency, 9);
        assert!(config.platforms_file.is_none());
    }

    #[test]
    fn test_merge_file_config_defaults() {
        let file_config = FileConfig {
            defaults: Some(username_check_lib::DefaultsConfig {
                timeout: Some("5s".to_string()),
                concurrency: Some(33),
                platforms_file: Some("socials.txt".to_string()),
            }),
        };

        let config = merge_file_config(ScanConfig::default(), file_config).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.concurrency, 33);
        assert_eq!(
            config.platforms_file.as_deref(),
            Some(std::path::Path::new("socials.txt"))
        );
    }

    #[test]
    fn test_merge_empty_file_config_keeps_defaults() {
        let config = merge_file_config(ScanConfig::default(), FileConfig::default()).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.concurrency, 20);
    }
}
