//! Terminal output for the username-check CLI.
//!
//! Colored result lines, headers, and summaries. Uses only the `console`
//! crate. JSON output lives in main.rs; this module is text modes only.

use console::{pad_str, style, Alignment};
use std::time::Duration;
use username_check_lib::ProbeResult;

/// Print a styled header at the start of a scan.
pub fn print_header(username: &str, platform_count: usize, concurrency: usize) {
    println!(
        "{} {} {}",
        style("username-check").bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim(),
        style(format!(
            "— Scanning {} platform{} for '{}'",
            platform_count,
            if platform_count == 1 { "" } else { "s" },
            username
        ))
        .dim(),
    );
    println!("{}", style(format!("Concurrency: {}", concurrency)).dim());
    println!();
}

/// Format and print a single probe result with colors and alignment.
pub fn print_result(result: &ProbeResult, pretty: bool) {
    let platform_width = 16;
    let padded = pad_str(&result.platform, platform_width, Alignment::Left, Some(".."));
    let indent = if pretty { "  " } else { "" };

    if let Some(error) = &result.error {
        println!(
            "{}{}  {}  {}",
            indent,
            style(&padded).white(),
            style("ERROR").yellow(),
            style(error).dim(),
        );
    } else if result.exists {
        println!(
            "{}{}  {}  {}",
            indent,
            style(&padded).white(),
            style("FOUND").green().bold(),
            style(&result.url).dim(),
        );
    } else {
        println!(
            "{}{}  {}",
            indent,
            style(&padded).dim(),
            style("not found").dim(),
        );
    }
}

/// Print the end-of-scan summary line.
pub fn print_summary(results: &[ProbeResult], duration: Duration) {
    let found = results.iter().filter(|r| r.exists).count();
    let errors = results.iter().filter(|r| r.error.is_some()).count();
    let not_found = results.len() - found - errors;

    println!(
        "{} {} found, {} not found, {} error{} in {:.2}s",
        style("Summary:").bold(),
        style(found).green().bold(),
        not_found,
        errors,
        if errors == 1 { "" } else { "s" },
        duration.as_secs_f64(),
    );
}
