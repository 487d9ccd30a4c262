//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `link_trust` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading HTML from a file or fetching it over HTTP
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use link_trust::initialization::init_logger_with;
use link_trust::{
    analyze_url, fetch_page, generate_report, normalize_url, scan_links, scan_url_content,
    LogLevel, ScanConfig,
};

#[derive(Debug, Parser)]
#[command(
    name = "link_trust",
    about = "Scores URLs for scam risk and scans HTML pages for suspicious links."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Emit machine-readable JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a single URL and print its trust score
    Analyze {
        /// URL to analyze; a scheme is added when missing
        url: String,
    },
    /// Scan a local HTML file for suspicious links
    Scan {
        /// HTML file to scan
        file: PathBuf,

        /// Base URL for resolving relative links
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Fetch a page over HTTP and scan its links
    Fetch {
        /// Page URL to fetch and scan
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into()).context("Failed to initialize logger")?;

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("link_trust error: {e:#}");
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ScanConfig::default();

    match cli.command {
        Command::Analyze { url } => {
            let normalized = normalize_url(&url);
            let analysis = analyze_url(Some(&normalized), &config);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("URL: {}", analysis.url);
                println!("Domain: {}", analysis.domain);
                println!("Trust Score: {}/100", analysis.trust_score);
                println!("Status: {}", analysis.status);
                println!("Details:");
                for detail in &analysis.details {
                    println!("  - {detail}");
                }
            }
        }
        Command::Scan { file, base_url } => {
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let result = scan_links(&html, base_url.as_deref(), &config);
            print_scan_result(&result, cli.json)?;
        }
        Command::Fetch { url } => {
            let html = fetch_page(&url)
                .await
                .with_context(|| format!("Failed to fetch {url}"))?;
            let result = scan_url_content(&html, &url, &config);
            print_scan_result(&result, cli.json)?;
        }
    }

    Ok(())
}

fn print_scan_result(result: &link_trust::ScanResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", generate_report(result));
    }
    Ok(())
}
