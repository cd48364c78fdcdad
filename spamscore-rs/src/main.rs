//! spamscore: analyze SpamAssassin score reports
//!
//! # Usage
//!
//! ```bash
//! # Analyze a report from a file
//! spamscore analyze report.txt
//!
//! # Analyze from stdin as JSON, hiding administrator notices
//! pbpaste | spamscore analyze --json --hide-notices
//!
//! # Print the built-in sample report
//! spamscore sample
//!
//! # Search the default rule reference
//! spamscore rules --search dkim --category Auth
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use spamscore_rs::catalog::{self, CategoryFilter, DEFAULT_RULES};
use spamscore_rs::config::{Config, OutputFormat};
use spamscore_rs::report::{self, SAMPLE_REPORT};
use spamscore_rs::view::{self, ReportView};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spamscore")]
#[command(about = "Analyze SpamAssassin score reports", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a report and print the verdict
    Analyze {
        /// Report file, reads stdin when omitted
        file: Option<PathBuf>,
        /// Hide administrator notices
        #[arg(long)]
        hide_notices: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print a sample report
    Sample,
    /// Search the default rule reference
    Rules {
        /// Case-insensitive text to find in rule names and descriptions
        #[arg(short, long, default_value = "")]
        search: String,
        /// Category label, or "All"
        #[arg(long, default_value = "All")]
        category: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("spamscore v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Analyze {
            file,
            hide_notices,
            json,
        } => {
            if hide_notices {
                config.display.show_notices = false;
            }
            if json {
                config.display.format = OutputFormat::Json;
            }

            let input = read_report(file.as_deref())?;
            if input.trim().is_empty() {
                eprintln!("Nothing to analyze: report is empty");
                return Ok(());
            }

            let result = report::analyze_with(report::parse(&input), &config.thresholds());
            info!(verdict = %result.verdict, total_score = result.total_score, "Report analyzed");

            let view = ReportView::new(&result, config.view_options());
            match config.display.format {
                OutputFormat::Text => print!("{}", view::render_text(&view)),
                OutputFormat::Json => println!("{}", view::render_json(&view)?),
            }
        }
        Commands::Sample => {
            println!("{}", SAMPLE_REPORT);
        }
        Commands::Rules { search, category } => {
            let filter: CategoryFilter = category.parse()?;
            let entries = catalog::search(&search, filter);
            print!("{}", view::render_catalog(&entries, DEFAULT_RULES.len()));
        }
    }

    Ok(())
}

fn read_report(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read report {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read report from stdin")?;
            Ok(input)
        }
    }
}
