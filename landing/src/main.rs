//! # spile-landing
//!
//! Renders the Spile landing page to a static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # HTML to stdout
//! spile-landing > index.html
//!
//! # Pin the calendar month, write to a file
//! spile-landing --month 2024-09 --out dist/index.html
//!
//! # Page content as JSON
//! spile-landing --data
//! ```
//!
//! Logs go to stderr; stdout only ever carries the page (or JSON).

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use spile_landing::LandingError;
use spile_landing::render_landing;
use spile_landing::types::{CalendarMonth, PageData, PageOptions};

#[derive(Parser, Debug)]
#[command(name = "spile-landing")]
#[command(about = "Render the Spile landing page to static HTML")]
#[command(version)]
struct Args {
    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Month shown in the booking calendar (YYYY-MM, default: current month)
    #[arg(long, value_name = "YYYY-MM")]
    month: Option<String>,

    /// Print the page content (founders, sample code) as JSON instead of HTML
    #[arg(long)]
    data: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn write_output(out: Option<&Path>, contents: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| LandingError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(path, contents).map_err(|source| LandingError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Wrote {} bytes to {}", contents.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logging goes to stderr, stdout is reserved for the rendered output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!(?args, "parsed arguments");

    let output = if args.data {
        serde_json::to_string_pretty(&PageData::current())
            .context("failed to serialize page data")?
    } else {
        let calendar_month = match args.month.as_deref() {
            Some(month) => month.parse::<CalendarMonth>()?,
            None => CalendarMonth::current(),
        };
        info!(
            "Rendering spile-landing v{} (calendar {})",
            env!("CARGO_PKG_VERSION"),
            calendar_month
        );
        render_landing(&PageOptions { calendar_month })
    };

    write_output(args.out.as_deref(), &output)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[spile-landing] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
