//! `sbom-notice` — build a third-party NOTICE file from a CycloneDX SBOM.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load manual license overrides ([`overrides::load_overrides`]); problems here only warn.
//! 3. Read SBOM components and their licenses ([`sbom`], [`license`]).
//! 4. Keep components needing attribution, sorted by name ([`attribution`]).
//! 5. Render the requested output ([`report`]) to stdout or `--output`.
//! 6. Exit `0`, or `1` on a usage error or an unreadable SBOM. A closed stdout is not an error.

mod attribution;
mod cli;
mod license;
mod models;
mod overrides;
mod report;
mod sbom;

use std::io::{IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use attribution::collect_attributions;
use cli::{Cli, OutputFormat};
use overrides::load_overrides;
use sbom::load_components;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit with 1, not clap's default 2
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        // The reader went away (e.g. `| head`); nothing left to report
        if is_broken_pipe(&e) {
            return;
        }
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let components = load_components(&cli.sbom)?;
    let overrides = load_overrides(&cli.overrides);
    if overrides.is_empty() {
        tracing::debug!("No manual license overrides in effect");
    }

    let records = collect_attributions(&components, &overrides);
    tracing::debug!(
        "{} of {} components require attribution",
        records.len(),
        components.len()
    );

    let rendered = match cli.format {
        OutputFormat::Notice => report::notice::render(&records),
        OutputFormat::Json => serde_json::to_string_pretty(&records)?,
        OutputFormat::Table => report::terminal::render(&records),
    };

    match &cli.output {
        Some(path) => std::fs::write(path, format!("{}\n", rendered))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => writeln!(std::io::stdout().lock(), "{rendered}")
            .context("failed to write NOTICE to stdout")?,
    }

    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::BrokenPipe)
    })
}
