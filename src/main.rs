//! Command-line entry point for building co-authorship networks.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use authnet::{ScopusConfig, generate};

/// Build a weighted co-authorship network from a publication export.
///
/// Reads a CSV export with author, affiliation and title columns and
/// writes a `{nodes, links}` JSON document for graph visualization tools.
#[derive(Parser)]
#[command(name = "authnet", version)]
#[command(about = "Build co-authorship networks from publication exports")]
struct Cli {
    /// Input CSV export
    #[arg(env = "AUTHNET_INPUT", default_value = "data_scopus.csv")]
    input: PathBuf,

    /// Output JSON document
    #[arg(
        short,
        long,
        env = "AUTHNET_OUTPUT",
        default_value = "author_network.json"
    )]
    output: PathBuf,

    /// Field delimiter of the input export
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Count repeated author names within one row as self-links
    #[arg(long)]
    self_links: bool,

    /// Enable verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(format!("delimiter must be a single byte, got {:?}", s)),
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let mut config = ScopusConfig::new();
    config.set_delimiter(cli.delimiter);

    let summary = generate(&cli.input, &cli.output, &config, cli.self_links)
        .with_context(|| format!("could not build network from {}", cli.input.display()))?;

    if !cli.quiet {
        println!(
            "Wrote {} ({} authors, {} links from {} publications)",
            cli.output.display(),
            summary.nodes,
            summary.links,
            summary.rows
        );
    }

    Ok(())
}
