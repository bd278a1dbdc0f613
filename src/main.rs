mod aggregate;
mod chart;
mod error;
mod extract;
mod pipeline;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Seven-product sample listing, embedded so the tool runs with no arguments.
const SAMPLE_LISTING: &str = include_str!("../tests/fixtures/sample_listing.html");

#[derive(Parser)]
#[command(
    name = "ssg_trend",
    about = "Extract product prices from an HTML listing and chart their distribution"
)]
struct Cli {
    /// HTML file to analyze (default: the embedded sample listing)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Chart output path
    #[arg(short, long, default_value = "price_distribution.svg")]
    out: PathBuf,
    /// Skip chart rendering
    #[arg(long)]
    no_chart: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let markup = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => SAMPLE_LISTING.to_string(),
    };

    let opts = pipeline::RunOptions {
        chart_path: (!cli.no_chart).then(|| cli.out.clone()),
    };
    pipeline::run(&markup, &opts)?;
    Ok(())
}
