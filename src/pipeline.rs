use std::path::PathBuf;

use tracing::{info, warn};

use crate::aggregate::{self, Summary};
use crate::chart;
use crate::error::PipelineError;
use crate::extract;

/// Per-run render controls. `chart_path: None` disables the render stage.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub chart_path: Option<PathBuf>,
}

/// The whole pipeline: extract → aggregate → print summary → render.
///
/// Fatal conditions (`NoDataFound`, `EmptyDataset`) halt before any
/// downstream output. A render failure is logged and does not fail the run;
/// the summary has already been printed by then.
pub fn run(markup: &str, opts: &RunOptions) -> Result<Summary, PipelineError> {
    let records = extract::extract_records(markup)?;
    info!(extracted = records.len(), "extraction complete");

    let summary = aggregate::summarize(&records)?;
    println!("Products: {}", summary.count);
    println!("Average price: {}원", summary.mean_display());

    if let Some(path) = &opts.chart_path {
        let prices: Vec<u64> = records.iter().map(|r| r.price).collect();
        match chart::render_histogram(&prices, path) {
            Ok(()) => println!("Chart written to {}", path.display()),
            Err(err) => warn!(%err, "chart render failed; summary above is unaffected"),
        }
    }

    Ok(summary)
}

// ── Tests ──
