use crate::error::PipelineError;
use crate::extract::Record;

/// Flat numeric summary of one extraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_price: f64,
}

impl Summary {
    /// Mean rounded to the nearest won. Display only; `mean_price` keeps
    /// full precision.
    pub fn mean_display(&self) -> u64 {
        self.mean_price.round() as u64
    }
}

/// Compute count + mean price. An empty record set is its own fatal
/// condition, distinct from a document with no containers: here the
/// containers existed but nothing survived extraction.
pub fn summarize(records: &[Record]) -> Result<Summary, PipelineError> {
    if records.is_empty() {
        return Err(PipelineError::EmptyDataset);
    }
    let total: u64 = records.iter().map(|r| r.price).sum();
    Ok(Summary {
        count: records.len(),
        mean_price: total as f64 / records.len() as f64,
    })
}

// ── Tests ──
