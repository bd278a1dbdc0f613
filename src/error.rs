use thiserror::Error;

/// Fatal pipeline conditions. Each halts the run before any downstream output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The document contains no product containers at all.
    #[error("no product containers found in document")]
    NoDataFound,
    /// Containers existed, but none survived field extraction.
    #[error("no records survived extraction")]
    EmptyDataset,
}

/// Per-container extraction failure. Logged and skipped, never fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing or empty product name")]
    MissingName,
    #[error("missing price field")]
    MissingPrice,
    #[error("unparseable price {0:?}")]
    BadPrice(String),
}
