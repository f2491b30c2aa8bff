use thiserror::Error;

/// Errors surfaced while exporting or (de)serializing a network description.
///
/// Malformed architectures (out-of-range offsets, odd anchor counts, zero
/// classes) are never errors: they render as-is. Only the sink or the JSON
/// layer can fail.
#[derive(Debug, Error)]
pub enum CfgError {
    /// The output sink rejected a write, or a file could not be opened.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A JSON network description could not be read or written.
    #[error("invalid network description: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CfgError>;
