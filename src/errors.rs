use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error while writing statistics: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize statistics to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
