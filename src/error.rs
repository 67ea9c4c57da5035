use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("'{0}' is not a number")]
    InvalidScore(String),

    #[error("Invalid choice '{0}'. Please select 1-6.")]
    InvalidChoice(String),

    #[error("Failed to export CSV to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Error reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
