//! Observation loading errors

use std::path::PathBuf;

/// Error reading observations from JSON.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a valid array of observations.
    #[error("Invalid observation data: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    /// Creates a new I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
