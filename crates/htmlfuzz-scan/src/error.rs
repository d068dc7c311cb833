//! Error types for corpus scanning
//!
//! Malformed markup is never an error; only missing input and I/O are.

use std::path::PathBuf;

/// Corpus scan failure
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Corpus directory does not exist
    #[error("directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    /// Corpus enumeration failed
    #[error("failed to enumerate corpus: {0}")]
    Walk(#[from] walkdir::Error),

    /// Corpus file could not be read
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// HTML grammar could not be loaded into the parser
    #[error("parser initialisation failed: {0}")]
    ParserInit(String),

    /// Report serialisation failed
    #[error("report serialisation failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
