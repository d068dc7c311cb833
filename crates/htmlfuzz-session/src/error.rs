//! Error types for sessions, corpus generation and replay
//!
//! Every I/O failure carries the path it happened on.

use crate::state::SessionState;
use htmlfuzz_grammar::ExpansionError;
use std::path::PathBuf;

/// Fatal startup or argument problem
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Session output directory is already present
    #[error("output directory {} already exists", .0.display())]
    DirectoryExists(PathBuf),

    /// Input directory does not exist
    #[error("directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    /// Retention window of zero would delete every artifact
    #[error("retention window must be at least 1")]
    ZeroRetention,

    /// Seed text is not `secs[.fraction]`
    #[error("invalid session seed '{0}': expected digits with an optional fractional part")]
    InvalidSeed(String),

    /// Sequence numbers start at 1
    #[error("start position must be at least 1")]
    InvalidStartPosition,
}

/// Session lifecycle and generation failures
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Configuration rejected at startup
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Single generation event failed
    #[error("generation failed: {0}")]
    Expansion(#[from] ExpansionError),

    /// Artifact or directory I/O failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Lifecycle transition not in the transition table
    #[error("illegal session transition: {from} -> {to}")]
    IllegalTransition {
        /// Current state
        from: SessionState,
        /// Requested state
        to: SessionState,
    },

    /// Generation requested outside the running state
    #[error("session is not running (state: {0})")]
    NotRunning(SessionState),
}

impl SessionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether only the current generation event is lost
    ///
    /// The delivery server answers such failures and keeps serving.
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Expansion(_) | Self::Io { .. })
    }
}

/// Replay harness failures
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// Configuration rejected at startup
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Corpus enumeration failed
    #[error("failed to enumerate corpus: {0}")]
    Walk(#[from] walkdir::Error),

    /// Corpus file or log I/O failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Existing log does not match the start of the corpus order
    #[error("log line {line} is '{found}' but corpus file {line} is '{expected}'")]
    LogMismatch {
        /// 1-based line number in the log
        line: usize,
        /// Path expected at that position
        expected: String,
        /// Path found in the log
        found: String,
    },
}

impl ReplayError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_messages_name_the_path() {
        let err = ConfigError::DirectoryExists(PathBuf::from("out/1700000000.5"));
        assert_eq!(err.to_string(), "output directory out/1700000000.5 already exists");
    }

    #[test]
    fn expansion_failures_are_recoverable() {
        let err = SessionError::from(ExpansionError::DepthExceeded { limit: 4 });
        assert!(err.is_recoverable());
        assert!(!SessionError::NotRunning(SessionState::Stopped).is_recoverable());
        assert!(!SessionError::from(ConfigError::ZeroRetention).is_recoverable());
    }

    #[test]
    fn mismatch_message_lists_both_paths() {
        let err = ReplayError::LogMismatch {
            line: 2,
            expected: "c/b.html".into(),
            found: "c/x.html".into(),
        };
        assert!(err.to_string().contains("'c/x.html'"));
        assert!(err.to_string().contains("'c/b.html'"));
    }
}
