//! Sequential corpus replay
//!
//! The corpus is enumerated once at startup into a fixed order. Each
//! delivery serves the next file with an auto-refresh prefix and records
//! its path in the session log; once the list is exhausted every further
//! delivery gets the completion page.

use crate::error::{ConfigError, ReplayError};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Control directives prepended to every served corpus file
pub const REFRESH_PREFIX: &str =
    r#"<meta http-equiv="refresh" content="1"> <meta http-equiv="cache-control" content="no-cache">"#;

/// Page served once the corpus is exhausted
pub const COMPLETED_PAGE: &str =
    "<html><head><title>All done!</title></head><body><p>Finished!</p></body></html>";

/// Session log file name for a listener port
#[must_use]
pub fn log_file_name(port: u16) -> String {
    format!("htmlharness-log-{port}.txt")
}

/// Replay options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Continue after the paths already recorded in the log
    pub resume: bool,
}

impl ReplayOptions {
    /// Set resume-from-log
    #[must_use]
    pub fn with_resume(mut self, resume: bool) -> Self {
        self.resume = resume;
        self
    }
}

/// Result of one delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayPage {
    /// Next corpus file, prefix included
    Document {
        /// Served file
        path: PathBuf,
        /// Response body
        body: Vec<u8>,
    },
    /// Corpus exhausted
    Completed,
}

impl ReplayPage {
    /// Response body
    #[must_use]
    pub fn into_body(self) -> Vec<u8> {
        match self {
            Self::Document { body, .. } => body,
            Self::Completed => COMPLETED_PAGE.as_bytes().to_vec(),
        }
    }

    /// Whether this is the completion page
    #[inline]
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Forward-only replay cursor over a corpus directory
#[derive(Debug)]
pub struct ReplayHarness {
    files: Vec<PathBuf>,
    cursor: usize,
    log_path: PathBuf,
    log: File,
}

impl ReplayHarness {
    /// Enumerate `corpus_dir` and open the session log
    ///
    /// Without `resume` the log is truncated. With `resume` its lines must
    /// be a prefix of the corpus order and replay continues after them.
    ///
    /// # Errors
    /// - [`ConfigError::MissingDirectory`] if `corpus_dir` is not a directory
    /// - [`ReplayError::Walk`] / [`ReplayError::Io`] on enumeration or log I/O
    /// - [`ReplayError::LogMismatch`] when resuming from an unrelated log
    pub fn open(
        corpus_dir: &Path,
        log_path: impl Into<PathBuf>,
        options: ReplayOptions,
    ) -> Result<Self, ReplayError> {
        if !corpus_dir.is_dir() {
            return Err(ConfigError::MissingDirectory(corpus_dir.to_path_buf()).into());
        }
        let files = enumerate_corpus(corpus_dir)?;
        let log_path = log_path.into();

        let cursor = if options.resume {
            logged_prefix(&log_path, &files)?
        } else {
            0
        };

        let log = OpenOptions::new()
            .create(true)
            .append(true)
            .truncate(false)
            .open(&log_path)
            .map_err(|e| ReplayError::io(&log_path, e))?;
        if !options.resume {
            log.set_len(0).map_err(|e| ReplayError::io(&log_path, e))?;
        }

        tracing::info!(
            corpus = %corpus_dir.display(),
            files = files.len(),
            resume_at = cursor,
            log = %log_path.display(),
            "Replay harness ready"
        );

        Ok(Self {
            files,
            cursor,
            log_path,
            log,
        })
    }

    /// Serve the next page
    ///
    /// # Errors
    /// [`ReplayError::Io`] if the corpus file cannot be read or the log
    /// cannot be appended; the cursor does not advance in that case
    pub fn next_page(&mut self) -> Result<ReplayPage, ReplayError> {
        let Some(path) = self.files.get(self.cursor) else {
            tracing::debug!("Corpus exhausted");
            return Ok(ReplayPage::Completed);
        };

        let contents = fs::read(path).map_err(|e| ReplayError::io(path, e))?;
        let mut body = Vec::with_capacity(REFRESH_PREFIX.len() + contents.len());
        body.extend_from_slice(REFRESH_PREFIX.as_bytes());
        body.extend_from_slice(&contents);

        writeln!(self.log, "{}", path.display()).map_err(|e| ReplayError::io(&self.log_path, e))?;

        self.cursor += 1;
        tracing::info!(
            position = self.cursor,
            total = self.files.len(),
            path = %path.display(),
            "Served corpus file"
        );

        Ok(ReplayPage::Document {
            path: path.clone(),
            body,
        })
    }

    /// Number of files already served
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Corpus files in serving order
    #[inline]
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Files still to be served
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.files.len() - self.cursor
    }

    /// Session log location
    #[inline]
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// All files under `root`, sorted by name at every level
///
/// Symlinked files count; symlinked directories are not descended into.
fn enumerate_corpus(root: &Path) -> Result<Vec<PathBuf>, ReplayError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Number of leading corpus files already recorded in the log
fn logged_prefix(log_path: &Path, files: &[PathBuf]) -> Result<usize, ReplayError> {
    let text = match fs::read_to_string(log_path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(ReplayError::io(log_path, e)),
    };

    let mut served = 0;
    for (index, line) in text.lines().filter(|line| !line.is_empty()).enumerate() {
        let expected = files
            .get(index)
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        if line != expected {
            return Err(ReplayError::LogMismatch {
                line: index + 1,
                expected,
                found: line.to_string(),
            });
        }
        served += 1;
    }
    Ok(served)
}
