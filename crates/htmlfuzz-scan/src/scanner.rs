//! Corpus traversal

use crate::error::ScanError;
use crate::parser::{PageObservation, TagExtractor};
use crate::report::CoverageReport;
use crate::vocabulary::Vocabulary;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions treated as HTML
pub const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Union of everything seen across a corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusObservation {
    /// Element names
    pub tags: BTreeSet<String>,
    /// Attribute names
    pub attributes: BTreeSet<String>,
    /// HTML files parsed
    pub pages: usize,
}

impl CorpusObservation {
    /// Fold one page into the corpus totals
    pub fn absorb(&mut self, page: PageObservation) {
        self.tags.extend(page.tags);
        self.attributes.extend(page.attributes);
        self.pages += 1;
    }
}

/// Whether `path` has an HTML extension
#[must_use]
pub fn is_html_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| HTML_EXTENSIONS.contains(&ext))
}

/// HTML files under `root`, sorted by name at every level
///
/// # Errors
/// [`ScanError::MissingDirectory`] or [`ScanError::Walk`]
pub fn html_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingDirectory(root.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.path().is_file() && is_html_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Offline coverage scanner
#[derive(Debug)]
pub struct CoverageScanner<'v> {
    extractor: TagExtractor,
    vocabulary: Vocabulary<'v>,
}

impl CoverageScanner<'static> {
    /// Scanner using the built-in reference lists
    ///
    /// # Errors
    /// [`ScanError::ParserInit`]
    pub fn new() -> Result<Self, ScanError> {
        Self::with_vocabulary(Vocabulary::reference())
    }
}

impl<'v> CoverageScanner<'v> {
    /// Scanner using custom reference lists
    ///
    /// # Errors
    /// [`ScanError::ParserInit`]
    pub fn with_vocabulary(vocabulary: Vocabulary<'v>) -> Result<Self, ScanError> {
        Ok(Self {
            extractor: TagExtractor::new()?,
            vocabulary,
        })
    }

    /// Reference lists in use
    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary<'v> {
        &self.vocabulary
    }

    /// Parse every HTML file under `root`
    ///
    /// Undecodable bytes are replaced, never rejected.
    ///
    /// # Errors
    /// Enumeration failures and unreadable files
    pub fn observe(&mut self, root: &Path) -> Result<CorpusObservation, ScanError> {
        let mut observation = CorpusObservation::default();
        for path in html_files(root)? {
            tracing::debug!(path = %path.display(), "Scanning");
            let bytes = fs::read(&path).map_err(|source| ScanError::Io {
                path: path.clone(),
                source,
            })?;
            let source = String::from_utf8_lossy(&bytes);
            observation.absorb(self.extractor.extract(&source));
        }
        tracing::info!(
            pages = observation.pages,
            tags = observation.tags.len(),
            attributes = observation.attributes.len(),
            "Corpus scanned"
        );
        Ok(observation)
    }

    /// Scan `root` and compare against the reference lists
    ///
    /// # Errors
    /// See [`CoverageScanner::observe`]
    pub fn scan(&mut self, root: &Path) -> Result<CoverageReport, ScanError> {
        let observation = self.observe(root)?;
        Ok(CoverageReport::compute(&self.vocabulary, &observation))
    }
}
