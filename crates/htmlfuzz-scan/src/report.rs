//! Coverage report
//!
//! Pure set arithmetic over a [`CorpusObservation`]. All sets are ordered,
//! so both the text and JSON renderings are deterministic.

use crate::error::ScanError;
use crate::scanner::CorpusObservation;
use crate::vocabulary::Vocabulary;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// Coverage of one reference list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCoverage {
    /// Distinct names in the reference list
    pub total: usize,
    /// Reference names seen in the corpus
    pub observed: usize,
    /// Reference names never seen
    pub missing: BTreeSet<String>,
}

impl CategoryCoverage {
    /// Compare `reference` with the names actually seen
    #[must_use]
    pub fn compute(reference: &[&str], seen: &BTreeSet<String>) -> Self {
        let reference: BTreeSet<&str> = reference.iter().copied().collect();
        let missing: BTreeSet<String> = reference
            .iter()
            .filter(|name| !seen.contains(**name))
            .map(|name| (*name).to_string())
            .collect();
        Self {
            total: reference.len(),
            observed: reference.len() - missing.len(),
            missing,
        }
    }

    /// Whether every reference name was seen
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Result of a corpus audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// HTML files parsed
    pub pages_scanned: usize,
    /// Distinct names across both tag lists
    pub total_tags: usize,
    /// Current element coverage
    pub html5_tags: CategoryCoverage,
    /// Obsolete element coverage
    pub obsolete_tags: CategoryCoverage,
    /// Attribute coverage
    pub attributes: CategoryCoverage,
}

impl CoverageReport {
    /// Difference `observation` against `vocabulary`
    #[must_use]
    pub fn compute(vocabulary: &Vocabulary<'_>, observation: &CorpusObservation) -> Self {
        let all_tags: BTreeSet<&str> = vocabulary
            .html5_tags
            .iter()
            .chain(vocabulary.obsolete_tags)
            .copied()
            .collect();

        Self {
            pages_scanned: observation.pages,
            total_tags: all_tags.len(),
            html5_tags: CategoryCoverage::compute(vocabulary.html5_tags, &observation.tags),
            obsolete_tags: CategoryCoverage::compute(vocabulary.obsolete_tags, &observation.tags),
            attributes: CategoryCoverage::compute(vocabulary.attributes, &observation.attributes),
        }
    }

    /// Pretty-printed JSON rendering
    ///
    /// # Errors
    /// [`ScanError::Serialize`]
    pub fn to_json(&self) -> Result<String, ScanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

struct MissingList<'a>(&'a BTreeSet<String>);

impl Display for MissingList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(none)");
        }
        let mut first = true;
        for name in self.0 {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

impl Display for CoverageReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Web pages in corpus: {}", self.pages_scanned)?;
        writeln!(f)?;
        writeln!(f, "HTML5 tags in reference: {}", self.html5_tags.total)?;
        writeln!(f, "Obsolete HTML tags in reference: {}", self.obsolete_tags.total)?;
        writeln!(f, "Total HTML tags in reference: {}", self.total_tags)?;

        for (label, coverage) in [
            ("HTML5 tags", &self.html5_tags),
            ("Obsolete HTML tags", &self.obsolete_tags),
            ("HTML attributes", &self.attributes),
        ] {
            writeln!(f)?;
            writeln!(f, "{label} found in corpus: {}", coverage.observed)?;
            writeln!(f, "{label} missing from corpus: {}", coverage.missing.len())?;
            writeln!(f, "Missing {label}: {}", MissingList(&coverage.missing))?;
        }
        Ok(())
    }
}
