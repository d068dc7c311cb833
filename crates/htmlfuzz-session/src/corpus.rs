//! Batch corpus generation
//!
//! Writes `page1.html ..= pageN.html` into an existing directory. Unlike a
//! [`Session`](crate::Session) there is no retention and no per-seed
//! directory; the output is meant to be kept and later replayed or scanned.

use crate::error::{ConfigError, SessionError};
use htmlfuzz_grammar::{AlternativeChooser, Expander};
use std::fs;
use std::path::{Path, PathBuf};

/// Attempts per page before a bound failure is reported
pub const MAX_PAGE_ATTEMPTS: usize = 16;

/// File name of page `index` (1-based)
#[must_use]
pub fn page_file_name(index: usize) -> String {
    format!("page{index}.html")
}

/// Write `count` generated pages into `directory`
///
/// A page that hits an expansion bound is redrawn with fresh random choices
/// up to [`MAX_PAGE_ATTEMPTS`] times. Grammar defects fail immediately.
///
/// # Errors
/// - [`ConfigError::MissingDirectory`] if `directory` is not a directory
/// - [`SessionError::Expansion`] for grammar defects or exhausted retries
/// - [`SessionError::Io`] if a page cannot be written
pub fn generate_corpus<C>(
    directory: &Path,
    count: usize,
    expander: &Expander,
    start_symbol: &str,
    chooser: &mut C,
) -> Result<Vec<PathBuf>, SessionError>
where
    C: AlternativeChooser + ?Sized,
{
    if !directory.is_dir() {
        return Err(ConfigError::MissingDirectory(directory.to_path_buf()).into());
    }

    tracing::info!(directory = %directory.display(), count, "Generating corpus");

    let mut written = Vec::with_capacity(count);
    for index in 1..=count {
        let page = generate_page(expander, start_symbol, chooser, index)?;
        let path = directory.join(page_file_name(index));
        fs::write(&path, page).map_err(|e| SessionError::io(&path, e))?;
        written.push(path);
    }

    tracing::info!(pages = written.len(), "Corpus generation complete");
    Ok(written)
}

fn generate_page<C>(
    expander: &Expander,
    start_symbol: &str,
    chooser: &mut C,
    index: usize,
) -> Result<String, SessionError>
where
    C: AlternativeChooser + ?Sized,
{
    let mut attempt = 1;
    loop {
        match expander.generate(start_symbol, chooser) {
            Ok(page) => return Ok(page),
            Err(error) if error.is_limit() && attempt < MAX_PAGE_ATTEMPTS => {
                tracing::debug!(page = index, attempt, %error, "Redrawing page");
                attempt += 1;
            }
            Err(error) => return Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmlfuzz_grammar::{ExpansionError, ExpansionLimits, Grammar};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn expander(rules: &[(&str, &str)], limits: ExpansionLimits) -> Expander {
        let mut builder = Grammar::builder();
        for (name, spec) in rules {
            builder.register_rule(name, spec);
        }
        Expander::with_limits(Arc::new(builder.build().unwrap()), limits)
    }

    #[test]
    fn writes_numbered_pages() {
        let dir = TempDir::new().unwrap();
        let expander = expander(&[("doc", "<p> x </p>")], ExpansionLimits::default());

        let written =
            generate_corpus(dir.path(), 3, &expander, "doc", &mut StdRng::seed_from_u64(1))
                .unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join("page1.html"),
                dir.path().join("page2.html"),
                dir.path().join("page3.html"),
            ]
        );
        assert_eq!(fs::read_to_string(&written[2]).unwrap(), "<p> x </p> ");
    }

    #[test]
    fn zero_pages_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let expander = expander(&[("doc", "x")], ExpansionLimits::default());
        let written =
            generate_corpus(dir.path(), 0, &expander, "doc", &mut StdRng::seed_from_u64(1))
                .unwrap();
        assert!(written.is_empty());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_directory_rejected() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let expander = expander(&[("doc", "x")], ExpansionLimits::default());

        let result = generate_corpus(&missing, 1, &expander, "doc", &mut StdRng::seed_from_u64(1));
        assert!(matches!(
            result,
            Err(SessionError::Configuration(ConfigError::MissingDirectory(path))) if path == missing
        ));
    }

    #[test]
    fn gives_up_after_bounded_retries() {
        let dir = TempDir::new().unwrap();
        // Every derivation recurses forever
        let expander = expander(&[("doc", "x doc")], ExpansionLimits::default().with_max_depth(8));

        let result = generate_corpus(dir.path(), 1, &expander, "doc", &mut StdRng::seed_from_u64(1));
        assert!(matches!(
            result,
            Err(SessionError::Expansion(ExpansionError::DepthExceeded { limit: 8 }))
        ));
        assert!(!dir.path().join("page1.html").exists());
    }
}
