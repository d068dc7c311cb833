//! htmlfuzz Coverage Scanner
//!
//! Audits a corpus of HTML files for which reference tags and attributes
//! it never uses. Parsing is error-recovering; malformed pages simply
//! contribute fewer names.
//!
//! ```no_run
//! use htmlfuzz_scan::CoverageScanner;
//! use std::path::Path;
//!
//! let mut scanner = CoverageScanner::new()?;
//! let report = scanner.scan(Path::new("corpus"))?;
//! println!("{report}");
//! # Ok::<(), htmlfuzz_scan::ScanError>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod parser;
pub mod report;
pub mod scanner;
pub mod vocabulary;

pub use error::ScanError;
pub use parser::{PageObservation, TagExtractor};
pub use report::{CategoryCoverage, CoverageReport};
pub use scanner::{html_files, is_html_file, CorpusObservation, CoverageScanner, HTML_EXTENSIONS};
pub use vocabulary::{Vocabulary, ATTRIBUTES, HTML5_TAGS, OBSOLETE_TAGS};
