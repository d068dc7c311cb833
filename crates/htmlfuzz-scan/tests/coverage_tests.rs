//! Coverage Scanner Tests
//!
//! End-to-end scans over on-disk corpora.

use htmlfuzz_scan::{CoverageScanner, ScanError, Vocabulary};
use htmlfuzz_test_utils::{corpus_dir, write_file};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn attribute_scenario() {
    let corpus = corpus_dir(&[("only.html", r#"<p id="x">hello</p>"#)]);
    let mut scanner = CoverageScanner::with_vocabulary(Vocabulary {
        html5_tags: &["p"],
        obsolete_tags: &[],
        attributes: &["id", "class", "href"],
    })
    .unwrap();

    let report = scanner.scan(corpus.path()).unwrap();

    assert_eq!(report.attributes.missing, names(&["class", "href"]));
    assert_eq!(report.attributes.observed, 1);
    assert_eq!(report.pages_scanned, 1);
}

#[test]
fn only_html_files_are_scanned() {
    let corpus = corpus_dir(&[
        ("a.html", "<blink>x</blink>"),
        ("nested/deeper/b.htm", "<marquee loop=2>y</marquee>"),
        ("c.txt", "<xmp>not html</xmp>"),
        ("d.HTML.bak", "<tt>nope</tt>"),
    ]);
    let mut scanner = CoverageScanner::new().unwrap();

    let report = scanner.scan(corpus.path()).unwrap();

    assert_eq!(report.pages_scanned, 2);
    assert!(!report.obsolete_tags.missing.contains("blink"));
    assert!(!report.obsolete_tags.missing.contains("marquee"));
    assert!(report.obsolete_tags.missing.contains("xmp"));
    assert!(report.obsolete_tags.missing.contains("tt"));
    assert!(!report.attributes.missing.contains("loop"));
}

#[test]
fn reference_totals() {
    let corpus = corpus_dir(&[]);
    let report = CoverageScanner::new().unwrap().scan(corpus.path()).unwrap();

    assert_eq!(report.pages_scanned, 0);
    assert_eq!(report.html5_tags.total, 108);
    assert_eq!(report.obsolete_tags.total, 44);
    assert_eq!(report.total_tags, 152);
    assert_eq!(report.attributes.total, 147);
    assert_eq!(report.attributes.observed, 0);
}

#[test]
fn rescanning_unchanged_corpus_is_identical() {
    let corpus = corpus_dir(&[
        ("1.html", r#"<html><head><title>t</title></head><body bgcolor=red><a href=x>l</a></body></html>"#),
        ("2.htm", "<table><tr><td colspan=2>c</td></tr></table>"),
    ]);
    let mut scanner = CoverageScanner::new().unwrap();

    let first = scanner.scan(corpus.path()).unwrap();
    let second = scanner.scan(corpus.path()).unwrap();

    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn invalid_utf8_and_broken_markup_still_count() {
    let corpus = corpus_dir(&[("ok.html", "<p>fine</p>")]);
    write_file(corpus.path(), "binary.html", [0x3c, 0x62, 0x3e, 0xff, 0xfe, 0x3c, 0x2f]);
    write_file(corpus.path(), "broken.html", "<div <<< class=\"unterminated");
    let mut scanner = CoverageScanner::new().unwrap();

    let report = scanner.scan(corpus.path()).unwrap();

    assert_eq!(report.pages_scanned, 3);
    assert!(!report.html5_tags.missing.contains("p"));
    assert!(!report.html5_tags.missing.contains("b"));
}

#[test]
fn missing_directory_is_an_error() {
    let corpus = corpus_dir(&[]);
    let result = CoverageScanner::new()
        .unwrap()
        .scan(&corpus.path().join("absent"));
    assert!(matches!(result, Err(ScanError::MissingDirectory(_))));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_arbitrary_bytes_never_abort(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let corpus = corpus_dir(&[]);
        write_file(corpus.path(), "fuzz.html", &bytes);
        let report = CoverageScanner::new().unwrap().scan(corpus.path()).unwrap();
        prop_assert_eq!(report.pages_scanned, 1);
        prop_assert!(report.html5_tags.observed <= report.html5_tags.total);
    }
}

#[cfg(unix)]
#[test]
fn symlinked_pages_are_scanned() {
    let corpus = corpus_dir(&[("a.html", "<p>x</p>")]);
    let outside = corpus_dir(&[("linked.html", "<blink>y</blink>")]);
    std::os::unix::fs::symlink(outside.path().join("linked.html"), corpus.path().join("b.html"))
        .unwrap();
    let mut scanner = CoverageScanner::new().unwrap();

    let report = scanner.scan(corpus.path()).unwrap();

    assert_eq!(report.pages_scanned, 2);
    assert!(!report.obsolete_tags.missing.contains("blink"));
}

#[test]
fn custom_vocabulary_is_reported_back() {
    let vocabulary = Vocabulary {
        html5_tags: &["p", "div"],
        obsolete_tags: &["blink"],
        attributes: &["id"],
    };
    let mut scanner = CoverageScanner::with_vocabulary(vocabulary).unwrap();
    assert_eq!(scanner.vocabulary().html5_tags, &["p", "div"]);

    let corpus = corpus_dir(&[("a.html", "<div>x</div>")]);
    let report = scanner.scan(corpus.path()).unwrap();
    assert_eq!(report.html5_tags.total, scanner.vocabulary().html5_tags.len());
    assert_eq!(report.html5_tags.missing, names(&["p"]));
}
