//! Corpus Generation Tests
//!
//! Uses the built-in HTML grammar end to end.

use htmlfuzz_grammar::{
    html_grammar, Expander, ExpansionError, ExpansionLimits, GrammarFlavor, START_SYMBOL,
};
use htmlfuzz_session::{generate_corpus, SessionError, SessionSeed, MAX_PAGE_ATTEMPTS};
use htmlfuzz_test_utils::{tail_recursive_grammar, ScriptedChooser};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn generates_html_pages_from_builtin_grammar() {
    let dir = TempDir::new().unwrap();
    let expander = Expander::new(Arc::new(html_grammar(&GrammarFlavor::Corpus).unwrap()));
    let seed: SessionSeed = "1700000000.000000".parse().unwrap();

    let written = generate_corpus(dir.path(), 5, &expander, START_SYMBOL, &mut seed.rng()).unwrap();

    assert_eq!(written.len(), 5);
    for path in &written {
        let page = fs::read_to_string(path).unwrap();
        assert!(page.starts_with("<html"), "{} does not start with <html", path.display());
        assert!(!page.contains("domFuzz"));
    }
}

#[test]
fn same_seed_same_corpus() {
    let expander = Expander::new(Arc::new(html_grammar(&GrammarFlavor::Corpus).unwrap()));
    let seed: SessionSeed = "42".parse().unwrap();

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let a = generate_corpus(first.path(), 3, &expander, START_SYMBOL, &mut seed.rng()).unwrap();
    let b = generate_corpus(second.path(), 3, &expander, START_SYMBOL, &mut seed.rng()).unwrap();

    for (left, right) in a.iter().zip(&b) {
        assert_eq!(fs::read(left).unwrap(), fs::read(right).unwrap());
    }
}

fn shallow_expander() -> Expander {
    Expander::with_limits(
        tail_recursive_grammar(),
        ExpansionLimits::default().with_max_depth(2),
    )
}

#[test]
fn page_over_depth_is_redrawn() {
    let dir = TempDir::new().unwrap();
    let expander = shallow_expander();
    assert_eq!(expander.limits().max_depth, 2);
    // Y Y Y overruns the depth bound; the redraw picks X
    let mut chooser = ScriptedChooser::new([1_usize, 1, 1, 0]);

    let written = generate_corpus(dir.path(), 1, &expander, "S", &mut chooser).unwrap();

    assert_eq!(fs::read_to_string(&written[0]).unwrap(), "X ");
    assert_eq!(chooser.calls(), &[2, 2, 2, 2]);
    assert_eq!(chooser.remaining(), 0);
}

#[test]
fn redraws_stop_after_max_attempts() {
    let dir = TempDir::new().unwrap();
    let expander = shallow_expander();
    let mut chooser = ScriptedChooser::repeating(1);

    let result = generate_corpus(dir.path(), 1, &expander, "S", &mut chooser);

    assert!(matches!(
        result,
        Err(SessionError::Expansion(ExpansionError::DepthExceeded { limit: 2 }))
    ));
    // Each attempt makes three choices before the bound trips
    assert_eq!(chooser.calls().len(), 3 * MAX_PAGE_ATTEMPTS);
    assert!(!dir.path().join("page1.html").exists());
}
