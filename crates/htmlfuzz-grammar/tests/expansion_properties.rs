//! Expansion Properties
//!
//! Termination, balance and reproducibility of bounded derivation.

use htmlfuzz_grammar::{Expander, ExpansionError, ExpansionLimits, GrammarError};
use htmlfuzz_test_utils::{tail_recursive_grammar, toy_grammar, ScriptedChooser};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn nested_parens() -> Expander {
    Expander::new(toy_grammar(&[("S", "x | x | ( S )")]))
}

fn is_balanced(text: &str) -> bool {
    let mut open = 0_i64;
    for token in text.split_whitespace() {
        match token {
            "(" => open += 1,
            ")" => {
                open -= 1;
                if open < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    open == 0
}

proptest! {
    #[test]
    fn prop_subcritical_grammar_terminates(seed in any::<u64>()) {
        let expander = nested_parens();
        let text = expander.generate("S", &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(is_balanced(&text));
        prop_assert_eq!(text.matches('x').count(), 1);
        prop_assert!(text.ends_with(' '));
    }

    #[test]
    fn prop_same_seed_same_document(seed in any::<u64>()) {
        let expander = Expander::new(toy_grammar(&[
            ("S", "a | b S | c S S"),
        ]));
        let first = expander.generate("S", &mut StdRng::seed_from_u64(seed));
        let second = expander.generate("S", &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_failures_are_only_bound_errors(seed in any::<u64>()) {
        // Critical branching process: runs may blow any bound
        let expander = Expander::with_limits(
            toy_grammar(&[("S", "a | S S")]),
            ExpansionLimits::default().with_max_depth(64).with_max_output_bytes(4096),
        );
        match expander.generate("S", &mut StdRng::seed_from_u64(seed)) {
            Ok(text) => prop_assert!(text.len() <= 4096),
            Err(error) => prop_assert!(error.is_limit()),
        }
    }
}

#[test]
fn subcritical_success_rate_over_seeds() {
    let expander = nested_parens();
    let successes = (0..1000_u64)
        .filter(|seed| expander.generate("S", &mut StdRng::seed_from_u64(*seed)).is_ok())
        .count();
    assert!(successes >= 990, "only {successes}/1000 derivations terminated");
}

#[test]
fn scripted_choices_reproduce_reference_derivation() {
    let expander = Expander::new(tail_recursive_grammar());
    let mut chooser = ScriptedChooser::new([1_usize, 1, 1, 0]);

    let text = expander.generate("S", &mut chooser).unwrap();

    assert_eq!(text, "Y Y Y X ");
    assert_eq!(chooser.calls(), &[2, 2, 2, 2]);
    assert_eq!(chooser.remaining(), 0);
}

#[test]
fn unbounded_recursion_hits_depth_limit() {
    let expander = Expander::with_limits(
        tail_recursive_grammar(),
        ExpansionLimits::default().with_max_depth(10),
    );
    let mut chooser = ScriptedChooser::repeating(1);
    assert_eq!(
        expander.generate("S", &mut chooser),
        Err(ExpansionError::DepthExceeded { limit: 10 })
    );
}

#[test]
fn missing_start_symbol_reports_name() {
    let expander = Expander::new(tail_recursive_grammar());
    let mut chooser = ScriptedChooser::repeating(0);
    let error = expander.generate("T", &mut chooser).unwrap_err();
    assert_eq!(error, ExpansionError::Grammar(GrammarError::undefined("T")));
    assert!(error.to_string().contains("'T'"));
}
