//! Bounded stochastic expansion
//!
//! [`Expander::generate`] derives text from a start symbol by repeatedly
//! choosing one alternative per nonterminal. Derivation runs on an explicit
//! work stack, so a cyclic grammar can only fail with
//! [`ExpansionError::DepthExceeded`] or [`ExpansionError::OutputExceeded`],
//! never by exhausting the thread stack.
//!
//! Nothing is memoised: every visit of a nonterminal draws a fresh
//! alternative.

use crate::error::{ExpansionError, GrammarError};
use crate::grammar::Grammar;
use crate::symbol::{Alternative, Symbol};
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;

/// Separator appended after every terminal and literal
pub const TERMINAL_SEPARATOR: char = ' ';

/// Source of alternative choices
///
/// Production code draws from a seeded [`StdRng`]; tests can script the
/// sequence of choices.
#[cfg_attr(test, mockall::automock)]
pub trait AlternativeChooser {
    /// Pick an index in `0..count` (`count` is never zero)
    fn choose(&mut self, count: usize) -> usize;
}

impl AlternativeChooser for StdRng {
    #[inline]
    fn choose(&mut self, count: usize) -> usize {
        self.gen_range(0..count)
    }
}

impl<C: AlternativeChooser + ?Sized> AlternativeChooser for &mut C {
    #[inline]
    fn choose(&mut self, count: usize) -> usize {
        (**self).choose(count)
    }
}

/// Resource bounds for a single derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionLimits {
    /// Maximum number of nested nonterminal expansions
    pub max_depth: usize,
    /// Maximum size of the generated text in bytes
    pub max_output_bytes: usize,
}

impl Default for ExpansionLimits {
    fn default() -> Self {
        Self {
            max_depth: 512,
            max_output_bytes: 8 * 1024 * 1024,
        }
    }
}

impl ExpansionLimits {
    /// Replace the depth bound
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replace the output bound
    #[inline]
    #[must_use]
    pub fn with_max_output_bytes(mut self, max_output_bytes: usize) -> Self {
        self.max_output_bytes = max_output_bytes;
        self
    }
}

/// Partially consumed sequence alternative
struct Frame<'g> {
    symbols: &'g [Symbol],
    next: usize,
}

/// Grammar expander
#[derive(Debug, Clone)]
pub struct Expander {
    grammar: Arc<Grammar>,
    limits: ExpansionLimits,
}

impl Expander {
    /// Create an expander with default limits
    #[inline]
    #[must_use]
    pub fn new(grammar: Arc<Grammar>) -> Self {
        Self::with_limits(grammar, ExpansionLimits::default())
    }

    /// Create an expander with explicit limits
    #[inline]
    #[must_use]
    pub fn with_limits(grammar: Arc<Grammar>, limits: ExpansionLimits) -> Self {
        Self { grammar, limits }
    }

    /// Underlying grammar
    #[inline]
    #[must_use]
    pub fn grammar(&self) -> &Arc<Grammar> {
        &self.grammar
    }

    /// Configured limits
    #[inline]
    #[must_use]
    pub fn limits(&self) -> ExpansionLimits {
        self.limits
    }

    /// Derive text from `start_symbol`
    ///
    /// Terminals are emitted left to right, each followed by
    /// [`TERMINAL_SEPARATOR`]; literal alternatives likewise.
    ///
    /// # Errors
    /// - [`ExpansionError::Grammar`] if `start_symbol` is not registered
    /// - [`ExpansionError::DepthExceeded`] / [`ExpansionError::OutputExceeded`]
    ///   when a bound is hit; partial output is discarded
    pub fn generate<C>(&self, start_symbol: &str, chooser: &mut C) -> Result<String, ExpansionError>
    where
        C: AlternativeChooser + ?Sized,
    {
        let mut output = String::new();
        let mut stack: Vec<Frame<'_>> = Vec::new();

        self.enter(start_symbol, chooser, &mut stack, &mut output)?;

        loop {
            let symbol = match stack.last_mut() {
                None => break,
                Some(frame) => {
                    let symbols = frame.symbols;
                    match symbols.get(frame.next) {
                        Some(symbol) => {
                            frame.next += 1;
                            symbol
                        }
                        None => {
                            stack.pop();
                            continue;
                        }
                    }
                }
            };

            match symbol {
                Symbol::Terminal(text) => self.emit(text, &mut output)?,
                Symbol::NonTerminal(name) => self.enter(name, chooser, &mut stack, &mut output)?,
            }
        }

        Ok(output)
    }

    /// Choose an alternative for `name` and schedule it
    fn enter<'g, C>(
        &'g self,
        name: &str,
        chooser: &mut C,
        stack: &mut Vec<Frame<'g>>,
        output: &mut String,
    ) -> Result<(), ExpansionError>
    where
        C: AlternativeChooser + ?Sized,
    {
        let alternatives = self
            .grammar
            .alternatives(name)
            .filter(|alternatives| !alternatives.is_empty())
            .ok_or_else(|| GrammarError::undefined(name))?;

        let index = chooser.choose(alternatives.len()).min(alternatives.len() - 1);

        match &alternatives[index] {
            Alternative::Literal(payload) => self.emit(payload, output),
            Alternative::Sequence(symbols) => {
                if stack.len() >= self.limits.max_depth {
                    return Err(ExpansionError::DepthExceeded {
                        limit: self.limits.max_depth,
                    });
                }
                stack.push(Frame { symbols, next: 0 });
                Ok(())
            }
        }
    }

    fn emit(&self, text: &str, output: &mut String) -> Result<(), ExpansionError> {
        output.push_str(text);
        output.push(TERMINAL_SEPARATOR);
        if output.len() > self.limits.max_output_bytes {
            return Err(ExpansionError::OutputExceeded {
                limit: self.limits.max_output_bytes,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;
    use rand::SeedableRng;

    fn grammar(rules: &[(&str, &str)]) -> Arc<Grammar> {
        let mut builder = Grammar::builder();
        for (name, spec) in rules {
            builder.register_rule(name, spec);
        }
        Arc::new(builder.build().unwrap())
    }

    #[test]
    fn forced_choices_concatenate_left_to_right() {
        let expander = Expander::new(grammar(&[("S", "X | Y S")]));

        let mut chooser = MockAlternativeChooser::new();
        let mut seq = Sequence::new();
        for pick in [1_usize, 1, 1, 0] {
            chooser
                .expect_choose()
                .withf(|count| *count == 2)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(pick);
        }

        assert_eq!(expander.generate("S", &mut chooser).unwrap(), "Y Y Y X ");
    }

    #[test]
    fn nested_rules_expand_in_place() {
        let expander = Expander::new(grammar(&[
            ("doc", "<p> inner </p>"),
            ("inner", "a b"),
        ]));
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(expander.generate("doc", &mut rng).unwrap(), "<p> a b </p> ");
    }

    #[test]
    fn literal_emitted_verbatim() {
        let mut builder = Grammar::builder();
        builder
            .register_rule("body", "<body> payload </body>")
            .register_literal("payload", "x  ||  y");
        let expander = Expander::new(Arc::new(builder.build().unwrap()));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            expander.generate("body", &mut rng).unwrap(),
            "<body> x  ||  y </body> "
        );
    }

    #[test]
    fn empty_alternative_expands_to_nothing() {
        let expander = Expander::new(grammar(&[("opt", " | "), ("s", "[ opt ]")]));
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(expander.generate("s", &mut rng).unwrap(), "[ ] ");
    }

    #[test]
    fn unknown_start_symbol_is_grammar_error() {
        let expander = Expander::new(grammar(&[("S", "X")]));
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            expander.generate("html_document", &mut rng),
            Err(ExpansionError::Grammar(GrammarError::undefined("html_document")))
        );
    }

    #[test]
    fn depth_bound_is_controlled_failure() {
        let expander = Expander::with_limits(
            grammar(&[("S", "X | Y S")]),
            ExpansionLimits::default().with_max_depth(3),
        );
        let mut chooser = MockAlternativeChooser::new();
        chooser.expect_choose().return_const(1_usize);
        assert_eq!(
            expander.generate("S", &mut chooser),
            Err(ExpansionError::DepthExceeded { limit: 3 })
        );
    }

    #[test]
    fn accessors_expose_configuration() {
        let shared = grammar(&[("S", "X")]);
        let limits = ExpansionLimits::default().with_max_depth(7);
        let expander = Expander::with_limits(Arc::clone(&shared), limits);

        assert!(Arc::ptr_eq(expander.grammar(), &shared));
        assert_eq!(expander.limits(), limits);
        assert_eq!(Expander::new(shared).limits(), ExpansionLimits::default());
    }

    #[test]
    fn output_bound_is_controlled_failure() {
        let expander = Expander::with_limits(
            grammar(&[("S", "X | YYYY S")]),
            ExpansionLimits::default().with_max_output_bytes(12),
        );
        let mut chooser = MockAlternativeChooser::new();
        chooser.expect_choose().return_const(1_usize);
        assert_eq!(
            expander.generate("S", &mut chooser),
            Err(ExpansionError::OutputExceeded { limit: 12 })
        );
    }

    #[test]
    fn out_of_range_choice_is_clamped() {
        let expander = Expander::new(grammar(&[("S", "A | B")]));
        let mut chooser = MockAlternativeChooser::new();
        chooser.expect_choose().return_const(9_usize);
        assert_eq!(expander.generate("S", &mut chooser).unwrap(), "B ");
    }

    #[test]
    fn same_seed_same_text() {
        let expander = Expander::new(grammar(&[
            ("S", "a | b S | c S S"),
        ]));
        let first = expander.generate("S", &mut StdRng::seed_from_u64(99));
        let second = expander.generate("S", &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
