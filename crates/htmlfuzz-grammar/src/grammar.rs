//! Grammar store and builder
//!
//! Construction is two-phase:
//!
//! 1. **Construction**: register rules on a [`GrammarBuilder`]
//! 2. **Build**: resolve token kinds, validate references, freeze into a
//!    read-only [`Grammar`]
//!
//! # Rule notation
//!
//! [`GrammarBuilder::register_rule`] accepts the compact notation used by
//! the built-in grammar: alternatives separated by `|`, symbols separated by
//! whitespace. A token becomes a [`Symbol::NonTerminal`] if a rule of that
//! name exists when [`GrammarBuilder::build`] runs, otherwise a
//! [`Symbol::Terminal`].
//!
//! ```
//! use htmlfuzz_grammar::Grammar;
//!
//! let mut builder = Grammar::builder();
//! builder
//!     .register_rule("S", "X | Y S")
//!     .register_literal("payload", "a || b");
//! let grammar = builder.build().unwrap();
//! assert_eq!(grammar.alternatives("S").unwrap().len(), 2);
//! assert_eq!(grammar.alternatives("payload").unwrap().len(), 1);
//! ```

use crate::error::GrammarError;
use crate::symbol::{Alternative, Symbol};
use indexmap::IndexMap;

/// Alternation delimiter of the rule notation
pub const ALTERNATION_DELIMITER: char = '|';

/// Alternative awaiting symbol-kind resolution
#[derive(Debug, Clone)]
enum PendingAlternative {
    /// Whitespace-split tokens from the rule notation
    Tokens(Vec<String>),
    /// Alternative with explicit symbol kinds
    Resolved(Alternative),
}

/// Builder for [`Grammar`]
///
/// Registering the same name more than once appends alternatives, so a rule
/// may be spread over several calls.
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    rules: IndexMap<String, Vec<PendingAlternative>>,
}

impl GrammarBuilder {
    /// Create an empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register alternatives written in rule notation
    ///
    /// `spec` is split on `|`; each piece is split on whitespace. An empty
    /// piece registers an empty alternative.
    pub fn register_rule(&mut self, nonterminal: &str, spec: &str) -> &mut Self {
        let entry = self.rules.entry(nonterminal.to_string()).or_default();
        for piece in spec.split(ALTERNATION_DELIMITER) {
            let tokens = piece.split_whitespace().map(str::to_string).collect();
            entry.push(PendingAlternative::Tokens(tokens));
        }
        self
    }

    /// Register an opaque payload as a single literal alternative
    ///
    /// The payload is kept byte-for-byte, delimiter characters included.
    pub fn register_literal(&mut self, nonterminal: &str, payload: &str) -> &mut Self {
        self.rules
            .entry(nonterminal.to_string())
            .or_default()
            .push(PendingAlternative::Resolved(Alternative::literal(payload)));
        self
    }

    /// Register explicit alternatives
    ///
    /// Passing no alternatives still declares the rule, which then fails
    /// validation with [`GrammarError::NoAlternatives`] unless alternatives
    /// are added later.
    pub fn rule(
        &mut self,
        nonterminal: &str,
        alternatives: impl IntoIterator<Item = Alternative>,
    ) -> &mut Self {
        self.rules
            .entry(nonterminal.to_string())
            .or_default()
            .extend(alternatives.into_iter().map(PendingAlternative::Resolved));
        self
    }

    /// Number of declared rules
    #[inline]
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Resolve symbol kinds, validate, and freeze the grammar
    ///
    /// # Errors
    /// - [`GrammarError::InvalidName`] for an empty or whitespace-bearing name
    /// - [`GrammarError::NoAlternatives`] for a rule with zero alternatives
    /// - [`GrammarError::Undefined`] for an explicit reference to an
    ///   unregistered nonterminal
    pub fn build(self) -> Result<Grammar, GrammarError> {
        for (name, alternatives) in &self.rules {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(GrammarError::InvalidName(name.clone()));
            }
            if alternatives.is_empty() {
                return Err(GrammarError::NoAlternatives(name.clone()));
            }
        }

        let mut rules = IndexMap::with_capacity(self.rules.len());
        for (name, pending) in &self.rules {
            let resolved: Vec<Alternative> = pending
                .iter()
                .map(|alternative| match alternative {
                    PendingAlternative::Tokens(tokens) => Alternative::sequence(
                        tokens.iter().map(|token| self.classify(token)),
                    ),
                    PendingAlternative::Resolved(alternative) => alternative.clone(),
                })
                .collect();

            for alternative in &resolved {
                if let Some(missing) = alternative
                    .references()
                    .find(|referenced| !self.rules.contains_key(*referenced))
                {
                    return Err(GrammarError::Undefined {
                        name: missing.to_string(),
                        referenced_by: Some(name.clone()),
                    });
                }
            }

            rules.insert(name.clone(), resolved);
        }

        tracing::debug!("Built grammar with {} rules", rules.len());
        Ok(Grammar { rules })
    }

    fn classify(&self, token: &str) -> Symbol {
        if self.rules.contains_key(token) {
            Symbol::nonterminal(token)
        } else {
            Symbol::terminal(token)
        }
    }
}

/// Validated, read-only production rules
///
/// Every nonterminal referenced by any alternative is registered with at
/// least one alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    rules: IndexMap<String, Vec<Alternative>>,
}

impl Grammar {
    /// Start a new builder
    #[inline]
    #[must_use]
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// Alternatives registered for `nonterminal`
    #[inline]
    #[must_use]
    pub fn alternatives(&self, nonterminal: &str) -> Option<&[Alternative]> {
        self.rules.get(nonterminal).map(Vec::as_slice)
    }

    /// Whether `nonterminal` is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, nonterminal: &str) -> bool {
        self.rules.contains_key(nonterminal)
    }

    /// Rule names in registration order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of rules
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the grammar has no rules
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total alternatives across all rules
    #[must_use]
    pub fn alternative_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }
}
