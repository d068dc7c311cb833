//! Grammar symbols and alternatives
//!
//! Symbol kind is fixed when the grammar is built, so expansion never has to
//! ask whether a token names a rule.

use std::fmt::{self, Display, Formatter};

/// One grammar symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Literal atom, emitted verbatim followed by one separating space
    Terminal(String),
    /// Reference to a registered nonterminal
    NonTerminal(String),
}

impl Symbol {
    /// Terminal symbol
    #[inline]
    #[must_use]
    pub fn terminal(text: impl Into<String>) -> Self {
        Self::Terminal(text.into())
    }

    /// Nonterminal reference
    #[inline]
    #[must_use]
    pub fn nonterminal(name: impl Into<String>) -> Self {
        Self::NonTerminal(name.into())
    }

    /// True for [`Symbol::NonTerminal`]
    #[inline]
    #[must_use]
    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Self::NonTerminal(_))
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal(text) => write!(f, "{text:?}"),
            Self::NonTerminal(name) => write!(f, "{name}"),
        }
    }
}

/// One way a nonterminal may be rewritten
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Alternative {
    /// Ordered sequence of symbols
    Sequence(Vec<Symbol>),
    /// Opaque payload emitted verbatim, never split or tokenised
    Literal(String),
}

impl Alternative {
    /// Sequence alternative
    #[inline]
    #[must_use]
    pub fn sequence(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self::Sequence(symbols.into_iter().collect())
    }

    /// Literal alternative
    #[inline]
    #[must_use]
    pub fn literal(payload: impl Into<String>) -> Self {
        Self::Literal(payload.into())
    }

    /// Empty sequence (expands to nothing)
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::Sequence(Vec::new())
    }

    /// Symbols of a sequence alternative; empty for literals
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        match self {
            Self::Sequence(symbols) => symbols,
            Self::Literal(_) => &[],
        }
    }

    /// Nonterminal names referenced by this alternative
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.symbols().iter().filter_map(|s| match s {
            Symbol::NonTerminal(name) => Some(name.as_str()),
            Symbol::Terminal(_) => None,
        })
    }

    /// True when no nonterminal is referenced
    #[inline]
    #[must_use]
    pub fn is_terminal_only(&self) -> bool {
        self.references().next().is_none()
    }
}

impl Display for Alternative {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(payload) => write!(f, "<literal {} bytes>", payload.len()),
            Self::Sequence(symbols) => {
                for (i, symbol) in symbols.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{symbol}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_skip_terminals() {
        let alt = Alternative::sequence([
            Symbol::terminal("<b>"),
            Symbol::nonterminal("text"),
            Symbol::terminal("</b>"),
        ]);
        assert_eq!(alt.references().collect::<Vec<_>>(), vec!["text"]);
        assert!(!alt.is_terminal_only());
        let kinds: Vec<bool> = alt.symbols().iter().map(Symbol::is_nonterminal).collect();
        assert_eq!(kinds, vec![false, true, false]);
    }

    #[test]
    fn literal_has_no_symbols() {
        let alt = Alternative::literal("a | b");
        assert!(alt.symbols().is_empty());
        assert!(alt.is_terminal_only());
        assert_eq!(alt.to_string(), "<literal 5 bytes>");
    }

    #[test]
    fn display_sequence() {
        let alt = Alternative::sequence([Symbol::terminal("Y"), Symbol::nonterminal("S")]);
        assert_eq!(alt.to_string(), "\"Y\" S");
    }
}
