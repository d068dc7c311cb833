//! Error types for grammar construction and expansion
//!
//! - [`GrammarError`]: a grammar-definition defect (undefined or empty rule)
//! - [`ExpansionError`]: a failed generation event

/// Grammar-definition defect
///
/// Raised by [`GrammarBuilder::build`](crate::GrammarBuilder::build) when a
/// rule is unusable, and by the expander when asked for a start symbol that
/// was never registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// A nonterminal is referenced but never registered
    #[error("undefined nonterminal '{name}'{}", referrer_suffix(.referenced_by))]
    Undefined {
        /// The missing nonterminal
        name: String,
        /// The rule holding the reference, if any
        referenced_by: Option<String>,
    },

    /// A nonterminal is registered with zero alternatives
    #[error("nonterminal '{0}' has no alternatives")]
    NoAlternatives(String),

    /// Rule name is empty or contains whitespace
    #[error("invalid nonterminal name: '{0}'")]
    InvalidName(String),
}

fn referrer_suffix(referenced_by: &Option<String>) -> String {
    referenced_by
        .as_ref()
        .map(|rule| format!(" (referenced by '{rule}')"))
        .unwrap_or_default()
}

impl GrammarError {
    /// Undefined symbol with no referencing rule (e.g. a bad start symbol)
    pub fn undefined(name: impl Into<String>) -> Self {
        Self::Undefined {
            name: name.into(),
            referenced_by: None,
        }
    }
}

/// Failure of a single generation event
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpansionError {
    /// Grammar-definition defect reached during expansion
    #[error("grammar error: {0}")]
    Grammar(#[from] GrammarError),

    /// Derivation nested deeper than the configured bound
    #[error("expansion depth exceeded limit of {limit}")]
    DepthExceeded {
        /// Configured maximum depth
        limit: usize,
    },

    /// Generated text grew past the configured bound
    #[error("expansion output exceeded limit of {limit} bytes")]
    OutputExceeded {
        /// Configured maximum output size in bytes
        limit: usize,
    },
}

impl ExpansionError {
    /// Whether the failure came from a resource bound rather than a defect
    ///
    /// Bound failures are probabilistic and a retry with fresh random draws
    /// may succeed; grammar defects never will.
    #[inline]
    #[must_use]
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::DepthExceeded { .. } | Self::OutputExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_display_mentions_referrer() {
        let err = GrammarError::Undefined {
            name: "b_tag".to_string(),
            referenced_by: Some("physical_style".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "undefined nonterminal 'b_tag' (referenced by 'physical_style')"
        );
        assert_eq!(
            GrammarError::undefined("x").to_string(),
            "undefined nonterminal 'x'"
        );
    }

    #[test]
    fn limit_classification() {
        assert!(ExpansionError::DepthExceeded { limit: 4 }.is_limit());
        assert!(ExpansionError::OutputExceeded { limit: 4 }.is_limit());
        assert!(!ExpansionError::from(GrammarError::undefined("s")).is_limit());
    }
}
