//! htmlfuzz Grammar Engine
//!
//! Stochastic context-free grammar for generating syntactically varied HTML.
//!
//! # Overview
//!
//! - **Grammar**: validated, read-only map from nonterminal to alternatives
//! - **GrammarBuilder**: rule registration and build-time validation
//! - **Expander**: bounded random derivation from a start symbol
//! - **html**: the built-in HTML/CSS/SVG rule set
//! - **MutationPayload**: client-side script embedded by the fuzz flavour
//!
//! # Example
//!
//! ```rust
//! use htmlfuzz_grammar::{Expander, Grammar};
//! use rand::{rngs::StdRng, SeedableRng};
//! use std::sync::Arc;
//!
//! let mut builder = Grammar::builder();
//! builder.register_rule("S", "<p> word </p>").register_rule("word", "a | b");
//! let expander = Expander::new(Arc::new(builder.build().unwrap()));
//!
//! let text = expander.generate("S", &mut StdRng::seed_from_u64(1)).unwrap();
//! assert!(text.starts_with("<p> "));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod expander;
pub mod grammar;
pub mod html;
pub mod payload;
pub mod symbol;

// Re-exports
pub use error::{ExpansionError, GrammarError};
pub use expander::{AlternativeChooser, Expander, ExpansionLimits, TERMINAL_SEPARATOR};
pub use grammar::{Grammar, GrammarBuilder, ALTERNATION_DELIMITER};
pub use html::{html_grammar, GrammarFlavor, PAYLOAD_RULE, START_SYMBOL};
pub use payload::MutationPayload;
pub use symbol::{Alternative, Symbol};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for grammar construction and expansion
    pub use crate::{
        html_grammar, Alternative, AlternativeChooser, Expander, ExpansionError, ExpansionLimits,
        Grammar, GrammarBuilder, GrammarError, GrammarFlavor, MutationPayload, Symbol,
        START_SYMBOL,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
