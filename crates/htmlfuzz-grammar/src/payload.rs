//! Client-side mutation payload
//!
//! The payload is an opaque script template. Only two placeholders are
//! substituted; everything else passes through untouched.

use std::fmt::{self, Display, Formatter};

/// Placeholder replaced by the session seed
pub const SEED_PLACEHOLDER: &str = "{{seed}}";

/// Placeholder replaced by the delivery server port
pub const CALLBACK_PORT_PLACEHOLDER: &str = "{{callback_port}}";

/// Built-in DOM mutation script template
pub const DEFAULT_TEMPLATE: &str = include_str!("../assets/domfuzz.js");

/// Rendered payload ready to embed in generated documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationPayload {
    script: String,
}

impl MutationPayload {
    /// Render the built-in template
    #[must_use]
    pub fn render(seed: &str, callback_port: u16) -> Self {
        Self::render_template(DEFAULT_TEMPLATE, seed, callback_port)
    }

    /// Render an arbitrary template
    #[must_use]
    pub fn render_template(template: &str, seed: &str, callback_port: u16) -> Self {
        let script = template
            .replace(SEED_PLACEHOLDER, seed)
            .replace(CALLBACK_PORT_PLACEHOLDER, &callback_port.to_string());
        Self { script }
    }

    /// Rendered script text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.script
    }

    /// Consume into the rendered script text
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.script
    }
}

impl Display for MutationPayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_both_placeholders() {
        let payload = MutationPayload::render_template(
            "seed={{seed}} port={{callback_port}} keep={{other}}",
            "1480275799.15",
            8080,
        );
        assert_eq!(payload.as_str(), "seed=1480275799.15 port=8080 keep={{other}}");
    }

    #[test]
    fn default_template_is_fully_rendered() {
        let payload = MutationPayload::render("1700000000.000001", 4242);
        let text = payload.as_str();
        assert!(!text.contains(SEED_PLACEHOLDER));
        assert!(!text.contains(CALLBACK_PORT_PLACEHOLDER));
        assert!(text.contains("1700000000.000001"));
        assert!(text.contains("http://127.0.0.1:4242"));
        assert!(text.contains("function domFuzz()"));
        // The script relies on the alternation delimiter character
        assert!(text.contains('|'));
    }
}
