//! Tolerant tag and attribute extraction
//!
//! Uses the error-recovering tree-sitter HTML grammar, so any byte soup
//! yields some tree. Only `start_tag` and `self_closing_tag` nodes are
//! inspected; end tags and text never contribute names.

use crate::error::ScanError;
use std::collections::BTreeSet;
use tree_sitter::{Node, Parser};

/// Names found in one document, lower-cased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageObservation {
    /// Element names
    pub tags: BTreeSet<String>,
    /// Attribute names
    pub attributes: BTreeSet<String>,
}

/// Reusable HTML parser
pub struct TagExtractor {
    parser: Parser,
}

impl std::fmt::Debug for TagExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagExtractor").finish_non_exhaustive()
    }
}

impl TagExtractor {
    /// Load the HTML grammar
    ///
    /// # Errors
    /// [`ScanError::ParserInit`] on a tree-sitter ABI mismatch
    pub fn new() -> Result<Self, ScanError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_html::LANGUAGE.into())
            .map_err(|e| ScanError::ParserInit(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Collect tag and attribute names from `source`
    ///
    /// A document the parser produces no tree for yields an empty
    /// observation.
    pub fn extract(&mut self, source: &str) -> PageObservation {
        let mut observation = PageObservation::default();
        let Some(tree) = self.parser.parse(source, None) else {
            tracing::warn!("Parser produced no tree; skipping document");
            return observation;
        };

        // Nesting depth is unbounded, so no recursion here
        let mut cursor = tree.walk();
        loop {
            let node = cursor.node();
            if matches!(node.kind(), "start_tag" | "self_closing_tag") {
                record_tag(node, source, &mut observation);
            }

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return observation;
                }
            }
        }
    }
}

fn record_tag(tag: Node<'_>, source: &str, observation: &mut PageObservation) {
    let mut walker = tag.walk();
    for child in tag.named_children(&mut walker) {
        match child.kind() {
            "tag_name" => {
                if let Some(name) = lower_text(child, source) {
                    observation.tags.insert(name);
                }
            }
            "attribute" => {
                let mut attribute_walker = child.walk();
                let name = child
                    .named_children(&mut attribute_walker)
                    .find(|node| node.kind() == "attribute_name")
                    .and_then(|node| lower_text(node, source));
                if let Some(name) = name {
                    observation.attributes.insert(name);
                }
            }
            _ => {}
        }
    }
}

fn lower_text(node: Node<'_>, source: &str) -> Option<String> {
    node.utf8_text(source.as_bytes())
        .ok()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_ascii_lowercase)
}
