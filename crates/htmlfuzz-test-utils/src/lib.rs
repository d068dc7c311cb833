//! Testing utilities for the htmlfuzz workspace
//!
//! Shared choosers, grammars and on-disk fixtures.

#![allow(missing_docs)]

use htmlfuzz_grammar::{AlternativeChooser, Grammar};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Chooser replaying a fixed list of picks, then repeating `fallback`
#[derive(Debug, Clone)]
pub struct ScriptedChooser {
    picks: VecDeque<usize>,
    fallback: usize,
    calls: Vec<usize>,
}

impl ScriptedChooser {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            fallback: 0,
            calls: Vec::new(),
        }
    }

    /// Always pick `pick`
    pub fn repeating(pick: usize) -> Self {
        Self::new(Vec::<usize>::new()).with_fallback(pick)
    }

    pub fn with_fallback(mut self, fallback: usize) -> Self {
        self.fallback = fallback;
        self
    }

    /// Alternative counts seen so far, in call order
    pub fn calls(&self) -> &[usize] {
        &self.calls
    }

    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl AlternativeChooser for ScriptedChooser {
    fn choose(&mut self, count: usize) -> usize {
        self.calls.push(count);
        let pick = self.picks.pop_front().unwrap_or(self.fallback);
        pick.min(count - 1)
    }
}

pub fn toy_grammar(rules: &[(&str, &str)]) -> Arc<Grammar> {
    let mut builder = Grammar::builder();
    for (name, spec) in rules {
        builder.register_rule(name, spec);
    }
    Arc::new(builder.build().expect("toy grammar must build"))
}

/// The `S -> X | Y S` grammar from the reference scenario
pub fn tail_recursive_grammar() -> Arc<Grammar> {
    toy_grammar(&[("S", "X | Y S")])
}

pub fn write_file(root: &Path, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(&path, contents).expect("write fixture file");
    path
}

/// Temporary directory pre-populated with `(relative path, contents)` pairs
pub fn corpus_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (relative, contents) in files {
        write_file(dir.path(), relative, contents);
    }
    dir
}
