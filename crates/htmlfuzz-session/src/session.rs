//! Generation sessions
//!
//! A [`Session`] owns one seed, one output directory and one monotonically
//! increasing sequence counter. Each call to [`Session::generate_one`] is a
//! single generation event: expand, persist, evict.

use crate::error::{ConfigError, SessionError};
use crate::retention::{RetentionPolicy, DEFAULT_RETENTION_WINDOW};
use crate::seed::SessionSeed;
use crate::state::{validate_transition, SessionState};
use htmlfuzz_grammar::{Expander, ExpansionLimits, Grammar, START_SYMBOL};
use rand::rngs::StdRng;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory under which the `{seed}` directory is created
    pub output_root: PathBuf,
    /// Replay seed; a time-derived seed is used when absent
    pub seed: Option<SessionSeed>,
    /// Number of artifacts kept on disk
    pub retention_window: u64,
    /// Nonterminal every document is derived from
    pub start_symbol: String,
    /// Expansion bounds
    pub limits: ExpansionLimits,
    /// Sequence number of the first persisted artifact
    pub start_at: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            seed: None,
            retention_window: DEFAULT_RETENTION_WINDOW,
            start_symbol: START_SYMBOL.to_string(),
            limits: ExpansionLimits::default(),
            start_at: 1,
        }
    }
}

impl SessionConfig {
    /// Create default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output root
    #[must_use]
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    /// Replay an earlier session
    #[must_use]
    pub fn with_seed(mut self, seed: SessionSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set retention window
    #[must_use]
    pub fn with_retention_window(mut self, window: u64) -> Self {
        self.retention_window = window;
        self
    }

    /// Set start symbol
    #[must_use]
    pub fn with_start_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.start_symbol = symbol.into();
        self
    }

    /// Set expansion bounds
    #[must_use]
    pub fn with_limits(mut self, limits: ExpansionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Skip ahead so the first persisted artifact is number `n`
    #[must_use]
    pub fn start_at(mut self, n: u64) -> Self {
        self.start_at = n;
        self
    }

    fn validate(&self) -> Result<RetentionPolicy, ConfigError> {
        if self.start_at == 0 {
            return Err(ConfigError::InvalidStartPosition);
        }
        RetentionPolicy::new(self.retention_window)
    }
}

/// One persisted generation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// 1-based position in the session
    pub sequence_number: u64,
    /// Session seed
    pub seed: SessionSeed,
    /// Generated document
    pub content: String,
    /// Where the document was written
    pub path: PathBuf,
}

/// A running generation session
#[derive(Debug)]
pub struct Session {
    seed: SessionSeed,
    rng: StdRng,
    expander: Expander,
    start_symbol: String,
    directory: PathBuf,
    retention: RetentionPolicy,
    counter: u64,
    state: SessionState,
}

impl Session {
    /// Claim the session directory and start serving
    ///
    /// # Errors
    /// - [`ConfigError::DirectoryExists`] if `{root}/{seed}` is already
    ///   present; nothing is written in that case
    /// - [`ConfigError::ZeroRetention`] / [`ConfigError::InvalidStartPosition`]
    /// - [`SessionError::Io`] if the directory cannot be created
    pub fn start(config: SessionConfig, grammar: Arc<Grammar>) -> Result<Self, SessionError> {
        let retention = config.validate()?;
        let seed = config.seed.unwrap_or_else(SessionSeed::now);
        let directory = config.output_root.join(seed.as_str());

        if directory.exists() {
            return Err(ConfigError::DirectoryExists(directory).into());
        }
        fs::create_dir_all(&config.output_root)
            .map_err(|e| SessionError::io(&config.output_root, e))?;
        fs::create_dir(&directory).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ConfigError::DirectoryExists(directory.clone()).into(),
            _ => SessionError::io(&directory, e),
        })?;

        let mut session = Self {
            rng: seed.rng(),
            seed,
            expander: Expander::with_limits(grammar, config.limits),
            start_symbol: config.start_symbol,
            directory,
            retention,
            counter: 0,
            state: SessionState::Init,
        };
        session.fast_forward(config.start_at - 1);
        session.transition(SessionState::Running)?;

        tracing::info!(
            seed = %session.seed,
            directory = %session.directory.display(),
            retention = session.retention.window(),
            next_sequence = session.counter + 1,
            "Session started"
        );
        Ok(session)
    }

    /// Regenerate and discard `count` documents
    fn fast_forward(&mut self, count: u64) {
        if count == 0 {
            return;
        }
        for _ in 0..count {
            self.counter += 1;
            // Failed events still consume their random draws
            let _ = self.expander.generate(&self.start_symbol, &mut self.rng);
        }
        tracing::debug!(skipped = count, "Fast-forwarded session");
    }

    /// Run one generation event
    ///
    /// The sequence number is consumed even when expansion fails, and
    /// retention is applied either way.
    ///
    /// # Errors
    /// - [`SessionError::NotRunning`] outside the running state
    /// - [`SessionError::Expansion`] when the document hits a bound
    /// - [`SessionError::Io`] when the artifact cannot be written or evicted
    pub fn generate_one(&mut self) -> Result<GeneratedArtifact, SessionError> {
        if self.state != SessionState::Running {
            return Err(SessionError::NotRunning(self.state));
        }

        self.counter += 1;
        let sequence = self.counter;

        let result = self
            .expander
            .generate(&self.start_symbol, &mut self.rng)
            .map_err(SessionError::from)
            .and_then(|content| self.persist(sequence, content));

        if let Err(error) = &result {
            tracing::warn!(sequence, %error, "Generation event failed");
        }

        self.evict(sequence)?;
        result
    }

    fn persist(&self, sequence: u64, content: String) -> Result<GeneratedArtifact, SessionError> {
        let path = self.artifact_path(sequence);
        fs::write(&path, &content).map_err(|e| SessionError::io(&path, e))?;
        tracing::debug!(sequence, bytes = content.len(), "Artifact written");

        Ok(GeneratedArtifact {
            sequence_number: sequence,
            seed: self.seed.clone(),
            content,
            path,
        })
    }

    fn evict(&self, sequence: u64) -> Result<(), SessionError> {
        let Some(evictee) = self.retention.evictee(sequence) else {
            return Ok(());
        };
        let path = self.artifact_path(evictee);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(evictee, "Evictee absent, nothing to delete");
                Ok(())
            }
            Err(e) => Err(SessionError::io(path, e)),
        }
    }

    /// End the session
    ///
    /// # Errors
    /// [`SessionError::IllegalTransition`] if already stopped
    pub fn stop(&mut self) -> Result<(), SessionError> {
        self.transition(SessionState::Stopped)?;
        tracing::info!(seed = %self.seed, generated = self.counter, "Session stopped");
        Ok(())
    }

    fn transition(&mut self, to: SessionState) -> Result<(), SessionError> {
        validate_transition(self.state, to)?;
        self.state = to;
        Ok(())
    }

    /// Path of artifact `sequence` (whether or not it still exists)
    #[must_use]
    pub fn artifact_path(&self, sequence: u64) -> PathBuf {
        self.directory.join(format!("{}.{sequence}.html", self.seed))
    }

    /// Session seed
    #[inline]
    #[must_use]
    pub fn seed(&self) -> &SessionSeed {
        &self.seed
    }

    /// Session output directory
    #[inline]
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Last consumed sequence number
    #[inline]
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.counter
    }

    /// Lifecycle state
    #[inline]
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Retention policy
    #[inline]
    #[must_use]
    pub fn retention(&self) -> RetentionPolicy {
        self.retention
    }
}
