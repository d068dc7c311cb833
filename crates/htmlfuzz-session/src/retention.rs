//! Sliding-window artifact retention

use crate::error::ConfigError;
use std::num::NonZeroU64;

/// Default number of artifacts kept on disk
pub const DEFAULT_RETENTION_WINDOW: u64 = 20;

/// FIFO eviction over sequence numbers
///
/// After artifact `n` is produced, artifact `n - window` is deleted, so at
/// most `window` artifacts (the highest-numbered ones) remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    window: NonZeroU64,
}

impl RetentionPolicy {
    /// Create a policy keeping `window` artifacts
    ///
    /// # Errors
    /// [`ConfigError::ZeroRetention`] when `window` is zero
    pub fn new(window: u64) -> Result<Self, ConfigError> {
        NonZeroU64::new(window)
            .map(|window| Self { window })
            .ok_or(ConfigError::ZeroRetention)
    }

    /// Number of retained artifacts
    #[inline]
    #[must_use]
    pub fn window(&self) -> u64 {
        self.window.get()
    }

    /// Sequence number to delete once `sequence` has been produced
    #[inline]
    #[must_use]
    pub fn evictee(&self, sequence: u64) -> Option<u64> {
        sequence.checked_sub(self.window()).filter(|n| *n > 0)
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            window: NonZeroU64::MIN.saturating_add(DEFAULT_RETENTION_WINDOW - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_twenty() {
        assert_eq!(RetentionPolicy::default().window(), 20);
    }

    #[test]
    fn nothing_evicted_until_window_full() {
        let policy = RetentionPolicy::new(20).unwrap();
        assert_eq!(policy.evictee(1), None);
        assert_eq!(policy.evictee(20), None);
        assert_eq!(policy.evictee(21), Some(1));
        assert_eq!(policy.evictee(100), Some(80));
    }

    #[test]
    fn window_of_one_keeps_latest() {
        let policy = RetentionPolicy::new(1).unwrap();
        assert_eq!(policy.evictee(1), None);
        assert_eq!(policy.evictee(2), Some(1));
    }

    #[test]
    fn zero_window_rejected() {
        assert_eq!(RetentionPolicy::new(0), Err(ConfigError::ZeroRetention));
    }
}
