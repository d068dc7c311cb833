//! Session seeds
//!
//! A seed is the decimal text `secs[.fraction]`. The text itself names the
//! session directory, and its SHA-256 digest seeds the session RNG, so the
//! same text always reproduces the same document sequence.

use crate::error::ConfigError;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Reproducibility seed of a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionSeed(String);

impl SessionSeed {
    /// Current wall-clock time with microsecond precision
    #[must_use]
    pub fn now() -> Self {
        let now = Utc::now();
        Self(format!("{}.{:06}", now.timestamp(), now.timestamp_subsec_micros()))
    }

    /// Seed text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fresh RNG positioned at the start of this seed's stream
    #[must_use]
    pub fn rng(&self) -> StdRng {
        let digest: [u8; 32] = Sha256::digest(self.0.as_bytes()).into();
        StdRng::from_seed(digest)
    }
}

impl FromStr for SessionSeed {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (secs, fraction) = match s.split_once('.') {
            Some((secs, fraction)) => (secs, Some(fraction)),
            None => (s, None),
        };
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        if digits(secs) && fraction.map_or(true, digits) {
            Ok(Self(s.to_string()))
        } else {
            Err(ConfigError::InvalidSeed(s.to_string()))
        }
    }
}

impl Display for SessionSeed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
