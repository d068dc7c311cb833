//! htmlfuzz Sessions
//!
//! Everything that turns grammar output into files on disk, or files on
//! disk into served pages.
//!
//! - [`Session`]: seeded generation with sliding-window retention
//! - [`generate_corpus`]: batch generation of `page{i}.html` files
//! - [`ReplayHarness`]: ordered replay of an existing corpus with a
//!   progress log

#![warn(missing_docs)]

pub mod corpus;
pub mod error;
pub mod replay;
pub mod retention;
pub mod seed;
pub mod session;
pub mod state;

pub use corpus::{generate_corpus, page_file_name, MAX_PAGE_ATTEMPTS};
pub use error::{ConfigError, ReplayError, SessionError};
pub use replay::{
    log_file_name, ReplayHarness, ReplayOptions, ReplayPage, COMPLETED_PAGE, REFRESH_PREFIX,
};
pub use retention::{RetentionPolicy, DEFAULT_RETENTION_WINDOW};
pub use seed::SessionSeed;
pub use session::{GeneratedArtifact, Session, SessionConfig};
pub use state::SessionState;
