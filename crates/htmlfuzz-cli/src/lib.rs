//! htmlfuzz command-line tools
//!
//! Shared plumbing for the `htmlfuzz`, `htmlgen`, `htmlharness` and
//! `htmlscan` binaries: argument definitions, tracing setup and the warp
//! delivery routes.

#![warn(missing_docs)]

pub mod args;
pub mod server;
pub mod telemetry;

pub use server::{generation_routes, replay_routes, serve};
