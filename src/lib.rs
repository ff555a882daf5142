//! outbox — export and share AI chat sessions.
//!
//! The crate is split into a pure formatting core and thin side-effect
//! wrappers around it:
//!
//! - [`session`]: the `Session`/`Message` data model and JSONL loader.
//! - [`export`]: pure formatters — markdown transcripts, provider prompt
//!   bundles, share links, and the export filename conventions.
//! - [`clipboard`] / [`download`]: the two side effects an export can have.
//! - [`actions`]: the export menu glue wiring guards, formatters, side
//!   effects, and user notifications together.
//! - [`config`] / [`logging`]: TOML configuration and tracing setup.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod download;
pub mod export;
pub mod logging;
pub mod session;
