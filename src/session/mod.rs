//! Chat session model and loading.
//!
//! Defines the [`Session`]/[`Message`] types the export formatters consume
//! and a JSONL loader for reading sessions from disk.

mod error;
mod jsonl;
mod types;

pub use error::ParseError;
pub use jsonl::{can_load, load_session};
pub use types::{Message, Role, Session};
