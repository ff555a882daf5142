//! Export formatters for chat sessions.
//!
//! Pure functions that transform a message sequence into a markdown
//! transcript, a provider-specific prompt bundle, or a shareable link.
//! Nothing here performs I/O; side effects live in the clipboard and
//! download modules.

mod error;
mod link;
mod markdown;
mod prompts;

pub use error::ExportError;
pub use link::{generate_shareable_link, ShareMode};
pub use markdown::{export_chat_to_markdown, markdown_filename};
pub use prompts::{export_prompts_for_llm, prompts_filename, Provider};
