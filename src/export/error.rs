//! Error types for export operations.

use thiserror::Error;

/// Errors surfaced by the export layer.
///
/// These are guard failures, not formatter failures: the formatters
/// themselves are total functions over their inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The session has no messages to export or copy.
    #[error("no messages to export")]
    EmptyTranscript,

    /// A share link was requested with no active agent or team.
    #[error("no agent or team selected")]
    MissingEntity,

    /// A provider tag outside the supported set.
    #[error("unknown provider: {0} (expected claude, openai, gemini, or mistral)")]
    UnknownProvider(String),

    /// A share mode outside agent/team.
    #[error("unknown mode: {0} (expected agent or team)")]
    UnknownMode(String),
}
