//! Shareable link construction.
//!
//! A share link encodes everything a recipient needs to reopen a session:
//! the endpoint it lives on, the session id, the owning entity (agent or
//! team), and the mode flag selecting between the two. Links are built on
//! demand and never persisted.

use std::str::FromStr;

use super::ExportError;

/// Whether a session is owned by an agent or a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareMode {
    Agent,
    Team,
}

impl ShareMode {
    /// The lowercase tag used in URLs and config files.
    pub fn tag(&self) -> &'static str {
        match self {
            ShareMode::Agent => "agent",
            ShareMode::Team => "team",
        }
    }
}

impl std::fmt::Display for ShareMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ShareMode {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agent" => Ok(ShareMode::Agent),
            "team" => Ok(ShareMode::Team),
            other => Err(ExportError::UnknownMode(other.to_string())),
        }
    }
}

/// Build a shareable link for a session.
///
/// Deterministic: the same inputs always yield the same string. The entity
/// id is keyed by the mode tag (`agent=` or `team=`), matching the query
/// parameters the chat UI reads on the receiving end; the key name is the
/// mode's only carrier in the URL. Query values are percent-encoded so ids
/// containing reserved characters stay intact.
///
/// Precondition: `entity_id` is non-empty; the export actions enforce this
/// before calling.
pub fn generate_shareable_link(
    session_id: &str,
    entity_id: &str,
    mode: ShareMode,
    endpoint: &str,
) -> String {
    let base = endpoint.trim_end_matches('/');
    format!(
        "{}/chat?{}={}&session={}",
        base,
        mode.tag(),
        urlencoding::encode(entity_id),
        urlencoding::encode(session_id)
    )
}
