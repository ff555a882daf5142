//! JSONL chat session loader.
//!
//! Sessions are stored one JSON object per line. Each line is a message
//! (`{"role": "user", "content": "...", "timestamp": "..."}`). The first
//! line may instead be a header object carrying `session_id` and
//! `session_name`; when absent, the id falls back to a fresh UUID and the
//! name to the file stem.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;
use uuid::Uuid;

use super::{Message, ParseError, Session};

/// File extensions recognized as JSONL session files.
const SUPPORTED_EXTENSIONS: &[&str] = &["jsonl", "json"];

/// Check whether the given path looks like a session file this loader
/// understands.
pub fn can_load(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Load a session from a JSONL file.
///
/// Blank lines are skipped. An empty file yields an empty session; the
/// empty-transcript check belongs to the export actions, not the loader.
///
/// # Errors
///
/// Returns a [`ParseError`] if the file cannot be read, has an unsupported
/// extension, or contains a line that is not a valid message.
pub fn load_session(path: &Path) -> Result<Session, ParseError> {
    if !can_load(path) {
        return Err(ParseError::unsupported_format(path));
    }

    let file = File::open(path).map_err(|e| ParseError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut session_id: Option<String> = None;
    let mut session_name: Option<String> = None;
    let mut messages: Vec<Message> = Vec::new();
    let mut first_entry = true;

    for (index, line_result) in reader.lines().enumerate() {
        let line_num = index + 1;
        let line = line_result.map_err(|e| ParseError::io(path, e))?;

        if line.trim().is_empty() {
            continue;
        }

        let value: Value =
            serde_json::from_str(&line).map_err(|e| ParseError::json(line_num, e.to_string()))?;
        let is_first = first_entry;
        first_entry = false;

        if value.get("role").is_none() {
            // Header line: only valid as the first non-blank entry.
            if is_first {
                session_id = value
                    .get("session_id")
                    .and_then(|v| v.as_str())
                    .map(String::from);
                session_name = value
                    .get("session_name")
                    .and_then(|v| v.as_str())
                    .map(String::from);
                if session_id.is_some() || session_name.is_some() {
                    continue;
                }
            }
            return Err(ParseError::invalid_value(
                "role",
                line_num,
                "missing required field",
            ));
        }

        let message: Message = serde_json::from_value(value)
            .map_err(|e| ParseError::json(line_num, e.to_string()))?;
        messages.push(message);
    }

    let id = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());
    let name = session_name.unwrap_or_else(|| file_stem(path));

    let mut session = Session::new(id, name);
    session.messages = messages;
    Ok(session)
}

/// Derive a display name from the file stem, falling back to "session".
fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("session")
        .to_string()
}
