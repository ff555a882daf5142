//! Markdown transcript formatting.
//!
//! Produces a markdown document from a message sequence, suitable for
//! saving to disk or copying to the clipboard. Pure over its input.

use chrono::{DateTime, Utc};

use crate::session::Message;

/// Format a message sequence as a markdown transcript.
///
/// The title becomes the top-level heading, followed by each message with a
/// bold role label and its content, in original order. An empty sequence
/// yields the heading-only document; callers that want to reject empty
/// transcripts check before invoking.
pub fn export_chat_to_markdown(messages: &[Message], title: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", title));

    for message in messages {
        output.push_str(&format!("**{}:**\n\n", message.role.label()));
        output.push_str(&message.content);
        output.push_str("\n\n");

        if let Some(ts) = message.timestamp {
            output.push_str(&format!("*{}*\n\n", ts.format("%Y-%m-%d %H:%M UTC")));
        }
        output.push_str("---\n\n");
    }

    output
}

/// Build the download filename for a markdown transcript.
///
/// Follows the `<sanitized name>_<unix millis>.md` convention: every
/// character outside `[A-Za-z0-9]` in the session name is replaced with an
/// underscore.
pub fn markdown_filename(session_name: &str, now: DateTime<Utc>) -> String {
    format!("{}_{}.md", sanitize_name(session_name), now.timestamp_millis())
}

/// Replace filesystem-hostile characters in a session name.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
