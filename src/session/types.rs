//! Chat session types shared by the loader and the export formatters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The author of a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A message written by the human user.
    User,
    /// A message produced by the AI assistant.
    Assistant,
    /// A system instruction or framework-injected message.
    System,
}

impl Role {
    /// Human-readable label used in transcript headings.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
            Role::System => "System",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single message within a chat session.
///
/// Messages are owned by the session store and read-only from the
/// exporter's perspective; formatters take `&[Message]` and never mutate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Who authored the message.
    pub role: Role,
    /// The message text.
    pub content: String,
    /// When the message was created, if the source recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Message {
    /// Create a message without a timestamp.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: None,
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Attach a timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A chat session: a stable identifier, a display name, and the ordered
/// message history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Unique identifier for the session.
    pub id: String,
    /// Display name shown to the user and used for export filenames.
    pub name: String,
    /// The messages of the conversation, in original order.
    pub messages: Vec<Message>,
}

impl Session {
    /// Create an empty session with the given id and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            messages: Vec::new(),
        }
    }

    /// Append a message to the session.
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Whether the session has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_session_creation() {
        let session = Session::new("abc-123", "Demo chat");
        assert_eq!(session.id, "abc-123");
        assert_eq!(session.name, "Demo chat");
        assert!(session.is_empty());
    }

    #[test]
    fn test_session_add_message() {
        let mut session = Session::new("abc-123", "Demo chat");
        session.add_message(Message::user("Hello"));
        session.add_message(Message::assistant("Hi there!"));

        assert_eq!(session.messages.len(), 2);
        assert!(!session.is_empty());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "User");
        assert_eq!(Role::Assistant.label(), "Assistant");
        assert_eq!(Role::System.label(), "System");
    }

    #[test]
    fn test_message_builders() {
        let ts = test_timestamp();
        let msg = Message::user("Hi").with_timestamp(ts);

        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hi");
        assert_eq!(msg.timestamp, Some(ts));
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::assistant("Hello").with_timestamp(test_timestamp());

        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();

        assert_eq!(msg, deserialized);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["role"], "assistant");
        assert_eq!(value["content"], "Hello");
    }

    #[test]
    fn test_message_deserializes_without_timestamp() {
        let msg: Message = serde_json::from_str(r#"{"role":"user","content":"Hi"}"#).unwrap();
        assert_eq!(msg.role, Role::User);
        assert!(msg.timestamp.is_none());
    }

    #[test]
    fn test_session_serialization_roundtrip() {
        let mut session = Session::new("session-123", "My chat");
        session.add_message(Message::system("Be helpful"));
        session.add_message(Message::user("Write a function"));
        session.add_message(Message::assistant("Here you go"));

        let json = serde_json::to_string_pretty(&session).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(session, deserialized);
        assert_eq!(deserialized.messages.len(), 3);
    }
}
