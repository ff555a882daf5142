//! Integration tests for the load-then-export pipeline.

use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use outbox::export::{
    export_chat_to_markdown, export_prompts_for_llm, generate_shareable_link, markdown_filename,
    prompts_filename, Provider, ShareMode,
};
use outbox::session::{load_session, Message, Role};

fn write_sample_session(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("demo.jsonl");
    fs::write(
        &path,
        concat!(
            "{\"session_id\":\"sess-1\",\"session_name\":\"Demo\"}\n",
            "{\"role\":\"system\",\"content\":\"Be helpful\"}\n",
            "{\"role\":\"user\",\"content\":\"Hi\"}\n",
            "{\"role\":\"assistant\",\"content\":\"Hello\"}\n",
        ),
    )
    .unwrap();
    path
}

#[test]
fn test_load_and_export_markdown() {
    let dir = TempDir::new().unwrap();
    let path = write_sample_session(&dir);

    let session = load_session(&path).expect("Failed to load sample session");
    assert_eq!(session.id, "sess-1");
    assert_eq!(session.name, "Demo");
    assert_eq!(session.messages.len(), 3);

    let markdown = export_chat_to_markdown(&session.messages, &session.name);

    // Title and every message exactly once, in original order.
    assert_eq!(markdown.matches("Demo").count(), 1);
    assert_eq!(markdown.matches("Hi").count(), 1);
    assert_eq!(markdown.matches("Hello").count(), 1);

    let title_pos = markdown.find("Demo").unwrap();
    let hi_pos = markdown.find("Hi").unwrap();
    let hello_pos = markdown.find("Hello").unwrap();
    assert!(title_pos < hi_pos && hi_pos < hello_pos);
}

#[test]
fn test_load_and_export_all_providers() {
    let dir = TempDir::new().unwrap();
    let path = write_sample_session(&dir);
    let session = load_session(&path).unwrap();

    let mut outputs = Vec::new();
    for provider in Provider::ALL {
        let bundle = export_prompts_for_llm(&session.messages, provider);
        assert!(!bundle.is_empty());
        assert!(bundle.contains("Hi"), "{provider} dropped content");
        outputs.push(bundle);
    }

    // No two providers yield identical output for the same messages.
    for i in 0..outputs.len() {
        for j in (i + 1)..outputs.len() {
            assert_ne!(outputs[i], outputs[j]);
        }
    }
}

#[test]
fn test_openai_and_claude_differ_structurally() {
    let messages = vec![Message::user("Hi"), Message::assistant("Hello")];

    let openai = export_prompts_for_llm(&messages, Provider::OpenAi);
    let claude = export_prompts_for_llm(&messages, Provider::Claude);

    // OpenAI is a JSON array; Claude uses turn prefixes.
    assert!(serde_json::from_str::<serde_json::Value>(&openai).is_ok());
    assert!(serde_json::from_str::<serde_json::Value>(&claude).is_err());
    assert!(claude.contains("Human:"));
}

#[test]
fn test_formatters_do_not_mutate_messages() {
    let messages = vec![
        Message::system("Be helpful"),
        Message::user("Hi"),
        Message::assistant("Hello"),
    ];
    let before = messages.clone();

    let _ = export_chat_to_markdown(&messages, "Demo");
    for provider in Provider::ALL {
        let _ = export_prompts_for_llm(&messages, provider);
    }

    assert_eq!(messages, before);
}

#[test]
fn test_share_link_deterministic_across_calls() {
    let inputs = ("sess-1", "agent-42", ShareMode::Agent, "http://localhost:7777");

    let first = generate_shareable_link(inputs.0, inputs.1, inputs.2, inputs.3);
    let second = generate_shareable_link(inputs.0, inputs.1, inputs.2, inputs.3);

    assert_eq!(first, second);
    assert!(first.contains("session=sess-1"));
    assert!(first.contains("agent=agent-42"));
}

#[test]
fn test_filename_conventions() {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let millis = now.timestamp_millis().to_string();

    let transcript = markdown_filename("My Chat!", now);
    assert_eq!(transcript, format!("My_Chat__{}.md", millis));

    let bundle = prompts_filename(Provider::Claude, now);
    assert_eq!(bundle, format!("prompts_claude_{}.md", millis));
}

#[test]
fn test_empty_session_loads_and_formats_minimally() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.jsonl");
    fs::write(&path, "").unwrap();

    let session = load_session(&path).unwrap();
    assert!(session.is_empty());

    // The formatter itself still yields a minimal valid document if called.
    let markdown = export_chat_to_markdown(&session.messages, &session.name);
    assert_eq!(markdown, "# empty\n\n");
}

#[test]
fn test_loaded_roles_map_to_labels() {
    let dir = TempDir::new().unwrap();
    let path = write_sample_session(&dir);
    let session = load_session(&path).unwrap();

    assert_eq!(session.messages[0].role, Role::System);
    assert_eq!(session.messages[1].role, Role::User);
    assert_eq!(session.messages[2].role, Role::Assistant);

    let markdown = export_chat_to_markdown(&session.messages, "Demo");
    assert!(markdown.contains("**System:**"));
    assert!(markdown.contains("**User:**"));
    assert!(markdown.contains("**Assistant:**"));
}
