//! Provider-specific prompt bundle formatting.
//!
//! Each supported LLM provider has its own conversational input
//! conventions; the formatter here re-renders a message sequence to match
//! the target provider's delimiter style. The provider set is a closed
//! enum so a new variant forces every match below to be extended.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::session::{Message, Role};

use super::ExportError;

/// A supported LLM provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Claude,
    OpenAi,
    Gemini,
    Mistral,
}

impl Provider {
    /// All supported providers, in menu order.
    pub const ALL: [Provider; 4] = [
        Provider::Claude,
        Provider::OpenAi,
        Provider::Gemini,
        Provider::Mistral,
    ];

    /// The lowercase tag used in filenames and on the command line.
    pub fn tag(&self) -> &'static str {
        match self {
            Provider::Claude => "claude",
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
            Provider::Mistral => "mistral",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Provider {
    type Err = ExportError;

    /// Parse a provider tag. Unknown tags fail closed rather than falling
    /// back to a default format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claude" => Ok(Provider::Claude),
            "openai" => Ok(Provider::OpenAi),
            "gemini" => Ok(Provider::Gemini),
            "mistral" => Ok(Provider::Mistral),
            other => Err(ExportError::UnknownProvider(other.to_string())),
        }
    }
}

/// Format a message sequence as a prompt bundle for the given provider.
///
/// Output is structurally distinguishable per provider: Claude gets
/// `Human:`/`Assistant:` turns, OpenAI a JSON message array, Gemini
/// `user:`/`model:` role lines, and Mistral `[INST]` instruction blocks.
pub fn export_prompts_for_llm(messages: &[Message], provider: Provider) -> String {
    match provider {
        Provider::Claude => format_claude(messages),
        Provider::OpenAi => format_openai(messages),
        Provider::Gemini => format_gemini(messages),
        Provider::Mistral => format_mistral(messages),
    }
}

/// Build the download filename for a prompt bundle:
/// `prompts_<provider>_<unix millis>.md`.
pub fn prompts_filename(provider: Provider, now: DateTime<Utc>) -> String {
    format!("prompts_{}_{}.md", provider.tag(), now.timestamp_millis())
}

/// Anthropic-style `Human:`/`Assistant:` turn prefixes. System messages
/// lead the bundle without a turn prefix.
fn format_claude(messages: &[Message]) -> String {
    let mut output = String::new();
    for message in messages {
        match message.role {
            Role::System => {
                output.push_str(&message.content);
                output.push('\n');
            }
            Role::User => {
                output.push_str("\nHuman: ");
                output.push_str(&message.content);
                output.push('\n');
            }
            Role::Assistant => {
                output.push_str("\nAssistant: ");
                output.push_str(&message.content);
                output.push('\n');
            }
        }
    }
    output
}

/// OpenAI chat-completions style: a JSON array of role/content objects.
fn format_openai(messages: &[Message]) -> String {
    let entries: Vec<serde_json::Value> = messages
        .iter()
        .map(|m| {
            let role = match m.role {
                Role::User => "user",
                Role::Assistant => "assistant",
                Role::System => "system",
            };
            json!({ "role": role, "content": m.content })
        })
        .collect();

    // Serialization of string/array values cannot fail.
    serde_json::to_string_pretty(&entries).unwrap_or_default()
}

/// Gemini-style role lines; the assistant role is called `model`.
fn format_gemini(messages: &[Message]) -> String {
    let mut output = String::new();
    for message in messages {
        let role = match message.role {
            Role::User => "user",
            Role::Assistant => "model",
            Role::System => "system",
        };
        output.push_str(&format!("{}: {}\n\n", role, message.content));
    }
    output
}

/// Mistral instruction format: user turns wrapped in `[INST]` blocks,
/// assistant turns closing the sequence with `</s>`.
fn format_mistral(messages: &[Message]) -> String {
    let mut output = String::new();
    for message in messages {
        match message.role {
            Role::User | Role::System => {
                output.push_str(&format!("<s>[INST] {} [/INST]", message.content));
            }
            Role::Assistant => {
                output.push_str(&format!(" {}</s>\n", message.content));
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn sample_messages() -> Vec<Message> {
        vec![Message::user("Hi"), Message::assistant("Hello")]
    }

    #[test]
    fn test_provider_from_str_known_tags() {
        assert_eq!("claude".parse::<Provider>().unwrap(), Provider::Claude);
        assert_eq!("openai".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!("gemini".parse::<Provider>().unwrap(), Provider::Gemini);
        assert_eq!("mistral".parse::<Provider>().unwrap(), Provider::Mistral);
    }

    #[test]
    fn test_provider_from_str_unknown_fails_closed() {
        let err = "grok".parse::<Provider>().unwrap_err();
        assert_eq!(err, ExportError::UnknownProvider("grok".to_string()));
    }

    #[test]
    fn test_provider_tag_roundtrip() {
        for provider in Provider::ALL {
            assert_eq!(provider.tag().parse::<Provider>().unwrap(), provider);
        }
    }

    #[test]
    fn test_all_providers_produce_nonempty_output() {
        let messages = sample_messages();
        for provider in Provider::ALL {
            let output = export_prompts_for_llm(&messages, provider);
            assert!(!output.is_empty(), "{provider} produced empty output");
            assert!(output.contains("Hi"), "{provider} dropped user content");
            assert!(output.contains("Hello"), "{provider} dropped assistant content");
        }
    }

    #[test]
    fn test_providers_are_pairwise_distinguishable() {
        let messages = sample_messages();
        let outputs: HashSet<String> = Provider::ALL
            .iter()
            .map(|p| export_prompts_for_llm(&messages, *p))
            .collect();
        assert_eq!(outputs.len(), Provider::ALL.len());
    }

    #[test]
    fn test_claude_uses_turn_prefixes() {
        let output = export_prompts_for_llm(&sample_messages(), Provider::Claude);
        assert!(output.contains("Human: Hi"));
        assert!(output.contains("Assistant: Hello"));
    }

    #[test]
    fn test_openai_is_json_message_array() {
        let output = export_prompts_for_llm(&sample_messages(), Provider::OpenAi);
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["role"], "user");
        assert_eq!(parsed[0]["content"], "Hi");
        assert_eq!(parsed[1]["role"], "assistant");
    }

    #[test]
    fn test_openai_differs_from_claude_in_delimiters() {
        let messages = sample_messages();
        let openai = export_prompts_for_llm(&messages, Provider::OpenAi);
        let claude = export_prompts_for_llm(&messages, Provider::Claude);

        assert!(openai.starts_with('['));
        assert!(!claude.starts_with('['));
        assert!(claude.contains("Human:"));
        assert!(!openai.contains("Human:"));
    }

    #[test]
    fn test_gemini_renames_assistant_to_model() {
        let output = export_prompts_for_llm(&sample_messages(), Provider::Gemini);
        assert!(output.contains("user: Hi"));
        assert!(output.contains("model: Hello"));
        assert!(!output.contains("assistant"));
    }

    #[test]
    fn test_mistral_uses_inst_blocks() {
        let output = export_prompts_for_llm(&sample_messages(), Provider::Mistral);
        assert!(output.contains("[INST] Hi [/INST]"));
        assert!(output.contains("Hello</s>"));
    }

    #[test]
    fn test_system_message_included_everywhere() {
        let messages = vec![Message::system("Be terse"), Message::user("Hi")];
        for provider in Provider::ALL {
            let output = export_prompts_for_llm(&messages, provider);
            assert!(output.contains("Be terse"), "{provider} dropped system prompt");
        }
    }

    #[test]
    fn test_prompts_filename_pattern() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let filename = prompts_filename(Provider::Gemini, now);

        assert!(filename.starts_with("prompts_gemini_"));
        assert!(filename.ends_with(".md"));
    }
}
