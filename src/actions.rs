//! Export actions for a chat session.
//!
//! This is the glue between user-triggered export actions and the pure
//! formatters: each handler runs its guard first, invokes a formatter only
//! when the guard passes, performs its side effect, and reports exactly one
//! notification. Store state arrives as an injected read-only
//! [`SessionContext`] rather than being read from ambient globals, and the
//! open/closed menu flag is plain local state.

use std::path::PathBuf;

use chrono::Utc;
use tracing::debug;

use crate::download::download_as_file;
use crate::export::{
    export_chat_to_markdown, export_prompts_for_llm, generate_shareable_link, markdown_filename,
    prompts_filename, ExportError, Provider, ShareMode,
};
use crate::session::Message;

/// User-visible feedback channel for export actions.
///
/// The only status surface the actions have; implementations decide how a
/// notification is rendered (stderr, toast, test recording).
pub trait Notifier {
    /// Report a completed action.
    fn success(&self, message: &str);
    /// Report a failed action.
    fn error(&self, message: &str);
}

/// Notifier that writes to stderr, for CLI use.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn success(&self, message: &str) {
        eprintln!("✓ {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}

/// Destination for clipboard copies.
///
/// A seam over [`crate::clipboard::copy_to_clipboard`] so tests can pin the
/// copy result without a display server.
#[allow(async_fn_in_trait)]
pub trait ClipboardTarget {
    /// Copy text, returning whether the write landed.
    async fn copy(&self, text: &str) -> bool;
}

/// The real system clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardTarget for SystemClipboard {
    async fn copy(&self, text: &str) -> bool {
        crate::clipboard::copy_to_clipboard(text).await
    }
}

/// Read-only store state injected into the export actions.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// The ordered message history of the active session.
    pub messages: Vec<Message>,
    /// Base URL of the endpoint the session lives on.
    pub selected_endpoint: String,
    /// Whether the session belongs to an agent or a team.
    pub mode: ShareMode,
    /// Active agent id, if any.
    pub agent_id: Option<String>,
    /// Active team id, if any.
    pub team_id: Option<String>,
}

impl SessionContext {
    /// The owning entity id for the current mode: the agent id in agent
    /// mode, the team id in team mode.
    pub fn entity_id(&self) -> Option<&str> {
        match self.mode {
            ShareMode::Agent => self.agent_id.as_deref(),
            ShareMode::Team => self.team_id.as_deref(),
        }
    }

    /// The message history, or the empty-transcript guard error.
    pub fn require_messages(&self) -> Result<&[Message], ExportError> {
        if self.messages.is_empty() {
            Err(ExportError::EmptyTranscript)
        } else {
            Ok(&self.messages)
        }
    }

    /// The owning entity id, or the missing-entity guard error.
    pub fn require_entity(&self) -> Result<&str, ExportError> {
        self.entity_id().ok_or(ExportError::MissingEntity)
    }
}

/// The export menu for one session row.
///
/// Owns the transient open/closed flag and wires the four export actions
/// to the formatters. Every handler leaves the menu closed.
pub struct ExportMenu<N: Notifier, C: ClipboardTarget> {
    session_id: String,
    session_name: String,
    context: SessionContext,
    notifier: N,
    clipboard: C,
    download_dir: PathBuf,
    is_open: bool,
}

impl<N: Notifier, C: ClipboardTarget> ExportMenu<N, C> {
    /// Create a menu for the given session.
    pub fn new(
        session_id: impl Into<String>,
        session_name: impl Into<String>,
        context: SessionContext,
        notifier: N,
        clipboard: C,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            session_name: session_name.into(),
            context,
            notifier,
            clipboard,
            download_dir: PathBuf::from("."),
            is_open: false,
        }
    }

    /// Set the directory exported files are saved into.
    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    /// Override the display name used for transcript titles and filenames.
    pub fn with_session_name(mut self, name: impl Into<String>) -> Self {
        self.session_name = name.into();
        self
    }

    /// Open the menu.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Whether the menu is currently open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Abort an action on a failed guard: log, notify, close the menu.
    fn abort(&mut self, err: ExportError, message: &str) {
        debug!(session = %self.session_id, error = %err, "export action aborted");
        self.notifier.error(message);
        self.is_open = false;
    }

    /// Export the session as a markdown file.
    pub fn export_markdown(&mut self) {
        let markdown = match self.context.require_messages() {
            Ok(messages) => export_chat_to_markdown(messages, &self.session_name),
            Err(e) => return self.abort(e, "No messages to export"),
        };

        debug!(session = %self.session_id, "exporting markdown transcript");
        let filename = markdown_filename(&self.session_name, Utc::now());
        download_as_file(&markdown, &self.download_dir.join(filename));

        self.notifier.success("Chat exported as Markdown");
        self.is_open = false;
    }

    /// Export the session as a prompt bundle for the given provider.
    pub fn export_prompts(&mut self, provider: Provider) {
        let prompts = match self.context.require_messages() {
            Ok(messages) => export_prompts_for_llm(messages, provider),
            Err(e) => return self.abort(e, "No messages to export"),
        };

        debug!(session = %self.session_id, %provider, "exporting prompt bundle");
        let filename = prompts_filename(provider, Utc::now());
        download_as_file(&prompts, &self.download_dir.join(filename));

        self.notifier
            .success(&format!("Prompts exported for {}", provider.tag().to_uppercase()));
        self.is_open = false;
    }

    /// Copy a share link for the session to the clipboard.
    pub async fn copy_share_link(&mut self) {
        let link = match self.context.require_entity() {
            Ok(entity_id) => generate_shareable_link(
                &self.session_id,
                entity_id,
                self.context.mode,
                &self.context.selected_endpoint,
            ),
            Err(e) => return self.abort(e, "No agent or team selected"),
        };

        debug!(session = %self.session_id, mode = %self.context.mode, "copying share link");
        if self.clipboard.copy(&link).await {
            self.notifier.success("Share link copied to clipboard");
        } else {
            self.notifier.error("Failed to copy link");
        }
        self.is_open = false;
    }

    /// Copy the session transcript to the clipboard as markdown.
    pub async fn copy_messages(&mut self) {
        let markdown = match self.context.require_messages() {
            Ok(messages) => export_chat_to_markdown(messages, &self.session_name),
            Err(e) => return self.abort(e, "No messages to copy"),
        };

        debug!(session = %self.session_id, "copying transcript to clipboard");
        if self.clipboard.copy(&markdown).await {
            self.notifier.success("Messages copied to clipboard");
        } else {
            self.notifier.error("Failed to copy messages");
        }
        self.is_open = false;
    }
}
