use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use outbox::actions::{ExportMenu, SessionContext, StderrNotifier, SystemClipboard};
use outbox::config::{format_config, Config};
use outbox::export::{Provider, ShareMode};
use outbox::logging::{init_logging, LogConfig, Verbosity};
use outbox::session::{load_session, Session};

#[derive(Parser)]
#[command(name = "outbox")]
#[command(version)]
#[command(about = "Export and share AI chat sessions")]
#[command(
    long_about = "A CLI tool for exporting AI chat sessions as Markdown transcripts or provider-specific prompt bundles, and for copying transcripts and share links to the clipboard."
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to the given file
    #[arg(long, global = true)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a session file as a Markdown transcript
    Markdown {
        /// Path to the session file (JSONL)
        file: PathBuf,

        /// Title for the transcript (default: session name)
        #[arg(short, long)]
        title: Option<String>,

        /// Directory to save the export into
        #[arg(short, long)]
        out_dir: Option<String>,
    },
    /// Export a session file as a prompt bundle for an LLM provider
    Prompts {
        /// Path to the session file (JSONL)
        file: PathBuf,

        /// Target provider: claude, openai, gemini, or mistral
        #[arg(short, long)]
        provider: Option<String>,

        /// Directory to save the export into
        #[arg(short, long)]
        out_dir: Option<String>,
    },
    /// Copy a shareable link for a session to the clipboard
    Link {
        /// Path to the session file (JSONL)
        file: PathBuf,

        /// Agent id owning the session (selects agent mode)
        #[arg(long, conflicts_with = "team")]
        agent: Option<String>,

        /// Team id owning the session (selects team mode)
        #[arg(long)]
        team: Option<String>,

        /// Endpoint base URL for the link
        #[arg(short, long)]
        endpoint: Option<String>,
    },
    /// Copy a session transcript to the clipboard as Markdown
    Copy {
        /// Path to the session file (JSONL)
        file: PathBuf,
    },
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Key to set: endpoint, mode, agent-id, team-id, default-provider, download-dir
        key: String,
        /// The new value
        value: String,
    },
}

/// Load and validate a session file.
fn load_session_file(path: &Path) -> Result<Session> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    load_session(path).with_context(|| format!("Failed to load session file: {}", path.display()))
}

/// Build the injected store context from a session plus config and flags.
fn build_context(
    session: &Session,
    config: &Config,
    cli_endpoint: Option<&str>,
    cli_agent: Option<String>,
    cli_team: Option<String>,
) -> Result<SessionContext> {
    // An explicit --agent or --team flag selects the mode; otherwise the
    // configured mode applies with the configured entity ids.
    let mode = if cli_agent.is_some() {
        ShareMode::Agent
    } else if cli_team.is_some() {
        ShareMode::Team
    } else {
        config.effective_mode(None).parse::<ShareMode>()?
    };

    Ok(SessionContext {
        messages: session.messages.clone(),
        selected_endpoint: config.effective_endpoint(cli_endpoint),
        mode,
        agent_id: cli_agent.or_else(|| config.agent_id.clone()),
        team_id: cli_team.or_else(|| config.team_id.clone()),
    })
}

/// Construct the export menu for a loaded session.
fn build_menu(
    session: &Session,
    context: SessionContext,
    download_dir: PathBuf,
) -> ExportMenu<StderrNotifier, SystemClipboard> {
    ExportMenu::new(
        session.id.clone(),
        session.name.clone(),
        context,
        StderrNotifier,
        SystemClipboard,
    )
    .with_download_dir(download_dir)
}

/// Resolve the provider tag from the CLI or config.
fn resolve_provider(cli_provider: Option<&str>, config: &Config) -> Result<Provider> {
    let tag = cli_provider
        .map(String::from)
        .or_else(|| config.default_provider.clone())
        .context("No provider given; pass --provider or set default_provider in the config")?;

    Ok(tag.parse::<Provider>()?)
}

/// Apply a `config set` change.
fn apply_config_set(config: &mut Config, key: &str, value: String) -> Result<()> {
    match key {
        "endpoint" => config.endpoint = Some(value),
        "mode" => {
            // Validate before storing.
            value.parse::<ShareMode>()?;
            config.mode = Some(value);
        }
        "agent-id" => config.agent_id = Some(value),
        "team-id" => config.team_id = Some(value),
        "default-provider" => {
            value.parse::<Provider>()?;
            config.default_provider = Some(value);
        }
        "download-dir" => config.download_dir = Some(value),
        other => anyhow::bail!(
            "Unknown config key: {} (expected endpoint, mode, agent-id, team-id, default-provider, or download-dir)",
            other
        ),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig {
        verbosity: Verbosity::from_flag_count(cli.verbose),
        log_file: cli.log_file.clone(),
    };
    let _log_guard = init_logging(&log_config);

    let config = Config::load().unwrap_or_default();

    match cli.command {
        Commands::Markdown {
            file,
            title,
            out_dir,
        } => {
            let session = load_session_file(&file)?;
            let context = build_context(&session, &config, None, None, None)?;
            let download_dir = config.effective_download_dir(out_dir.as_deref());

            let mut menu = build_menu(&session, context, download_dir);
            if let Some(title) = title {
                menu = menu.with_session_name(title);
            }
            menu.export_markdown();
        }
        Commands::Prompts {
            file,
            provider,
            out_dir,
        } => {
            let provider = resolve_provider(provider.as_deref(), &config)?;
            let session = load_session_file(&file)?;
            let context = build_context(&session, &config, None, None, None)?;
            let download_dir = config.effective_download_dir(out_dir.as_deref());

            let mut menu = build_menu(&session, context, download_dir);
            menu.export_prompts(provider);
        }
        Commands::Link {
            file,
            agent,
            team,
            endpoint,
        } => {
            let session = load_session_file(&file)?;
            let context = build_context(&session, &config, endpoint.as_deref(), agent, team)?;

            let mut menu = build_menu(&session, context, PathBuf::from("."));
            menu.copy_share_link().await;
        }
        Commands::Copy { file } => {
            let session = load_session_file(&file)?;
            let context = build_context(&session, &config, None, None, None)?;

            let mut menu = build_menu(&session, context, PathBuf::from("."));
            menu.copy_messages().await;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("{}", format_config(&config));
            }
            ConfigAction::Set { key, value } => {
                let mut config = config;
                apply_config_set(&mut config, &key, value)?;
                config.save().context("Failed to save configuration")?;
                println!("Updated {}", key);
            }
        },
    }

    Ok(())
}
