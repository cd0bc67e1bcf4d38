//! Recipients CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Open the interactive field (default command)
//! recipients
//! recipients compose
//!
//! # Print what was entered, for use in scripts
//! recipients --print --valid-only > to.txt
//!
//! # Start with some recipients already added
//! recipients --to alice@example.com --to bob@example.com --print
//!
//! # Non-interactive helpers
//! recipients suggest al --exclude alice@example.com
//! recipients validate alice@example.com not-an-email
//!
//! # Use another candidate list
//! recipients --candidates team.json
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/recipients/config.toml` on Linux) and are created with
//! defaults on first run.

use recipients::{
    RecipientsError, Result,
    candidates::CandidateList,
    cli::{Cli, Commands, ComposeArgs, ConfigCommands},
    composer::{Composer, Visibility},
    config::{KEYS, RecipientsConfig},
    email::Email,
    suggest::suggest,
    tags::TagStore,
    ui::output::{OutputWriter, StdoutWriter},
    ui::ratatui_adapter::{RecipientSession, Theme},
};
use std::fs::OpenOptions;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Send tracing output to `path`
///
/// The terminal belongs to the interactive field, so logs only go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("recipients=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn handle_compose_command(
    args: &ComposeArgs,
    candidates: CandidateList,
    theme: Theme,
    output: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let composer = Composer::new(candidates).with_tags(&args.to);
    let tags = RecipientSession::new(theme).run(composer)?;

    if args.print {
        tags.iter()
            .filter(|email| email.is_valid || !args.valid_only)
            .for_each(|email| output.write(&email.text));
        return Ok(());
    }

    if !quiet {
        print_summary(&tags, output);
    }
    Ok(())
}

fn print_summary(tags: &TagStore, output: &dyn OutputWriter) {
    if tags.is_empty() {
        output.info("No recipients");
        return;
    }
    for email in tags {
        if email.is_valid {
            output.success(&email.text);
        } else {
            output.warning(&format!("{} (not a valid email address)", email.text));
        }
    }
}

fn handle_suggest_command(
    draft: &str,
    exclude: &[String],
    candidates: &CandidateList,
    output: &dyn OutputWriter,
    quiet: bool,
) {
    let mut tags = TagStore::new();
    for text in exclude {
        tags.commit(text);
    }

    let found = suggest(draft, &tags, candidates.as_slice(), Visibility::Expanded);
    debug!(draft, count = found.len(), "suggest command");

    if found.is_empty() && !quiet {
        output.info("No matching addresses");
    }
    for email in &found {
        output.write(&email.text);
    }
}

fn handle_validate_command(
    emails: &[String],
    output: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let mut invalid = 0;
    for text in emails {
        let email = Email::new(text.as_str());
        if email.is_valid {
            if !quiet {
                output.success(&email.text);
            }
        } else {
            invalid += 1;
            output.error(&format!("{}: not a valid email address", email.text));
        }
    }

    if invalid > 0 {
        return Err(RecipientsError::InvalidAddresses(invalid));
    }
    Ok(())
}

fn handle_config_command(
    mut config: RecipientsConfig,
    command: &ConfigCommands,
    output: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            output.write(&RecipientsConfig::config_path()?.display().to_string());
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                RecipientsError::InvalidInput(
                    "Invalid format. Use: recipients config set key=value".into(),
                )
            })?;
            let (key, value) = (key.trim(), value.trim());

            config.set(key, value).map_err(|e| match e {
                ::config::ConfigError::NotFound(_) => unknown_key(key),
                other => other.into(),
            })?;
            config.save()?;
            if !quiet {
                output.success(&format!("Set {key} = {value}"));
            }
        }
        ConfigCommands::Get { key } => {
            let value = config.get(key).map_err(|_| unknown_key(key))?;
            output.write(&value);
        }
    }
    Ok(())
}

fn unknown_key(key: &str) -> RecipientsError {
    RecipientsError::InvalidInput(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}

/// Loads configuration, parses arguments and dispatches to a command handler
fn run() -> Result<()> {
    let config = RecipientsConfig::load()?;
    let cli = Cli::parse_args();

    if let Some(path) = cli.log_file.as_ref().or(config.log_file.as_ref()) {
        init_logging(path)?;
    }

    let quiet = cli.quiet || config.quiet;
    let output = StdoutWriter::new();
    let command = cli.get_command();
    debug!(?command, quiet, "starting");

    let candidates_path = cli.candidates.as_deref().or(config.candidates.as_deref());
    let load_candidates = || -> Result<CandidateList> {
        let candidates = CandidateList::resolve(candidates_path)?;
        info!(count = candidates.len(), "candidates loaded");
        Ok(candidates)
    };

    match &command {
        Commands::Compose(args) => {
            let theme = Theme::from(config.theme);
            handle_compose_command(args, load_candidates()?, theme, &output, quiet)
        }
        Commands::Suggest { draft, exclude } => {
            handle_suggest_command(draft, exclude, &load_candidates()?, &output, quiet);
            Ok(())
        }
        Commands::Validate { emails } => handle_validate_command(emails, &output, quiet),
        Commands::Config { command } => handle_config_command(config, command, &output, quiet),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(RecipientsError::InvalidAddresses(_)) => ExitCode::FAILURE,
        Err(e) => {
            StdoutWriter::new().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
