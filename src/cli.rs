//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **compose**: Interactive recipient field (default)
//! - **suggest**: Print the suggestions for a draft
//! - **validate**: Check addresses with the same format check as the field
//! - **config**: Show or change stored settings
//!
//! Compose flags may be given without the subcommand name, so
//! `recipients --print` and `recipients compose --print` are equivalent.
//!
//! # Examples
//!
//! ```
//! use recipients::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["recipients", "suggest", "al", "--exclude", "alice@x.com"]);
//! match cli.get_command() {
//!     Commands::Suggest { draft, exclude } => {
//!         assert_eq!(draft, "al");
//!         assert_eq!(exclude, vec!["alice@x.com".to_string()]);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "recipients")]
#[command(about = "Collect email recipients with autocomplete", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub compose: ComposeArgs,

    /// Candidate list JSON file (overrides config)
    #[arg(long = "candidates", value_name = "FILE", global = true)]
    pub candidates: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Write diagnostic logs to this file (overrides config)
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Options for the interactive field
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeArgs {
    /// Print the recipients to stdout, one per line, when done
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Only print recipients that passed validation
    #[arg(long = "valid-only", requires = "print")]
    pub valid_only: bool,

    /// Start with these recipients already added
    #[arg(short = 't', long = "to", value_name = "EMAIL", num_args = 1..)]
    pub to: Vec<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive recipient field (default)
    #[command(visible_alias = "c")]
    Compose(ComposeArgs),

    /// Print the suggestions the field would show for a draft
    #[command(visible_alias = "s")]
    Suggest {
        /// Text typed so far (empty matches everything)
        #[arg(value_name = "DRAFT", default_value = "")]
        draft: String,

        /// Treat these addresses as already added
        #[arg(short = 'e', long = "exclude", value_name = "EMAIL", num_args = 1..)]
        exclude: Vec<String>,
    },

    /// Check email addresses and report which are valid
    #[command(visible_alias = "v")]
    Validate {
        /// Addresses to check
        #[arg(value_name = "EMAIL", required = true)]
        emails: Vec<String>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., theme=light)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Compose with the top-level flags
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Compose(self.compose.clone()))
    }
}
