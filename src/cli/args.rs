//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::Config;
use crate::env::{DEFAULT_GIT_TIMEOUT, GitProbe};

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "claude-statusline")]
#[command(about = "Session statusline and tool dispatcher for Claude Code", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Timezone for the clock segment (e.g. "UTC", "Europe/Berlin"; default: local)
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// JSON file mapping model identifiers to display names
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) model_table: Option<PathBuf>,

    /// Skip git branch/status detection
    #[arg(long, global = true)]
    pub(crate) no_git: bool,

    /// Timeout for each git query in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub(crate) git_timeout_ms: Option<u64>,

    /// Directory containing the report and maintenance scripts
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) tools_dir: Option<PathBuf>,

    /// Program used to run scripts (default: python3)
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub(crate) interpreter: Option<String>,

    /// Disable colored tables
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_git && config.no_git {
            self.no_git = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.model_table.is_none() {
            self.model_table = config.model_table.clone();
        }
        if self.git_timeout_ms.is_none() {
            self.git_timeout_ms = config.git_timeout_ms;
        }
        if self.tools_dir.is_none() {
            self.tools_dir = config.tools_dir.clone();
        }
        if self.interpreter.is_none() {
            self.interpreter = config.interpreter.clone();
        }
        self
    }

    pub(crate) fn is_statusline(&self) -> bool {
        self.command.as_ref().is_some_and(Commands::is_statusline)
    }

    pub(crate) fn git_probe(&self) -> GitProbe {
        let timeout = self
            .git_timeout_ms
            .map_or(DEFAULT_GIT_TIMEOUT, Duration::from_millis);
        GitProbe::new(timeout, !self.no_git)
    }

    pub(crate) fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}
