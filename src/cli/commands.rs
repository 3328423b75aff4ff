//! CLI subcommand definitions
//!
//! `status`, `selftest` and `list` are handled here; any other word is
//! passed to the dispatcher as `<category> <command> [args]` or a shortcut.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the statusline for a session record read from stdin
    Status(StatusArgs),
    /// Render sample sessions and report which ones pass
    Selftest,
    /// List dispatchable categories and commands
    List {
        /// Only show this category
        category: Option<String>,
    },
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct StatusArgs {
    /// Emit the statusline and its segment values as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Read the session record from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    pub(crate) session_file: Option<PathBuf>,
}

/// `status` options arriving through the dispatcher (`core status --json`)
#[derive(Parser)]
#[command(name = "core status", no_binary_name = true)]
struct PassthroughStatus {
    #[command(flatten)]
    args: StatusArgs,
}

impl StatusArgs {
    pub(crate) fn from_passthrough(args: &[String]) -> Result<Self, clap::Error> {
        PassthroughStatus::try_parse_from(args).map(|p| p.args)
    }
}

impl Commands {
    /// True when this invocation renders a statusline (output must stay a single clean line)
    pub(crate) fn is_statusline(&self) -> bool {
        match self {
            Commands::Status(_) => true,
            Commands::External(argv) => {
                matches!(argv.as_slice(), [category, command, ..] if category == "core" && command == "status")
            }
            _ => false,
        }
    }
}
