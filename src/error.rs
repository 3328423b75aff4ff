use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unknown category: {category}")]
    UnknownCategory { category: String },

    #[error("Unknown command '{command}' in category '{category}'")]
    UnknownCommand { category: String, command: String },

    #[error("Unknown command: {input}")]
    UnknownShortcut { input: String },

    #[error("Script not found: {}", path.display())]
    ScriptNotFound { path: PathBuf },

    #[error("Failed to run {script}: {source}")]
    Spawn {
        script: String,
        source: std::io::Error,
    },

    #[error("Failed to read session data: {0}")]
    SessionRead(std::io::Error),

    #[error("{0}")]
    SessionDecode(#[from] serde_json::Error),
}

/// A capability could not produce a value (missing binary, timeout, not a repo, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unavailable")]
pub(crate) struct Unavailable;
