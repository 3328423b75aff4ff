use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::error::AppError;

pub(crate) const DEFAULT_INTERPRETER: &str = "python3";

/// Launches registry scripts as `<interpreter> <tools_dir>/<script> [args]`
#[derive(Debug, Clone)]
pub(crate) struct ScriptRunner {
    interpreter: String,
    tools_dir: PathBuf,
}

impl ScriptRunner {
    pub(crate) fn new(interpreter: Option<String>, tools_dir: Option<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.unwrap_or_else(|| DEFAULT_INTERPRETER.to_string()),
            tools_dir: tools_dir.unwrap_or_else(default_tools_dir),
        }
    }

    /// Run `script` to completion with the tools directory as working directory.
    /// Returns the exit code the dispatcher should exit with.
    pub(crate) fn run(&self, script: &str, args: &[String]) -> Result<i32, AppError> {
        let path = self.tools_dir.join(script);
        if !path.exists() {
            return Err(AppError::ScriptNotFound { path });
        }

        debug!(interpreter = %self.interpreter, script = %path.display(), ?args, "running script");
        let status = Command::new(&self.interpreter)
            .arg(&path)
            .args(args)
            .current_dir(&self.tools_dir)
            .status()
            .map_err(|source| AppError::Spawn {
                script: script.to_string(),
                source,
            })?;

        Ok(exit_code(status))
    }
}

/// Directory holding the installed binary; scripts ship next to it
fn default_tools_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Child exit code, or `128 + signal` for a child killed by a signal (130 on Ctrl-C)
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
