use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::Unavailable;

use super::GitStatus;

const GIT_BIN: &str = "git";
const POLL_INTERVAL: Duration = Duration::from_millis(10);

pub(crate) const DEFAULT_GIT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Runs the two git queries the statusline needs, each bounded by `timeout`
#[derive(Debug, Clone)]
pub(crate) struct GitProbe {
    program: String,
    timeout: Duration,
    enabled: bool,
}

impl Default for GitProbe {
    fn default() -> Self {
        Self {
            program: GIT_BIN.to_string(),
            timeout: DEFAULT_GIT_TIMEOUT,
            enabled: true,
        }
    }
}

impl GitProbe {
    pub(crate) fn new(timeout: Duration, enabled: bool) -> Self {
        Self {
            timeout,
            enabled,
            ..Self::default()
        }
    }

    pub(crate) fn branch(&self) -> Result<String, Unavailable> {
        let out = self.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        let branch = out.trim();
        if branch.is_empty() {
            return Err(Unavailable);
        }
        Ok(branch.to_string())
    }

    pub(crate) fn status(&self) -> GitStatus {
        match self.run(&["status", "--porcelain"]) {
            Ok(out) if out.trim().is_empty() => GitStatus::Clean,
            Ok(_) => GitStatus::Modified,
            Err(Unavailable) => GitStatus::Unknown,
        }
    }

    fn run(&self, args: &[&str]) -> Result<String, Unavailable> {
        if !self.enabled {
            return Err(Unavailable);
        }
        run_with_timeout(&self.program, args, self.timeout)
    }
}

/// Run `program args` in the current directory and return its raw stdout.
/// Spawn failure, non-zero exit, non-UTF-8 output and timeout all map to `Unavailable`;
/// a child that outlives `timeout` is killed.
fn run_with_timeout(program: &str, args: &[&str], timeout: Duration) -> Result<String, Unavailable> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            debug!(program, ?args, error = %e, "spawn failed");
            Unavailable
        })?;

    // Drain stdout on a side thread so a chatty child cannot block on a full pipe
    let mut stdout = child.stdout.take().ok_or(Unavailable)?;
    let reader = thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = stdout.read_to_end(&mut buf);
        buf
    });

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                // The reader sees EOF once the pipe closes. Not joined: a
                // grandchild still holding the pipe would stall the render.
                drop(reader);
                debug!(program, ?args, timeout_ms = timeout.as_millis() as u64, "timed out");
                return Err(Unavailable);
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                let _ = child.kill();
                debug!(program, ?args, error = %e, "wait failed");
                return Err(Unavailable);
            }
        }
    };

    let buf = reader.join().map_err(|_| Unavailable)?;
    if !status.success() {
        debug!(program, ?args, code = ?status.code(), "non-zero exit");
        return Err(Unavailable);
    }
    String::from_utf8(buf).map_err(|_| Unavailable)
}
