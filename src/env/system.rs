use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::error::Unavailable;
use crate::utils::Timezone;

use super::{Environment, GitProbe, GitStatus};

/// Real process environment: cwd, git subprocesses, system clock
#[derive(Debug, Clone, Default)]
pub(crate) struct SystemEnvironment {
    git: GitProbe,
    timezone: Timezone,
}

impl SystemEnvironment {
    pub(crate) fn new(git: GitProbe, timezone: Timezone) -> Self {
        Self { git, timezone }
    }
}

impl Environment for SystemEnvironment {
    fn current_dir_name(&self) -> Result<String, Unavailable> {
        let cwd = std::env::current_dir().map_err(|e| {
            debug!(error = %e, "current directory unavailable");
            Unavailable
        })?;
        let name = cwd
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.is_empty() {
            return Err(Unavailable);
        }
        Ok(name)
    }

    fn git_branch(&self) -> Result<String, Unavailable> {
        self.git.branch()
    }

    fn git_status(&self) -> GitStatus {
        self.git.status()
    }

    fn now(&self) -> DateTime<FixedOffset> {
        self.timezone.now()
    }
}
