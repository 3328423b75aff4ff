//! Capabilities the formatter queries about the outside world
//!
//! Every lookup can fail; failures surface as `Unavailable` (or
//! `GitStatus::Unknown`) and the formatter degrades the matching segment.

mod fixed;
mod git;
mod system;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::error::Unavailable;

pub(crate) use fixed::FixedEnvironment;
pub(crate) use git::{DEFAULT_GIT_TIMEOUT, GitProbe};
pub(crate) use system::SystemEnvironment;

/// Working-tree state reported by `git status --porcelain`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum GitStatus {
    Clean,
    Modified,
    #[default]
    Unknown,
}

/// Outside-world context for one render
pub(crate) trait Environment {
    /// Final component of the current working directory
    fn current_dir_name(&self) -> Result<String, Unavailable>;

    /// Checked-out branch of the repository containing the working directory
    fn git_branch(&self) -> Result<String, Unavailable>;

    fn git_status(&self) -> GitStatus;

    /// Wall-clock time in the display timezone
    fn now(&self) -> DateTime<FixedOffset>;
}
