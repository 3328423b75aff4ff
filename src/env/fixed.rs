use chrono::{DateTime, FixedOffset};

use crate::error::Unavailable;

use super::{Environment, GitStatus};

const SAMPLE_TIME: &str = "2026-01-15T09:05:00+00:00";

/// Canned environment with no side effects. Backs the self-test and unit tests.
#[derive(Debug, Clone)]
pub(crate) struct FixedEnvironment {
    pub(crate) dir_name: Option<String>,
    pub(crate) branch: Option<String>,
    pub(crate) status: GitStatus,
    pub(crate) now: DateTime<FixedOffset>,
}

impl FixedEnvironment {
    /// A repository checkout at 09:05 UTC: dir `project`, branch `main`, clean tree
    pub(crate) fn sample() -> Self {
        Self {
            dir_name: Some("project".to_string()),
            branch: Some("main".to_string()),
            status: GitStatus::Clean,
            now: DateTime::parse_from_rfc3339(SAMPLE_TIME).unwrap_or_default(),
        }
    }

    /// Nothing known except the clock
    pub(crate) fn bare() -> Self {
        Self {
            dir_name: None,
            branch: None,
            status: GitStatus::Unknown,
            ..Self::sample()
        }
    }
}

impl Environment for FixedEnvironment {
    fn current_dir_name(&self) -> Result<String, Unavailable> {
        self.dir_name.clone().ok_or(Unavailable)
    }

    fn git_branch(&self) -> Result<String, Unavailable> {
        self.branch.clone().ok_or(Unavailable)
    }

    fn git_status(&self) -> GitStatus {
        self.status
    }

    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}
