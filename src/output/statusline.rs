use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::consts::{BRANCH_NAME_WIDTH, CLOCK_FORMAT, DIR_NAME_WIDTH};
use crate::env::{Environment, GitStatus};
use crate::model::{ModelTable, resolve_label};
use crate::session::{SessionData, SessionNumber};

use super::format::{format_cost, format_remaining, format_tokens, truncate_chars};

/// Every segment of one statusline, already formatted.
///
/// Line order: model, time, usage, context (only with a directory), clock.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Statusline {
    pub(crate) session_number: SessionNumber,
    pub(crate) model: String,
    pub(crate) active: bool,
    pub(crate) time: String,
    pub(crate) messages: u64,
    pub(crate) tokens: String,
    pub(crate) cost: String,
    pub(crate) directory: Option<String>,
    pub(crate) branch: Option<String>,
    pub(crate) git_status: GitStatus,
    pub(crate) clock: String,
}

impl Statusline {
    pub(crate) fn compose(
        session: &SessionData,
        env: &dyn Environment,
        models: &ModelTable,
    ) -> Self {
        let time = match session.end_time() {
            Some(end) => format!("ends {end}"),
            None => format_remaining(session.remaining_seconds),
        };

        let directory = env
            .current_dir_name()
            .ok()
            .map(|name| truncate_chars(&name, DIR_NAME_WIDTH));

        // Git is only worth asking about when the context segment will be shown
        let branch = directory
            .as_ref()
            .and_then(|_| env.git_branch().ok())
            .map(|name| truncate_chars(&name, BRANCH_NAME_WIDTH));
        let git_status = if branch.is_some() {
            env.git_status()
        } else {
            GitStatus::Unknown
        };
        if branch.is_some() && git_status == GitStatus::Unknown {
            debug!("git status unknown, rendering branch without dirty marker");
        }

        Self {
            session_number: session.session_number,
            model: resolve_label(session.model_id(), models),
            active: session.active,
            time,
            messages: session.message_count,
            tokens: format_tokens(session.token_count()),
            cost: format_cost(session.cost_usd()),
            directory,
            branch,
            git_status,
            clock: env.now().format(CLOCK_FORMAT).to_string(),
        }
    }

    /// Bracketed segments in display order
    pub(crate) fn segments(&self) -> Vec<String> {
        let status = if self.active { "LIVE" } else { "OFF" };
        let mut parts = vec![
            format!("[{}] [{}]", self.model, status),
            format!("[{}]", self.time),
            format!("[{}msg] [{}] [{}]", self.messages, self.tokens, self.cost),
        ];

        if let Some(dir) = &self.directory {
            let mut context = format!("[{dir}]");
            if let Some(branch) = &self.branch {
                let dirty = if self.git_status == GitStatus::Modified {
                    "*"
                } else {
                    ""
                };
                context.push_str(&format!("[{branch}{dirty}]"));
            }
            parts.push(context);
        }

        parts.push(format!("[{}]", self.clock));
        parts
    }

    pub(crate) fn to_line(&self) -> String {
        self.segments().join(" ")
    }
}

/// Compose a statusline, converting any panic into an error message so the
/// caller always has something to print.
pub(crate) fn render_statusline(
    session: &SessionData,
    env: &dyn Environment,
    models: &ModelTable,
) -> Result<Statusline, String> {
    panic::catch_unwind(AssertUnwindSafe(|| Statusline::compose(session, env, models)))
        .map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "formatter panicked".to_string()
    }
}
