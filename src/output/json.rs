use crate::session::SessionData;

use super::statusline::Statusline;

/// Statusline plus its structured values, for scripts that want more than the line
pub(crate) fn statusline_json(session: &SessionData, status: &Statusline) -> String {
    let output = serde_json::json!({
        "line": status.to_line(),
        "session_number": status.session_number,
        "model": status.model,
        "model_id": session.model_id(),
        "active": status.active,
        "time": status.time,
        "remaining_seconds": session.remaining_seconds,
        "messages": status.messages,
        "tokens": session.token_count(),
        "cost": session.cost_usd(),
        "directory": status.directory,
        "branch": status.branch,
        "git_status": status.git_status,
        "clock": status.clock,
        "formatted": {
            "tokens": status.tokens,
            "cost": status.cost,
        }
    });
    to_json_string(&output)
}

/// JSON counterpart of the error line
pub(crate) fn error_json(line: &str, message: &str) -> String {
    let output = serde_json::json!({
        "line": line,
        "error": message,
    });
    to_json_string(&output)
}

fn to_json_string(value: &serde_json::Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to serialize statusline JSON");
        "{}".to_string()
    })
}
