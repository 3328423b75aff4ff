use std::io::{IsTerminal, Read};
use std::path::Path;

use crate::error::AppError;

use super::types::SessionData;

/// Upper bound on what is read from stdin, so a runaway producer cannot stall the prompt
const MAX_INPUT_BYTES: u64 = 64 * 1024;

/// Read the raw session document from `path`, or from stdin when no path is given.
/// An interactive stdin is treated as empty input.
pub(crate) fn read_session_input(path: Option<&Path>) -> Result<String, AppError> {
    if let Some(path) = path {
        return std::fs::read_to_string(path).map_err(AppError::SessionRead);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut buf = String::new();
    stdin
        .lock()
        .take(MAX_INPUT_BYTES)
        .read_to_string(&mut buf)
        .map_err(AppError::SessionRead)?;
    Ok(buf)
}

/// Decode a session document. Blank input is an empty record, not an error.
pub(crate) fn decode_session(raw: &str) -> Result<SessionData, AppError> {
    if raw.trim().is_empty() {
        return Ok(SessionData::default());
    }
    Ok(serde_json::from_str(raw)?)
}
