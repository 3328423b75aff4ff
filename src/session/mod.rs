//! Session input
//!
//! The usage record handed over by the session tracker, and the ways of
//! reading it (stdin or a file).

mod reader;
mod types;

pub(crate) use reader::{decode_session, read_session_input};
pub(crate) use types::{SessionData, SessionNumber};
