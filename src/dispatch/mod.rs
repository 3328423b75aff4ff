//! Subcommand dispatch
//!
//! Maps `(category, command)` pairs onto built-in handlers or external
//! report/maintenance scripts.

mod registry;
mod runner;

pub(crate) use registry::{
    Builtin, CATEGORIES, Category, Resolved, Target, category_names, find_category, resolve,
};
pub(crate) use runner::ScriptRunner;
