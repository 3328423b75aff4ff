mod format;
mod json;
mod statusline;
mod table;

pub(crate) use format::error_line;
pub(crate) use json::{error_json, statusline_json};
pub(crate) use statusline::render_statusline;
pub(crate) use table::{create_styled_table, styled_cell};
