/// Label used when the model identifier is missing or the sentinel value
pub(crate) const UNKNOWN: &str = "Unknown";

/// Clock segment format: 24-hour "14:05"
pub(crate) const CLOCK_FORMAT: &str = "%H:%M";

/// Directory and branch names are cut to these many characters
pub(crate) const DIR_NAME_WIDTH: usize = 12;
pub(crate) const BRANCH_NAME_WIDTH: usize = 8;

/// Program name used in config paths and usage text
pub(crate) const APP_NAME: &str = "claude-statusline";
