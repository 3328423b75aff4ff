use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive, e.g. `claude_statusline=trace`
pub(crate) const LOG_ENV: &str = "CLAUDE_STATUSLINE_LOG";

/// Install the stderr subscriber.
///
/// `quiet` silences everything by default; the status command uses it because
/// prompt renderers tend to show whatever lands on stderr. `--debug` or an
/// explicit `CLAUDE_STATUSLINE_LOG` still win.
pub(crate) fn init_logging(debug: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(default_directive(debug, quiet))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

fn default_directive(debug: bool, quiet: bool) -> &'static str {
    match (debug, quiet) {
        (true, _) => "debug",
        (false, true) => "off",
        (false, false) => "warn",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_beats_quiet() {
        assert_eq!(default_directive(true, true), "debug");
        assert_eq!(default_directive(true, false), "debug");
    }

    #[test]
    fn quiet_turns_logging_off() {
        assert_eq!(default_directive(false, true), "off");
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(default_directive(false, false), "warn");
    }
}
