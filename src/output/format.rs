/// Token count with a unit suffix: "999t", "1.5K", "64.3M"
pub(crate) fn format_tokens(tokens: u64) -> String {
    if tokens < 1_000 {
        format!("{tokens}t")
    } else if tokens < 1_000_000 {
        format!("{:.1}K", tokens as f64 / 1_000.0)
    } else {
        format!("{:.1}M", tokens as f64 / 1_000_000.0)
    }
}

pub(crate) fn format_cost(cost: f64) -> String {
    format!("${cost:.2}")
}

/// Countdown until the session window closes: "2h05m", "45m", or "EXPIRED"
pub(crate) fn format_remaining(seconds: i64) -> String {
    if seconds <= 0 {
        return "EXPIRED".to_string();
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h{minutes:02}m")
    } else {
        format!("{minutes}m")
    }
}

/// First `width` characters of `s`
pub(crate) fn truncate_chars(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

const ERROR_DETAIL_WIDTH: usize = 30;

/// The line printed in place of a statusline when rendering fails
pub(crate) fn error_line(message: &str) -> String {
    format!("[ERROR: {}]", truncate_chars(message, ERROR_DETAIL_WIDTH))
}
