//! Self-test
//!
//! Renders a fixed set of sample sessions through the real formatter (with a
//! canned environment and the installed model table) and reports which ones
//! produce a well-formed line.

use comfy_table::Color;

use crate::env::{FixedEnvironment, GitStatus};
use crate::model::{ModelTable, resolve_label};
use crate::output::{create_styled_table, render_statusline, styled_cell};
use crate::session::{SessionData, SessionNumber};

const PREVIEW_WIDTH: usize = 60;

struct Sample {
    name: &'static str,
    session: SessionData,
    env: FixedEnvironment,
    /// Expected line prefix, after the model label
    prefix_after_model: &'static str,
    contains: Option<&'static str>,
}

#[derive(Debug)]
pub(crate) struct CaseResult {
    pub(crate) name: &'static str,
    pub(crate) passed: bool,
    pub(crate) detail: String,
}

fn samples() -> Vec<Sample> {
    vec![
        Sample {
            name: "active-with-end-time",
            session: SessionData {
                session_number: SessionNumber::Known(42),
                primary_model: Some("claude-opus-4-1-20250805".to_string()),
                active: true,
                session_end_time: Some("15:30".to_string()),
                message_count: 123,
                tokens: Some(4_567_890),
                cost: Some(12.34),
                remaining_seconds: 3600,
                ..Default::default()
            },
            env: FixedEnvironment::sample(),
            prefix_after_model: " [LIVE] [ends 15:30] [123msg] [4.6M] [$12.34]",
            contains: Some("[project][main]"),
        },
        Sample {
            name: "expired",
            session: SessionData {
                primary_model: Some("claude-sonnet-4-20250514".to_string()),
                message_count: 682,
                tokens: Some(64_336_669),
                cost: Some(25.47),
                ..Default::default()
            },
            env: FixedEnvironment::sample(),
            prefix_after_model: " [OFF] [EXPIRED] [682msg] [64.3M] [$25.47]",
            contains: None,
        },
        Sample {
            name: "empty-record",
            session: SessionData::default(),
            env: FixedEnvironment::bare(),
            prefix_after_model: " [OFF] [EXPIRED] [0msg] [0t] [$0.00]",
            contains: None,
        },
        Sample {
            name: "unfamiliar-model",
            session: SessionData {
                model: Some("gpt-5-codex".to_string()),
                active: true,
                remaining_seconds: 45 * 60,
                message_count: 9,
                total_tokens: Some(950),
                total_cost: Some(0.5),
                ..Default::default()
            },
            env: FixedEnvironment::sample(),
            prefix_after_model: " [LIVE] [45m] [9msg] [950t] [$0.50]",
            contains: None,
        },
        Sample {
            name: "dirty-worktree",
            session: SessionData {
                primary_model: Some("claude-3-5-haiku-20241022".to_string()),
                active: true,
                remaining_seconds: 2 * 3600 + 5 * 60,
                ..Default::default()
            },
            env: FixedEnvironment {
                status: GitStatus::Modified,
                ..FixedEnvironment::sample()
            },
            prefix_after_model: " [LIVE] [2h05m]",
            contains: Some("[project][main*]"),
        },
    ]
}

fn check_line(line: &str, prefix: &str, contains: Option<&str>) -> Result<(), String> {
    if line.is_empty() {
        return Err("empty line".to_string());
    }
    if line.contains('\n') {
        return Err("more than one line".to_string());
    }
    if !line.is_ascii() {
        return Err("non-ASCII output".to_string());
    }
    if line.starts_with("[ERROR") {
        return Err(line.to_string());
    }
    if !line.starts_with(prefix) {
        return Err(format!("expected prefix {prefix}"));
    }
    if let Some(needle) = contains
        && !line.contains(needle)
    {
        return Err(format!("missing {needle}"));
    }
    Ok(())
}

pub(crate) fn evaluate(models: &ModelTable) -> Vec<CaseResult> {
    samples()
        .into_iter()
        .map(|sample| {
            let label = resolve_label(sample.session.model_id(), models);
            let prefix = format!("[{label}]{}", sample.prefix_after_model);
            let outcome = render_statusline(&sample.session, &sample.env, models)
                .map(|status| status.to_line())
                .map_err(|msg| format!("panicked: {msg}"))
                .and_then(|line| check_line(&line, &prefix, sample.contains).map(|()| line));

            match outcome {
                Ok(line) => CaseResult {
                    name: sample.name,
                    passed: true,
                    detail: line.chars().take(PREVIEW_WIDTH).collect(),
                },
                Err(reason) => CaseResult {
                    name: sample.name,
                    passed: false,
                    detail: reason,
                },
            }
        })
        .collect()
}

/// Print the per-sample table and summary. Returns true when every sample passed.
pub(crate) fn run_selftest(models: &ModelTable, use_color: bool) -> bool {
    let results = evaluate(models);

    let mut table = create_styled_table(&["#", "Sample", "Result", "Output"], use_color);
    for (i, result) in results.iter().enumerate() {
        let (verdict, color) = if result.passed {
            ("OK", Color::Green)
        } else {
            ("FAILED", Color::Red)
        };
        table.add_row(vec![
            styled_cell(&(i + 1).to_string(), None, use_color),
            styled_cell(result.name, None, use_color),
            styled_cell(verdict, Some(color), use_color),
            styled_cell(&result.detail, None, use_color),
        ]);
    }
    println!("{table}");

    let failed: Vec<&CaseResult> = results.iter().filter(|r| !r.passed).collect();
    println!(
        "Success: {}/{}  Failed: {}/{}  (model table: {} entries)",
        results.len() - failed.len(),
        results.len(),
        failed.len(),
        results.len(),
        models.len()
    );
    for result in &failed {
        println!("  - {}: {}", result.name, result.detail);
    }

    failed.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_samples_pass_with_empty_table() {
        let results = evaluate(&ModelTable::default());
        assert_eq!(results.len(), 5);
        for result in &results {
            assert!(result.passed, "{}: {}", result.name, result.detail);
        }
    }

    #[test]
    fn samples_follow_side_table_names() {
        let table = ModelTable::from_json(&serde_json::json!({
            "models": {"claude-opus-4-1-20250805": {"name": "Opus 4.1"}}
        }));
        let results = evaluate(&table);
        let active = results
            .iter()
            .find(|r| r.name == "active-with-end-time")
            .unwrap();
        assert!(active.passed, "{}", active.detail);
        assert!(active.detail.starts_with("[Opus 4.1] [LIVE]"));
    }

    #[test]
    fn non_ascii_display_name_fails() {
        let table = ModelTable::from_json(&serde_json::json!({
            "models": {"claude-opus-4-1-20250805": {"name": "Opus ✦"}}
        }));
        let results = evaluate(&table);
        let active = results
            .iter()
            .find(|r| r.name == "active-with-end-time")
            .unwrap();
        assert!(!active.passed);
        assert_eq!(active.detail, "non-ASCII output");
    }

    #[test]
    fn check_line_reports_first_problem() {
        assert_eq!(check_line("", "[x]", None), Err("empty line".to_string()));
        assert_eq!(
            check_line("[a]\n[b]", "[a]", None),
            Err("more than one line".to_string())
        );
        assert_eq!(
            check_line("[ERROR: boom]", "[x]", None),
            Err("[ERROR: boom]".to_string())
        );
        assert_eq!(
            check_line("[a] [b]", "[a] [b]", Some("[c]")),
            Err("missing [c]".to_string())
        );
        assert_eq!(check_line("[a] [b] [c]", "[a]", Some("[c]")), Ok(()));
    }
}
