//! Command registry
//!
//! Static `(category, command)` table plus the top-level shortcuts.

use crate::error::AppError;

/// Commands implemented inside this binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    Status,
    SelfTest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Builtin(Builtin),
    /// Script file name, resolved inside the tools directory
    Script(&'static str),
}

#[derive(Debug)]
pub(crate) struct ToolCommand {
    pub(crate) name: &'static str,
    pub(crate) help: &'static str,
    pub(crate) options: &'static [&'static str],
    pub(crate) target: Target,
}

#[derive(Debug)]
pub(crate) struct Category {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) commands: &'static [ToolCommand],
}

impl Category {
    pub(crate) fn command(&'static self, name: &str) -> Option<&'static ToolCommand> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name).collect()
    }
}

const fn script(name: &'static str, help: &'static str, file: &'static str) -> ToolCommand {
    ToolCommand {
        name,
        help,
        options: &[],
        target: Target::Script(file),
    }
}

pub(crate) static CATEGORIES: [Category; 4] = [
    Category {
        name: "core",
        description: "Core functionality",
        commands: &[
            ToolCommand {
                name: "status",
                help: "Show current session status",
                options: &["--json", "--session-file"],
                target: Target::Builtin(Builtin::Status),
            },
            ToolCommand {
                name: "daemon",
                help: "Manage background daemon",
                options: &["--daemon", "--status", "--stop", "--restart"],
                target: Target::Script("unified_daemon.py"),
            },
            script("rebuild", "Rebuild database from JSONL files", "rebuild_database.py"),
        ],
    },
    Category {
        name: "reports",
        description: "Analytics and reporting",
        commands: &[
            script("sessions", "Analyze session details", "session_analyzer.py"),
            script("costs", "Analyze costs by model and time", "cost_analyzer.py"),
            script("daily", "Generate daily usage report", "daily_report.py"),
            script("heatmap", "Show activity heatmap", "activity_heatmap.py"),
            script("models", "Show model usage statistics", "model_usage.py"),
            script("summary", "Generate summary report", "summary_report.py"),
        ],
    },
    Category {
        name: "check",
        description: "Debugging and verification",
        commands: &[
            script("current", "Check current session detection", "check_current.py"),
            script("costs", "Verify cost calculations", "check_costs.py"),
            script("verify", "Verify cost accuracy", "verify_costs.py"),
            script("session", "Check session data integrity", "check_session_data.py"),
        ],
    },
    Category {
        name: "manage",
        description: "Management and maintenance",
        commands: &[
            script("update-prices", "Update model prices from repository", "update_prices.py"),
            script("template", "Select statusline display template", "select_template.py"),
            ToolCommand {
                name: "test",
                help: "Test statusline functionality",
                options: &[],
                target: Target::Builtin(Builtin::SelfTest),
            },
        ],
    },
];

/// Top-level words that stand for a full `(category, command)` pair
const SHORTCUTS: [(&str, &str, &str); 6] = [
    ("daemon", "core", "daemon"),
    ("rebuild", "core", "rebuild"),
    ("costs", "reports", "costs"),
    ("daily", "reports", "daily"),
    ("sessions", "reports", "sessions"),
    ("update-prices", "manage", "update-prices"),
];

pub(crate) fn find_category(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

pub(crate) fn category_names() -> Vec<&'static str> {
    CATEGORIES.iter().map(|c| c.name).collect()
}

fn shortcut(name: &str) -> Option<(&'static str, &'static str)> {
    SHORTCUTS
        .iter()
        .find(|(word, _, _)| *word == name)
        .map(|(_, category, command)| (*category, *command))
}

/// What an external argument vector asks for
#[derive(Debug)]
pub(crate) enum Resolved<'a> {
    Run {
        category: &'static Category,
        command: &'static ToolCommand,
        args: &'a [String],
    },
    /// A category given without a command
    ListCategory(&'static Category),
}

/// Resolve `<shortcut> [args]` or `<category> <command> [args]`
pub(crate) fn resolve(argv: &[String]) -> Result<Resolved<'_>, AppError> {
    let Some((first, rest)) = argv.split_first() else {
        return Err(AppError::UnknownShortcut {
            input: String::new(),
        });
    };

    let (category_name, command_name, args) = if let Some((category, command)) = shortcut(first) {
        (category, command, rest)
    } else {
        let Some((second, args)) = rest.split_first() else {
            return match find_category(first) {
                Some(category) => Ok(Resolved::ListCategory(category)),
                None => Err(AppError::UnknownShortcut {
                    input: first.clone(),
                }),
            };
        };
        (first.as_str(), second.as_str(), args)
    };

    let category = find_category(category_name).ok_or_else(|| AppError::UnknownCategory {
        category: category_name.to_string(),
    })?;
    let command = category
        .command(command_name)
        .ok_or_else(|| AppError::UnknownCommand {
            category: category_name.to_string(),
            command: command_name.to_string(),
        })?;

    Ok(Resolved::Run {
        category,
        command,
        args,
    })
}
