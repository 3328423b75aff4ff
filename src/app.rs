use std::panic;

use comfy_table::Color;
use tracing::{debug, warn};

use crate::cli::{Cli, Commands, StatusArgs};
use crate::consts::APP_NAME;
use crate::dispatch::{
    Builtin, CATEGORIES, Category, Resolved, ScriptRunner, Target, category_names, find_category,
    resolve,
};
use crate::env::SystemEnvironment;
use crate::error::AppError;
use crate::model::ModelTable;
use crate::output::{
    create_styled_table, error_json, error_line, render_statusline, statusline_json, styled_cell,
};
use crate::selftest::run_selftest;
use crate::session::{decode_session, read_session_input};
use crate::utils::Timezone;

/// Run the parsed command line and return the process exit code
pub(crate) fn run(cli: &Cli) -> i32 {
    match &cli.command {
        None => print_overview(cli.use_color()),
        Some(Commands::Status(args)) => handle_status(cli, args),
        Some(Commands::Selftest) => handle_selftest(cli),
        Some(Commands::List { category }) => handle_list(cli, category.as_deref()),
        Some(Commands::External(argv)) => handle_external(cli, argv),
    }
}

/// Always prints exactly one line and returns 0; failures become the error line
fn handle_status(cli: &Cli, args: &StatusArgs) -> i32 {
    with_quiet_panics(|| print_status(cli, args))
}

/// Run `f` with the panic hook logging at debug level instead of writing to stderr.
/// catch_unwind still runs the hook, and the prompt must not see the panic text.
fn with_quiet_panics<T>(f: impl FnOnce() -> T) -> T {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| debug!("statusline render panicked: {info}")));
    let result = f();
    panic::set_hook(previous);
    result
}

fn print_status(cli: &Cli, args: &StatusArgs) -> i32 {
    let timezone = Timezone::parse(cli.timezone.as_deref()).unwrap_or_else(|e| {
        warn!("{e}, using local time");
        Timezone::Local
    });
    let env = SystemEnvironment::new(cli.git_probe(), timezone);
    let models = ModelTable::load(cli.model_table.as_deref());

    let rendered = read_session_input(args.session_file.as_deref())
        .and_then(|raw| decode_session(&raw))
        .map_err(|e| e.to_string())
        .and_then(|session| {
            render_statusline(&session, &env, &models).map(|status| (session, status))
        });

    match rendered {
        Ok((session, status)) if args.json => println!("{}", statusline_json(&session, &status)),
        Ok((_, status)) => println!("{}", status.to_line()),
        Err(message) => {
            debug!(error = %message, "statusline render failed");
            let line = error_line(&message);
            if args.json {
                println!("{}", error_json(&line, &message));
            } else {
                println!("{line}");
            }
        }
    }
    0
}

fn handle_selftest(cli: &Cli) -> i32 {
    let models = ModelTable::load(cli.model_table.as_deref());
    if run_selftest(&models, cli.use_color()) {
        0
    } else {
        1
    }
}

fn handle_list(cli: &Cli, category: Option<&str>) -> i32 {
    let selected: Vec<&Category> = match category {
        None => CATEGORIES.iter().collect(),
        Some(name) => match find_category(name) {
            Some(category) => vec![category],
            None => {
                eprintln!("[ERROR] {}", AppError::UnknownCategory { category: name.to_string() });
                eprintln!("Available categories: {}", category_names().join(", "));
                return 1;
            }
        },
    };
    print_registry(&selected, cli.use_color());
    0
}

fn handle_external(cli: &Cli, argv: &[String]) -> i32 {
    let resolved = match resolve(argv) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            print_resolve_hint(&e);
            return 1;
        }
    };

    let (category, command, args) = match resolved {
        Resolved::ListCategory(category) => {
            print_category_commands(category);
            return 1;
        }
        Resolved::Run {
            category,
            command,
            args,
        } => (category, command, args),
    };
    debug!(category = category.name, command = command.name, ?args, "dispatching");

    match command.target {
        Target::Builtin(Builtin::Status) => match StatusArgs::from_passthrough(args) {
            Ok(status_args) => handle_status(cli, &status_args),
            Err(e) => {
                let _ = e.print();
                e.exit_code()
            }
        },
        Target::Builtin(Builtin::SelfTest) => handle_selftest(cli),
        Target::Script(script) => {
            println!("[INFO] Running: {}", command.help);
            println!("{}", "-".repeat(50));
            let runner = ScriptRunner::new(cli.interpreter.clone(), cli.tools_dir.clone());
            match runner.run(script, args) {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("[ERROR] {e}");
                    1
                }
            }
        }
    }
}

fn print_resolve_hint(error: &AppError) {
    match error {
        AppError::UnknownCategory { .. } => {
            eprintln!("Available categories: {}", category_names().join(", "));
        }
        AppError::UnknownCommand { category, .. } => {
            if let Some(category) = find_category(category) {
                eprintln!("Available commands: {}", category.command_names().join(", "));
            }
        }
        _ => eprintln!("Run '{APP_NAME} list' to see available commands"),
    }
}

fn print_category_commands(category: &Category) {
    println!("Available commands in '{}':", category.name);
    for command in category.commands {
        println!("  {:<15} {}", command.name, command.help);
    }
    println!();
    println!("Usage: {APP_NAME} {} <command> [options]", category.name);
}

fn print_registry(categories: &[&Category], use_color: bool) {
    let mut table = create_styled_table(&["Category", "Command", "Description", "Options"], use_color);
    for category in categories {
        for command in category.commands {
            let color = match command.target {
                Target::Builtin(_) => Some(Color::Green),
                Target::Script(_) => None,
            };
            table.add_row(vec![
                styled_cell(category.name, Some(Color::Cyan), use_color),
                styled_cell(command.name, color, use_color),
                styled_cell(command.help, None, use_color),
                styled_cell(&command.options.join(" "), None, use_color),
            ]);
        }
    }
    println!("{table}");
}

fn print_overview(use_color: bool) -> i32 {
    println!("{APP_NAME} - session statusline and tool dispatcher");
    println!();

    let mut table = create_styled_table(&["Category", "Description", "Commands"], use_color);
    for category in &CATEGORIES {
        table.add_row(vec![
            styled_cell(category.name, Some(Color::Cyan), use_color),
            styled_cell(category.description, None, use_color),
            styled_cell(&category.command_names().join(", "), None, use_color),
        ]);
    }
    println!("{table}");

    println!();
    println!("Examples:");
    println!("  echo '{{\"model\":\"claude-sonnet-4\"}}' | {APP_NAME} status");
    println!("  {APP_NAME} core daemon --status");
    println!("  {APP_NAME} reports daily --days 7");
    println!("  {APP_NAME} daily");
    println!("  {APP_NAME} list reports");
    0
}
