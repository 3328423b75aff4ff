mod app;
mod cli;
mod config;
mod consts;
mod dispatch;
mod env;
mod error;
mod model;
mod output;
mod selftest;
mod session;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::{Timezone, init_logging};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug, cli.is_statusline());

    let config = Config::load();
    let cli = cli.with_config(&config);

    // The statusline falls back to local time instead; it must always print a line
    if !cli.is_statusline()
        && let Err(e) = Timezone::parse(cli.timezone.as_deref())
    {
        eprintln!("{e}");
        std::process::exit(1);
    }

    std::process::exit(app::run(&cli));
}
