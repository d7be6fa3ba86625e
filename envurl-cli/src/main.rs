//! envurl CLI - Inspect database, cache and email URLs as settings.

use clap::Parser;

use envurl_cli::cli::{Cli, Command};
use envurl_cli::commands;
use envurl_cli::error::CliResult;
use envurl_cli::output;

fn main() {
    // Parse warnings are printed by the commands themselves.
    envurl_config::logging::init_with_default("error");

    if let Err(e) = run() {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Db(args) => commands::db::run(args),
        Command::Cache(args) => commands::cache::run(args),
        Command::Email(args) => commands::email::run(args),
        Command::Schemes(args) => commands::schemes::run(args),
        Command::Version => commands::version::run(),
    }
}
