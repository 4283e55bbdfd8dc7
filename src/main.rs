use anyhow::Result;

use media_list::cli::Command;
use media_list::{handle_list, handle_query, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::List {
            filters,
            connection,
            pages,
            json,
        } => handle_list(filters, connection, *pages, *json),
        Command::Query {
            filters,
            connection,
        } => handle_query(filters, connection),
    }
}
