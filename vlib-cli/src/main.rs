// vlib-cli/src/main.rs
//
// Entry point for the vlib command-line tool.
//
// Responsibilities include:
// - Parsing user-provided arguments (clap exits with status 2 on usage errors).
// - Setting up logging on stderr.
// - Dispatching to the selected command.
// - Printing errors to stderr and exiting with status 1 on failure.

use clap::Parser;
use std::process;

use vlib_cli::error::suggestion_for;
use vlib_cli::{Cli, Commands, commands, logging, terminal};

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    terminal::init_color();

    let result = match &cli.command {
        Commands::LibraryCp(args) => commands::copy::execute(&cli.client, args),
    };

    if let Err(e) = result {
        log::debug!("Command failed: {:?}", e);
        terminal::print_error(&e.to_string(), suggestion_for(&e));
        process::exit(1);
    }
}
