//! A command line interface to nearest neighbour tours and shift based arithmetic.
//!

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use std::io::stdout;
use std::process;

fn main() {
    let matches = cli::get_app().get_matches();

    if let Err(err) = cli::run_subcommand(matches, &mut stdout()) {
        eprintln!("{err}");
        process::exit(1);
    }
}

mod cli {
    use super::commands::arithmetic::{get_divide_app, get_multiply_app, run_divide, run_multiply};
    use super::commands::tour::{get_tour_app, run_tour};
    use clap::{ArgMatches, Command};
    use std::io::Write;

    pub fn get_app() -> Command {
        Command::new("adm-cli")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Nearest neighbour tours over labeled points and Russian peasant arithmetic")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(get_tour_app())
            .subcommand(get_multiply_app())
            .subcommand(get_divide_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches, out_writer: &mut dyn Write) -> Result<(), String> {
        match arg_matches.subcommand() {
            Some(("tour", matches)) => run_tour(matches, out_writer),
            Some(("multiply", matches)) => run_multiply(matches, out_writer),
            Some(("divide", matches)) => run_divide(matches, out_writer),
            Some((name, _)) => Err(format!("unknown subcommand: '{name}'")),
            None => Err("no subcommand was used. Use -h to print help information.".to_string()),
        }
    }
}
