use clap::ArgMatches;

pub mod arithmetic;
pub mod tour;

use adm_core::utils::{InfoLogger, create_silent_logger};
use std::fs::File;
use std::str::FromStr;
use std::sync::Arc;

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Creates a logger which writes to stderr, so it does not interfere with results printed to stdout.
fn get_logger(is_enabled: bool) -> InfoLogger {
    if is_enabled { Arc::new(|msg| eprintln!("{msg}")) } else { create_silent_logger() }
}
