#[cfg(test)]
#[path = "../../tests/unit/commands/arithmetic_test.rs"]
mod arithmetic_test;

use clap::{Arg, ArgMatches, Command};
use std::io::Write;

use adm_cli::extensions::arithmetic::{divide_operands, multiply_operands};

const LEFT_ARG_NAME: &str = "LEFT";
const RIGHT_ARG_NAME: &str = "RIGHT";

fn create_operands_app(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new(LEFT_ARG_NAME)
                .help("Specifies the left operand as a non-negative base-10 integer")
                .required(true)
                .allow_negative_numbers(true)
                .index(1),
        )
        .arg(
            Arg::new(RIGHT_ARG_NAME)
                .help("Specifies the right operand as a non-negative base-10 integer")
                .required(true)
                .allow_negative_numbers(true)
                .index(2),
        )
}

pub fn get_multiply_app() -> Command {
    create_operands_app("multiply", "Multiplies two integers using Russian peasant method")
}

pub fn get_divide_app() -> Command {
    create_operands_app("divide", "Divides the left integer by the right one using bit shifts")
}

pub fn run_multiply(matches: &ArgMatches, out_writer: &mut dyn Write) -> Result<(), String> {
    let (left, right) = get_operands(matches)?;
    let product = multiply_operands(left, right).map_err(|err| format!("cannot multiply: '{err}'"))?;

    writeln!(out_writer, "{product}").map_err(|err| format!("cannot write product: '{err}'"))
}

pub fn run_divide(matches: &ArgMatches, out_writer: &mut dyn Write) -> Result<(), String> {
    let (left, right) = get_operands(matches)?;
    let quotient = divide_operands(left, right).map_err(|err| format!("cannot divide: '{err}'"))?;

    writeln!(out_writer, "{quotient}").map_err(|err| format!("cannot write quotient: '{err}'"))
}

fn get_operands(matches: &ArgMatches) -> Result<(&str, &str), String> {
    Ok((get_operand(matches, LEFT_ARG_NAME)?, get_operand(matches, RIGHT_ARG_NAME)?))
}

fn get_operand<'a>(matches: &'a ArgMatches, arg_name: &str) -> Result<&'a str, String> {
    matches.get_one::<String>(arg_name).map(|value| value.as_str()).ok_or_else(|| format!("missing {arg_name} operand"))
}
