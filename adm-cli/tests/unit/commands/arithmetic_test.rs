use super::*;

fn run_command(app: Command, run: fn(&ArgMatches, &mut dyn Write) -> Result<(), String>, args: Vec<&str>) -> Result<String, String> {
    let matches = app.try_get_matches_from(args).map_err(|err| err.to_string())?;
    let mut buffer = Vec::new();

    run(&matches, &mut buffer)?;

    Ok(String::from_utf8(buffer).unwrap())
}

#[test]
fn can_multiply_from_args() {
    let cases = [
        ("0", "0", "0\n"),
        ("7", "0", "0\n"),
        ("1", "5", "5\n"),
        ("13", "13", "169\n"),
        ("123456", "789", "97406784\n"),
        ("18446744073709551615", "2", "36893488147419103230\n"),
    ];

    for (left, right, expected) in cases {
        let result = run_command(get_multiply_app(), run_multiply, vec!["multiply", left, right]);

        assert_eq!(result.unwrap(), expected, "{left} * {right}");
    }
}

#[test]
fn can_reject_invalid_operands() {
    let cases = [
        ("abc", "5", "cannot parse operand 'abc'"),
        ("-3", "5", "operand must be non-negative, got: '-3'"),
        ("3", "-5", "operand must be non-negative, got: '-5'"),
        ("1.5", "2", "cannot parse operand '1.5'"),
        ("18446744073709551616", "1", "operand is too large"),
        ("", "1", "cannot parse operand ''"),
    ];

    for (left, right, expected_error) in cases {
        let error = run_command(get_multiply_app(), run_multiply, vec!["multiply", left, right]).unwrap_err();

        assert!(error.contains(expected_error), "unexpected error: {error}");
    }
}

#[test]
fn can_divide_from_args() {
    let result = run_command(get_divide_app(), run_divide, vec!["divide", "100", "7"]);

    assert_eq!(result.unwrap(), "14\n");
}

#[test]
fn can_reject_division_by_zero() {
    let result = run_command(get_divide_app(), run_divide, vec!["divide", "100", "0"]);

    assert_eq!(result.unwrap_err(), "cannot divide: 'invalid argument: division by zero'");
}

#[test]
fn can_require_both_operands() {
    assert!(get_multiply_app().try_get_matches_from(vec!["multiply", "1"]).is_err());
    assert!(get_divide_app().try_get_matches_from(vec!["divide"]).is_err());
}
