//! Parses textual operands and runs shift based arithmetic on them.

#[cfg(test)]
#[path = "../../tests/unit/extensions/arithmetic_test.rs"]
mod arithmetic_test;

use adm_core::arithmetic::{bitshift_divide, russian_peasant_multiply};
use adm_core::utils::{ExerciseError, ExerciseResult};

/// Parses a base-10 non-negative integer. Negative values are rejected explicitly as shift based
/// algorithms are defined only for non-negative operands.
pub fn parse_operand(value: &str) -> ExerciseResult<u64> {
    match value.parse::<i128>() {
        Ok(number) if number < 0 => {
            Err(ExerciseError::invalid_argument(format!("operand must be non-negative, got: '{value}'")))
        }
        Ok(number) => u64::try_from(number)
            .map_err(|_| ExerciseError::invalid_argument(format!("operand is too large: '{value}'"))),
        Err(err) => Err(ExerciseError::invalid_argument(format!("cannot parse operand '{value}': '{err}'"))),
    }
}

/// Parses both operands and multiplies them using Russian peasant method.
pub fn multiply_operands(left: &str, right: &str) -> ExerciseResult<u128> {
    Ok(russian_peasant_multiply(parse_operand(left)?, parse_operand(right)?))
}

/// Parses both operands and divides the first one by the second one using bit shifts.
pub fn divide_operands(numerator: &str, denominator: &str) -> ExerciseResult<u64> {
    bitshift_divide(parse_operand(numerator)?, parse_operand(denominator)?)
}
