//! Integer arithmetic expressed through doubling, halving and addition only.

#[cfg(test)]
#[path = "../tests/unit/arithmetic_test.rs"]
mod arithmetic_test;

use crate::utils::{ExerciseError, ExerciseResult};

/// Multiplies two non-negative integers using Russian peasant method: while the right operand is
/// positive, add the left operand to the product when the right one is odd, then double the left
/// operand and halve the right one.
///
/// The product is returned as `u128`, so it never overflows.
pub fn russian_peasant_multiply(left: u64, right: u64) -> u128 {
    let mut left = left as u128;
    let mut right = right;
    let mut product = 0_u128;

    while right > 0 {
        if right & 1 == 1 {
            product += left;
        }

        left <<= 1;
        right >>= 1;
    }

    product
}

/// Divides two non-negative integers using shifts: the divisor is doubled while it still fits into
/// the remainder, the matching power of two is added to the quotient and the doubled divisor is
/// subtracted. Returns the quotient rounded towards zero.
pub fn bitshift_divide(numerator: u64, denominator: u64) -> ExerciseResult<u64> {
    if denominator == 0 {
        return Err(ExerciseError::invalid_argument("division by zero"));
    }

    let mut remainder = numerator;
    let mut quotient = 0_u64;

    while remainder >= denominator {
        let mut shifted = denominator;
        let mut multiple = 1_u64;

        // NOTE compares with the difference to avoid overflow when doubling large values
        while shifted <= remainder - shifted {
            shifted <<= 1;
            multiple <<= 1;
        }

        remainder -= shifted;
        quotient += multiple;
    }

    Ok(quotient)
}
