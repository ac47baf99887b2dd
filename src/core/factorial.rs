use crate::core::multiply::DigitSequence;
use crate::domain::model::{FactorialResult, Strategy};
use crate::utils::error::{CalcError, Result};
use std::time::Instant;

/// Computes `n!` exactly.
///
/// Up to 20 the product is accumulated in an `i64`; above that it is built
/// digit by digit through [`DigitSequence::multiply`], which has no ceiling.
/// Negative input is rejected with [`CalcError::InvalidInput`].
pub fn factorial(n: i64) -> Result<FactorialResult> {
    let start = Instant::now();

    if n < 0 {
        return Err(CalcError::InvalidInput { value: n });
    }

    let strategy = Strategy::for_input(n);
    let digits = match strategy {
        Strategy::FixedWidth => fixed_width(n),
        Strategy::ArbitraryPrecision => arbitrary_precision(n),
    };

    let elapsed = start.elapsed();
    tracing::debug!(
        number = n,
        algorithm = %strategy,
        digits = digits.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "factorial computed"
    );

    Ok(FactorialResult {
        digits,
        elapsed,
        strategy,
    })
}

fn fixed_width(n: i64) -> String {
    let mut result: i64 = 1;
    for i in 2..=n {
        result *= i;
    }
    result.to_string()
}

fn arbitrary_precision(n: i64) -> String {
    let mut result = DigitSequence::one();
    for i in 2..=n as u64 {
        result = result.multiply(&DigitSequence::from(i));
    }
    result.to_string()
}
