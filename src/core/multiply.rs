//! Exact decimal multiplication over digit sequences.

use crate::utils::error::{CalcError, Result};
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

/// Canonical non-negative decimal integer.
///
/// Digits are stored least-significant first. The vector is never empty and
/// never ends in a zero unless it is exactly `[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitSequence {
    digits: Vec<u8>,
}

impl DigitSequence {
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    pub fn one() -> Self {
        Self { digits: vec![1] }
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Number of decimal digits in the canonical form.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Grade-school long multiplication with the carry pushed one cell up
    /// as soon as each digit pair is added.
    pub fn multiply(&self, other: &DigitSequence) -> DigitSequence {
        let mut acc = vec![0u32; self.digits.len() + other.digits.len()];

        for (i, &da) in self.digits.iter().enumerate() {
            for (j, &db) in other.digits.iter().enumerate() {
                let sum = u32::from(da) * u32::from(db) + acc[i + j];
                acc[i + j] = sum % 10;
                acc[i + j + 1] += sum / 10;
            }
        }

        Self::from_accumulator(acc)
    }

    fn from_accumulator(mut acc: Vec<u32>) -> Self {
        while acc.len() > 1 && acc.last() == Some(&0) {
            acc.pop();
        }
        // Every cell below the top one was reduced mod 10 by a later pair, and
        // the top cell cannot exceed 9 because the product fits in the buffer.
        let digits = acc.into_iter().map(|cell| cell as u8).collect();
        Self { digits }
    }
}

impl FromStr for DigitSequence {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(CalcError::InvalidDigitSequence {
                value: s.to_string(),
            });
        }

        let mut digits = Vec::with_capacity(s.len());
        for c in s.chars().rev() {
            let d = c.to_digit(10).ok_or_else(|| CalcError::InvalidDigitSequence {
                value: s.to_string(),
            })?;
            digits.push(d as u8);
        }

        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        Ok(Self { digits })
    }
}

impl From<u64> for DigitSequence {
    fn from(mut value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let mut digits = Vec::new();
        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }
        Self { digits }
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self
            .digits
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect();
        f.write_str(&text)
    }
}

impl Mul for &DigitSequence {
    type Output = DigitSequence;

    fn mul(self, rhs: Self) -> DigitSequence {
        self.multiply(rhs)
    }
}

impl Mul for DigitSequence {
    type Output = DigitSequence;

    fn mul(self, rhs: DigitSequence) -> DigitSequence {
        self.multiply(&rhs)
    }
}

/// Multiplies two decimal strings and returns the canonical product.
///
/// Leading zeros on the operands are accepted. Any character outside `0-9`,
/// or an empty operand, is rejected with [`CalcError::InvalidDigitSequence`].
pub fn multiply(a: &str, b: &str) -> Result<String> {
    let lhs: DigitSequence = a.parse()?;
    let rhs: DigitSequence = b.parse()?;
    Ok(lhs.multiply(&rhs).to_string())
}
