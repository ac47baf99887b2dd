use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Upper bound of the factorial path that fits in an `i64` (21! overflows).
pub const FIXED_WIDTH_LIMIT: i64 = 20;

/// Default largest factorial input accepted at the request boundary.
pub const DEFAULT_MAX_FACTORIAL_INPUT: i64 = 1000;

/// Largest factorial ceiling a deployment may configure.
pub const MAX_CONFIGURABLE_FACTORIAL_INPUT: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    FixedWidth,
    ArbitraryPrecision,
}

impl Strategy {
    pub fn for_input(n: i64) -> Self {
        if n > FIXED_WIDTH_LIMIT {
            Strategy::ArbitraryPrecision
        } else {
            Strategy::FixedWidth
        }
    }

    /// Label used in request logs.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::FixedWidth => "standard",
            Strategy::ArbitraryPrecision => "string-based",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorialResult {
    pub digits: String,
    pub elapsed: Duration,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimalityResult {
    pub number: i64,
    pub is_prime: bool,
}

/// Which operation a deployed handler serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcFunction {
    Factorial,
    Prime,
}

impl std::str::FromStr for CalcFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "factorial" => Ok(CalcFunction::Factorial),
            "prime" | "is-prime" | "prime-checker" => Ok(CalcFunction::Prime),
            other => Err(format!(
                "unknown function '{}', expected 'factorial' or 'prime'",
                other
            )),
        }
    }
}

impl fmt::Display for CalcFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcFunction::Factorial => f.write_str("factorial"),
            CalcFunction::Prime => f.write_str("prime"),
        }
    }
}
