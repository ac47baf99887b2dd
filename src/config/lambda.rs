use crate::domain::model::{
    CalcFunction, DEFAULT_MAX_FACTORIAL_INPUT, MAX_CONFIGURABLE_FACTORIAL_INPUT,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_range, Validate};
use std::collections::HashMap;
use std::env;

/// Settings for one deployed function, read from its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    pub function: CalcFunction,
    pub max_factorial_input: i64,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let vars: HashMap<String, String> = env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Same as [`LambdaConfig::from_env`] over an explicit variable map.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let function: CalcFunction = match vars.get("CALC_FUNCTION") {
            Some(raw) => raw
                .parse::<CalcFunction>()
                .map_err(|reason| CalcError::InvalidConfigValueError {
                    field: "CALC_FUNCTION".to_string(),
                    value: raw.clone(),
                    reason,
                })?,
            None => CalcFunction::Factorial,
        };

        let max_factorial_input: i64 = match vars.get("MAX_FACTORIAL_INPUT") {
            Some(raw) => {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| CalcError::InvalidConfigValueError {
                        field: "MAX_FACTORIAL_INPUT".to_string(),
                        value: raw.clone(),
                        reason: "must be an integer".to_string(),
                    })?
            }
            None => DEFAULT_MAX_FACTORIAL_INPUT,
        };

        Ok(Self {
            function,
            max_factorial_input,
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn max_factorial_input(&self) -> i64 {
        self.max_factorial_input
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_range(
            "MAX_FACTORIAL_INPUT",
            self.max_factorial_input,
            0,
            MAX_CONFIGURABLE_FACTORIAL_INPUT,
        )?;

        tracing::info!(function = %self.function, "✅ Lambda configuration validation passed");
        Ok(())
    }
}
