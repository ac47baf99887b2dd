use crate::app::request::{parse_event, ParsedEvent};
use crate::app::response::ApiResponse;
use crate::core::{factorial::factorial, prime};
use crate::domain::model::{CalcFunction, Strategy};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_input_range;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorialResponse {
    pub number: i64,
    pub factorial: String,
    pub message: String,
    /// Seconds spent inside the factorial engine.
    pub calculation_time: f64,
    /// Seconds since the request was received.
    pub execution_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimeResponse {
    pub number: i64,
    pub is_prime: bool,
    pub message: String,
    pub execution_time: f64,
}

/// Range-checks `number` against the configured ceiling and computes `number!`.
pub fn factorial_response<C: ConfigProvider>(
    number: i64,
    config: &C,
    started: Instant,
) -> Result<FactorialResponse> {
    let max = config.max_factorial_input();
    if let Err(e) = validate_input_range(number, 0, max) {
        tracing::warn!(number, valid_range = %format!("0-{}", max), "Input out of range");
        return Err(e);
    }

    tracing::info!(
        number,
        algorithm = %Strategy::for_input(number),
        "Processing factorial calculation"
    );

    let result = factorial(number)?;
    let calculation_time = result.elapsed.as_secs_f64();
    let execution_time = started.elapsed().as_secs_f64();

    tracing::info!(
        number,
        result_length = result.digits.len(),
        calculation_time,
        total_execution_time = execution_time,
        algorithm = %result.strategy,
        "Factorial calculation completed"
    );

    Ok(FactorialResponse {
        number,
        message: format!("Factorial of {} calculated successfully", number),
        factorial: result.digits,
        calculation_time,
        execution_time,
    })
}

pub fn prime_response(number: i64, started: Instant) -> PrimeResponse {
    tracing::info!(number, "Processing prime check");

    let calculation_start = Instant::now();
    let result = prime::check(number);
    let calculation_time = calculation_start.elapsed().as_secs_f64();
    let execution_time = started.elapsed().as_secs_f64();

    tracing::info!(
        number,
        is_prime = result.is_prime,
        calculation_time,
        total_execution_time = execution_time,
        "Prime check completed"
    );

    let message = if result.is_prime {
        format!("{} is a prime number", number)
    } else {
        format!("{} is not a prime number", number)
    };

    PrimeResponse {
        number,
        is_prime: result.is_prime,
        message,
        execution_time,
    }
}

pub fn handle_factorial_event<C: ConfigProvider>(
    event: &Value,
    config: &C,
    request_id: &str,
) -> ApiResponse {
    handle_event(CalcFunction::Factorial, event, config, request_id)
}

pub fn handle_prime_event<C: ConfigProvider>(
    event: &Value,
    config: &C,
    request_id: &str,
) -> ApiResponse {
    handle_event(CalcFunction::Prime, event, config, request_id)
}

/// Runs one API gateway event through `function` and always produces a
/// response envelope; failures become 4xx/5xx bodies.
pub fn handle_event<C: ConfigProvider>(
    function: CalcFunction,
    event: &Value,
    config: &C,
    request_id: &str,
) -> ApiResponse {
    let started = Instant::now();
    let span = tracing::info_span!("request", request_id, %function);
    let _guard = span.enter();

    tracing::info!("Request started");

    let outcome = parse_event(event).and_then(|parsed| match parsed {
        ParsedEvent::Preflight => {
            tracing::info!("CORS preflight request handled");
            Ok(ApiResponse::preflight())
        }
        ParsedEvent::Number(number) => match function {
            CalcFunction::Factorial => {
                factorial_response(number, config, started).and_then(|r| ApiResponse::ok(&r))
            }
            CalcFunction::Prime => ApiResponse::ok(&prime_response(number, started)),
        },
    });

    outcome.unwrap_or_else(|e| {
        if e.is_client_error() {
            tracing::warn!(error = %e, "Request rejected");
        } else {
            tracing::error!(error = %e, "Error processing request");
        }
        ApiResponse::from_error(&e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DEFAULT_MAX_FACTORIAL_INPUT;
    use serde_json::json;

    struct Limits(i64);

    impl ConfigProvider for Limits {
        fn max_factorial_input(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_factorial_response_fields() {
        let resp =
            factorial_response(5, &Limits(DEFAULT_MAX_FACTORIAL_INPUT), Instant::now()).unwrap();
        assert_eq!(resp.factorial, "120");
        assert_eq!(resp.message, "Factorial of 5 calculated successfully");
        assert!(resp.calculation_time >= 0.0);
        assert!(resp.execution_time >= resp.calculation_time);
    }

    #[test]
    fn test_factorial_respects_configured_ceiling() {
        assert!(factorial_response(30, &Limits(25), Instant::now()).is_err());
        assert!(factorial_response(25, &Limits(25), Instant::now()).is_ok());
    }

    #[test]
    fn test_prime_messages() {
        assert_eq!(prime_response(7, Instant::now()).message, "7 is a prime number");
        assert_eq!(prime_response(9, Instant::now()).message, "9 is not a prime number");
    }

    #[test]
    fn test_handle_event_negative_factorial_is_range_error() {
        let event = json!({ "body": "{\"number\": -3}" });
        let resp = handle_factorial_event(&event, &Limits(1000), "req-1");
        assert_eq!(resp.status_code, 400);
        assert_eq!(
            resp.json_body().unwrap()["error"],
            "Number must be between 0 and 1000"
        );
    }
}
