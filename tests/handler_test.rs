use anyhow::Result;
use serde_json::json;
use small_numerics::app::handlers::{FactorialResponse, PrimeResponse};
use small_numerics::app::{handle_factorial_event, handle_prime_event};
use small_numerics::{handle_event, CalcFunction, LambdaConfig, Settings};

fn gateway_event(body: &str) -> serde_json::Value {
    json!({
        "httpMethod": "POST",
        "path": "/factorial",
        "headers": { "Content-Type": "application/json" },
        "body": body,
    })
}

#[test]
fn test_factorial_event_success() -> Result<()> {
    let resp = handle_factorial_event(
        &gateway_event(r#"{"number": 21}"#),
        &Settings::default(),
        "req-21",
    );

    assert_eq!(resp.status_code, 200);
    assert_eq!(resp.headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(resp.headers["Content-Type"], "application/json");

    let body: FactorialResponse = serde_json::from_str(&resp.body)?;
    assert_eq!(body.number, 21);
    assert_eq!(body.factorial, "51090942171709440000");
    assert_eq!(body.message, "Factorial of 21 calculated successfully");

    let raw = resp.json_body()?;
    assert!(raw.get("calculationTime").is_some());
    assert!(raw.get("executionTime").is_some());
    Ok(())
}

#[test]
fn test_factorial_event_range_limits() -> Result<()> {
    let settings = Settings::default();

    let max = handle_factorial_event(&gateway_event(r#"{"number": 1000}"#), &settings, "max");
    assert_eq!(max.status_code, 200);
    let body: FactorialResponse = serde_json::from_str(&max.body)?;
    assert_eq!(body.factorial.len(), 2568);

    let over = handle_factorial_event(&gateway_event(r#"{"number": 1001}"#), &settings, "over");
    assert_eq!(over.status_code, 400);
    assert_eq!(over.json_body()?["error"], "Number must be between 0 and 1000");
    Ok(())
}

#[test]
fn test_prime_event_success() -> Result<()> {
    let resp = handle_prime_event(
        &gateway_event(r#"{"number": "97"}"#),
        &Settings::default(),
        "req-97",
    );
    assert_eq!(resp.status_code, 200);

    let body: PrimeResponse = serde_json::from_str(&resp.body)?;
    assert!(body.is_prime);
    assert_eq!(body.message, "97 is a prime number");
    assert_eq!(resp.json_body()?["isPrime"], true);
    Ok(())
}

#[test]
fn test_prime_event_accepts_negative_numbers() -> Result<()> {
    let resp = handle_prime_event(&gateway_event(r#"{"number": -7}"#), &Settings::default(), "neg");
    assert_eq!(resp.status_code, 200);
    assert_eq!(resp.json_body()?["message"], "-7 is not a prime number");
    Ok(())
}

#[test]
fn test_preflight_and_malformed_requests() -> Result<()> {
    let settings = Settings::default();

    let preflight = handle_factorial_event(&json!({ "httpMethod": "OPTIONS" }), &settings, "opt");
    assert_eq!(preflight.status_code, 200);
    assert!(preflight.body.is_empty());
    assert_eq!(preflight.headers["Access-Control-Allow-Methods"], "POST, OPTIONS");

    let no_body = handle_prime_event(&json!({ "httpMethod": "POST" }), &settings, "nobody");
    assert_eq!(no_body.status_code, 400);
    assert_eq!(no_body.json_body()?["error"], "Invalid request body");

    let bad_number = handle_factorial_event(&gateway_event(r#"{"number": "ten"}"#), &settings, "bad");
    assert_eq!(bad_number.status_code, 400);
    assert_eq!(
        bad_number.json_body()?["error"],
        "Invalid input. Please provide a valid number."
    );
    assert_eq!(bad_number.headers["Access-Control-Allow-Origin"], "*");
    Ok(())
}

#[test]
fn test_lambda_config_drives_dispatch() -> Result<()> {
    let vars = [("CALC_FUNCTION".to_string(), "prime".to_string())]
        .into_iter()
        .collect();
    let config = LambdaConfig::from_vars(&vars)?;
    assert_eq!(config.function, CalcFunction::Prime);

    let resp = handle_event(config.function, &gateway_event(r#"{"number": 4}"#), &config, "cfg");
    assert_eq!(resp.status_code, 200);
    assert_eq!(resp.json_body()?["isPrime"], false);
    Ok(())
}

#[test]
fn test_envelope_serializes_like_api_gateway() -> Result<()> {
    let resp = handle_factorial_event(&gateway_event(r#"{"number": 5}"#), &Settings::default(), "env");
    let envelope = serde_json::to_value(&resp)?;
    assert_eq!(envelope["statusCode"], 200);
    assert!(envelope["body"].as_str().unwrap_or_default().contains("\"factorial\":\"120\""));
    Ok(())
}
