use crate::utils::error::{CalcError, Result};
use serde::Deserialize;
use serde_json::Value;

pub const INVALID_FORMAT_MESSAGE: &str = "Invalid request format";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please provide a valid number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedEvent {
    /// `OPTIONS` request; answered with CORS headers only.
    Preflight,
    Number(i64),
}

#[derive(Debug, Deserialize)]
struct NumberRequest {
    number: NumberField,
}

// Browsers and curl users send both `{"number": 7}` and `{"number": "7"}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberField {
    Integer(i64),
    Text(String),
}

impl NumberField {
    fn into_i64(self) -> Option<i64> {
        match self {
            NumberField::Integer(n) => Some(n),
            NumberField::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn invalid(message: &str) -> CalcError {
    CalcError::InvalidRequest {
        message: message.to_string(),
    }
}

/// Extracts the integer argument from an API gateway proxy event.
///
/// `body` may be a JSON-encoded string (the gateway default) or an already
/// decoded object (direct invocation).
pub fn parse_event(event: &Value) -> Result<ParsedEvent> {
    let event = event.as_object().ok_or_else(|| invalid(INVALID_FORMAT_MESSAGE))?;

    if event
        .get("httpMethod")
        .and_then(Value::as_str)
        .is_some_and(|method| method.eq_ignore_ascii_case("OPTIONS"))
    {
        return Ok(ParsedEvent::Preflight);
    }

    let body = match event.get("body") {
        Some(Value::String(text)) => {
            serde_json::from_str::<Value>(text).map_err(|_| invalid(INVALID_NUMBER_MESSAGE))?
        }
        Some(obj @ Value::Object(_)) => obj.clone(),
        _ => return Err(invalid(INVALID_BODY_MESSAGE)),
    };

    let request: NumberRequest =
        serde_json::from_value(body).map_err(|_| invalid(INVALID_NUMBER_MESSAGE))?;
    request
        .number
        .into_i64()
        .map(ParsedEvent::Number)
        .ok_or_else(|| invalid(INVALID_NUMBER_MESSAGE))
}
