use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API gateway proxy response envelope. `body` holds serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn cors_headers() -> BTreeMap<String, String> {
    [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Headers", "Content-Type"),
        ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl ApiResponse {
    pub fn ok<T: Serialize>(payload: &T) -> Result<Self> {
        Ok(Self {
            status_code: 200,
            headers: cors_headers(),
            body: serde_json::to_string(payload)?,
        })
    }

    /// Answer to a CORS preflight: headers only.
    pub fn preflight() -> Self {
        Self {
            status_code: 200,
            headers: cors_headers(),
            body: String::new(),
        }
    }

    pub fn error(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            headers: cors_headers(),
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }

    /// Client errors keep their message; everything else is masked.
    pub fn from_error(err: &CalcError) -> Self {
        if err.is_client_error() {
            Self::error(err.status_code(), &err.user_friendly_message())
        } else {
            Self::error(500, INTERNAL_ERROR_MESSAGE)
        }
    }

    /// Decodes `body` for callers that want the payload back, mostly tests.
    pub fn json_body(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
