//! Raw responses returned by every endpoint call.
//!
//! The service reports failures as non-2xx responses with a
//! `{"success": false, "message": ...}` body, so a non-2xx status is not an
//! error here. Callers inspect the status and body themselves.

use anyhow::Result;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Status code and decoded body of a single call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Value,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// Reads the whole body of `response`.
    ///
    /// An empty body becomes `Value::Null`; a body that is not JSON (the
    /// service answers some failures with an HTML page) is kept as a
    /// `Value::String`.
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            anyhow::anyhow!("Failed to read response body ({}): {}", status, e)
        })?;

        Ok(Self::new(status, decode_body(text)))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }

    /// The `success` flag of the body, if present.
    pub fn success(&self) -> Option<bool> {
        self.body.get("success").and_then(Value::as_bool)
    }

    /// The `message` string of the body, if present.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Looks up a nested value by JSON pointer, e.g. `/order/number`.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.body.pointer(pointer)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone()).map_err(|e| {
            tracing::error!("Failed to decode response body: {}", e);
            anyhow::anyhow!("Invalid response body ({}): {}", self.status, e)
        })
    }

    pub fn error_for_status(self) -> Result<Self> {
        if !self.is_success() {
            match self.message() {
                Some(message) => anyhow::bail!("Request failed with status {}: {}", self.status, message),
                None => anyhow::bail!("Request failed with status {}", self.status),
            }
        }
        Ok(self)
    }
}

fn decode_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    }
}
