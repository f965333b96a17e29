use gloo_net::http::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::ApiError;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub ok: bool,
    pub status: u16,
    pub body: String,
}

// Generic request executor with error handling
pub async fn execute_request(label: &str, request: RequestBuilder) -> Result<RawResponse, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{} failed: {}", label, e)))?;

    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("{} body unreadable: {}", label, e)))?;

    web_sys::console::log_1(&format!("{} -> HTTP {}", label, status).into());

    Ok(RawResponse { ok, status, body })
}

impl RawResponse {
    /// Decodes a 2xx body as `T`; a non-2xx status becomes `ApiError::Status`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if !self.ok {
            return Err(self.status_error());
        }
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The `message` of a 2xx `{message}` reply. Any JSON body counts as
    /// success; one without a usable `message` yields `None`.
    pub fn message(&self) -> Result<Option<String>, ApiError> {
        let reply: Value = self.json()?;
        Ok(reply.get("message").and_then(value_text))
    }

    fn status_error(&self) -> ApiError {
        // Error bodies are read leniently: a non-JSON body just has no detail
        let detail = serde_json::from_str::<Value>(&self.body)
            .ok()
            .as_ref()
            .and_then(|reply| reply.get("detail"))
            .and_then(value_text);
        ApiError::Status { status: self.status, detail }
    }
}

// Strings pass through; validation errors arrive as a list of {msg} objects
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
