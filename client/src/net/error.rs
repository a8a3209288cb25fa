//! Failure type shared by every REST and identity call.
//!
//! The `Display` text is what pages show in toasts, so messages stay short
//! and user-facing.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a remote call did not produce the expected payload.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The body could not be decoded into the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Browser-only call attempted during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a `Status` error, preferring the `error`/`message` field of a JSON
    /// body over the generic status text.
    #[must_use]
    pub fn from_status(status: u16, body: Option<&str>) -> Self {
        let message = body
            .and_then(extract_error_message)
            .unwrap_or_else(|| format!("request failed: {status}"));
        Self::Status { status, message }
    }

    /// True when the server said the caller is not signed in.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .filter_map(|key| value.get(*key))
        .find_map(|v| match v {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
            serde_json::Value::Object(inner) => inner
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
            _ => None,
        })
}
