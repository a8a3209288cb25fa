//! `/api/*` forwarder to the remote camp API.
//!
//! The browser calls same-origin `/api/<path>`; this handler replays the
//! request against `PULSE_API_URL/<path>` with the session id token as a
//! bearer header and streams back status, content type, and body.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;

use super::auth::id_token;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid api path")]
    InvalidPath,
    #[error("upstream timed out")]
    Timeout,
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

pub fn proxy_to_status(err: &ProxyError) -> StatusCode {
    match err {
        ProxyError::InvalidPath => StatusCode::BAD_REQUEST,
        ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e.to_string()) }
    }
}

/// Reject empty, absolute, and dot-segment paths.
#[must_use]
pub fn is_safe_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && path
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

/// `base/path?query`, or `None` for an unsafe path.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> Option<String> {
    if !is_safe_path(path) {
        return None;
    }
    let base = base.trim_end_matches('/');
    Some(match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    })
}

async fn send(
    state: &AppState,
    method: Method,
    url: String,
    bearer: Option<String>,
    content_type: Option<HeaderValue>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let mut req = state.http.request(method, url);
    if let Some(token) = bearer {
        req = req.bearer_auth(token);
    }
    if let Some(ct) = content_type {
        req = req.header(header::CONTENT_TYPE, ct);
    }
    if !body.is_empty() {
        req = req.body(body);
    }

    let resp = req.send().await?;
    let status = resp.status();
    let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = resp.bytes().await?;

    Ok(match content_type {
        Some(ct) => (status, [(header::CONTENT_TYPE, ct)], bytes).into_response(),
        None => (status, bytes).into_response(),
    })
}

/// `ANY /api/{*path}`.
pub async fn forward(
    State(state): State<AppState>,
    jar: CookieJar,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let result = match upstream_url(&state.config.api_url, &path, query.as_deref()) {
        Some(url) => {
            let content_type = headers.get(header::CONTENT_TYPE).cloned();
            send(&state, method.clone(), url, id_token(&jar), content_type, body).await
        }
        None => Err(ProxyError::InvalidPath),
    };

    result.unwrap_or_else(|e| {
        tracing::error!(error = %e, %method, %path, "api forward failed");
        (proxy_to_status(&e), Json(serde_json::json!({ "error": e.to_string() }))).into_response()
    })
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
