//! Google OAuth service: consent URL, state tokens, and code exchange.
//!
//! The exchanged Google id token is handed to the identity provider's IdP
//! sign-in, so accounts created this way live next to password accounts.

#[cfg(test)]
#[path = "google_test.rs"]
mod google_test;

use std::fmt::Write;

use rand::Rng;

pub const AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SCOPES: &str = "openid email profile";
pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Google OAuth client settings loaded from environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl GoogleConfig {
    /// Build the consent-screen URL carrying `state`.
    #[must_use]
    pub fn authorize_url(&self, state: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", SCOPES)
            .append_pair("state", state)
            .append_pair("prompt", "select_account")
            .finish();
        format!("{AUTHORIZE_URL}?{query}")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GoogleError {
    #[error("google token exchange failed: {0}")]
    TokenExchange(String),
    #[error("google token response missing id_token")]
    MissingIdToken,
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    #[serde(default)]
    id_token: Option<String>,
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Random 32-byte hex value for the OAuth CSRF cookie.
#[must_use]
pub fn generate_state() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Pull the id token out of a token endpoint reply.
///
/// # Errors
///
/// Returns [`GoogleError`] when the body is not JSON or lacks `id_token`.
pub fn parse_token_response(body: &str) -> Result<String, GoogleError> {
    let parsed: TokenResponse =
        serde_json::from_str(body).map_err(|_| GoogleError::TokenExchange(format!("unexpected response: {body}")))?;
    parsed
        .id_token
        .filter(|t| !t.is_empty())
        .ok_or(GoogleError::MissingIdToken)
}

/// Exchange an authorization code for a Google id token.
///
/// # Errors
///
/// Returns [`GoogleError`] on transport failure or a non-2xx reply.
pub async fn exchange_code(http: &reqwest::Client, config: &GoogleConfig, code: &str) -> Result<String, GoogleError> {
    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("code", code)
        .append_pair("client_id", &config.client_id)
        .append_pair("client_secret", &config.client_secret)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("grant_type", "authorization_code")
        .finish();
    let resp = http
        .post(TOKEN_URL)
        .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(form)
        .send()
        .await
        .map_err(|e| GoogleError::TokenExchange(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| GoogleError::TokenExchange(e.to_string()))?;
    if !status.is_success() {
        return Err(GoogleError::TokenExchange(format!("{status}: {body}")));
    }
    parse_token_response(&body)
}
