//! Identity provider bridge: password and federated sign-in, token refresh,
//! account lookup, and profile/email updates over the provider's REST API.
//!
//! DESIGN
//! ======
//! Handlers only see the [`IdentityProvider`] trait so route tests can swap
//! in a mock. Wire parsing lives in free functions for the same reason.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::time::Duration;

use axum::http::StatusCode;
use pulse_client::net::types::SessionUser;
use serde::Deserialize;

use crate::config::IdentityConfig;

const CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// ERROR
// =============================================================================

/// Identity failures. `Provider` carries the provider's error code
/// (`EMAIL_EXISTS`, `INVALID_PASSWORD`, ...) and displays as a user message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("{}", provider_message(code))]
    Provider { code: String },
    #[error("identity request failed: {0}")]
    Request(String),
    #[error("unexpected identity response: {0}")]
    Decode(String),
    #[error("identity client build failed: {0}")]
    ClientBuild(String),
}

impl IdentityError {
    /// Bare code without the provider's trailing detail
    /// (`WEAK_PASSWORD : Password should be ...` becomes `WEAK_PASSWORD`).
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Provider { code } => code.split([' ', ':']).next().filter(|c| !c.is_empty()),
            _ => None,
        }
    }

    /// True when the presented token is no longer usable.
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(
            self.code(),
            Some(
                "TOKEN_EXPIRED"
                    | "INVALID_ID_TOKEN"
                    | "USER_NOT_FOUND"
                    | "CREDENTIAL_TOO_OLD_LOGIN_AGAIN"
                    | "INVALID_REFRESH_TOKEN"
            )
        )
    }
}

/// User-facing text for a provider error code.
#[must_use]
pub fn provider_message(code: &str) -> &'static str {
    let bare = code.split([' ', ':']).next().unwrap_or_default();
    match bare {
        "EMAIL_EXISTS" => "An account with this email already exists.",
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => "Invalid email or password.",
        "USER_DISABLED" => "This account has been disabled.",
        "WEAK_PASSWORD" => "Password should be at least 6 characters.",
        "INVALID_EMAIL" | "MISSING_EMAIL" => "Please enter a valid email address.",
        "MISSING_PASSWORD" => "Please enter your password.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Please try again later.",
        "TOKEN_EXPIRED" | "INVALID_ID_TOKEN" | "USER_NOT_FOUND" | "CREDENTIAL_TOO_OLD_LOGIN_AGAIN"
        | "INVALID_REFRESH_TOKEN" => "Please sign in again.",
        "INVALID_IDP_RESPONSE" => "Google sign-in failed.",
        _ => "Authentication failed.",
    }
}

pub fn identity_to_status(err: &IdentityError) -> StatusCode {
    match err {
        IdentityError::Provider { .. } => match err.code() {
            Some("EMAIL_EXISTS") => StatusCode::CONFLICT,
            Some("TOO_MANY_ATTEMPTS_TRY_LATER") => StatusCode::TOO_MANY_REQUESTS,
            Some("USER_DISABLED") => StatusCode::FORBIDDEN,
            Some("WEAK_PASSWORD" | "INVALID_EMAIL" | "MISSING_EMAIL" | "MISSING_PASSWORD") => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNAUTHORIZED,
        },
        IdentityError::Request(_) | IdentityError::Decode(_) => StatusCode::BAD_GATEWAY,
        IdentityError::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// TYPES
// =============================================================================

/// Tokens plus account summary returned by a sign-in.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentitySession {
    pub id_token: String,
    pub refresh_token: String,
    pub user: SessionUser,
}

/// Replacement tokens after a refresh or an email change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshedTokens {
    pub id_token: String,
    pub refresh_token: String,
}

/// Provider-neutral identity operations. Enables mocking in tests.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<IdentitySession, IdentityError>;

    async fn update_profile(
        &self,
        id_token: &str,
        display_name: Option<&str>,
        photo_url: Option<&str>,
    ) -> Result<(), IdentityError>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<IdentitySession, IdentityError>;

    /// Sign in with a Google id token obtained from the OAuth code exchange.
    async fn sign_in_with_google(&self, google_id_token: &str, request_uri: &str)
    -> Result<IdentitySession, IdentityError>;

    async fn lookup(&self, id_token: &str) -> Result<SessionUser, IdentityError>;

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedTokens, IdentityError>;

    async fn change_email(&self, id_token: &str, email: &str) -> Result<RefreshedTokens, IdentityError>;
}

// =============================================================================
// WIRE PARSING
// =============================================================================

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    id_token: String,
    refresh_token: String,
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default, alias = "profilePicture")]
    photo_url: Option<String>,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    id_token: String,
    refresh_token: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateResponse {
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Error from a non-2xx provider body; unknown shapes become `Decode`.
#[must_use]
pub fn parse_error(body: &str) -> IdentityError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => IdentityError::Provider { code: envelope.error.message },
        _ => IdentityError::Decode(body.chars().take(200).collect()),
    }
}

/// # Errors
///
/// Returns [`IdentityError::Decode`] for malformed bodies.
pub fn parse_sign_in(body: &str) -> Result<IdentitySession, IdentityError> {
    let parsed: SignInResponse = serde_json::from_str(body).map_err(|e| IdentityError::Decode(e.to_string()))?;
    Ok(IdentitySession {
        id_token: parsed.id_token,
        refresh_token: parsed.refresh_token,
        user: SessionUser {
            uid: parsed.local_id,
            email: parsed.email,
            display_name: non_empty(parsed.display_name),
            photo_url: non_empty(parsed.photo_url),
        },
    })
}

/// # Errors
///
/// Returns [`IdentityError::Decode`] for malformed bodies and a
/// `USER_NOT_FOUND` provider error when the token matches no account.
pub fn parse_lookup(body: &str) -> Result<SessionUser, IdentityError> {
    let parsed: LookupResponse = serde_json::from_str(body).map_err(|e| IdentityError::Decode(e.to_string()))?;
    let user = parsed
        .users
        .into_iter()
        .next()
        .ok_or_else(|| IdentityError::Provider { code: "USER_NOT_FOUND".to_owned() })?;
    Ok(SessionUser {
        uid: user.local_id,
        email: user.email,
        display_name: non_empty(user.display_name),
        photo_url: non_empty(user.photo_url),
    })
}

/// # Errors
///
/// Returns [`IdentityError::Decode`] for malformed bodies.
pub fn parse_refresh(body: &str) -> Result<RefreshedTokens, IdentityError> {
    let parsed: TokenResponse = serde_json::from_str(body).map_err(|e| IdentityError::Decode(e.to_string()))?;
    Ok(RefreshedTokens { id_token: parsed.id_token, refresh_token: parsed.refresh_token })
}

/// # Errors
///
/// Returns [`IdentityError::Decode`] when the reply lacks new tokens.
pub fn parse_email_change(body: &str) -> Result<RefreshedTokens, IdentityError> {
    let parsed: UpdateResponse = serde_json::from_str(body).map_err(|e| IdentityError::Decode(e.to_string()))?;
    match (non_empty(parsed.id_token), non_empty(parsed.refresh_token)) {
        (Some(id_token), Some(refresh_token)) => Ok(RefreshedTokens { id_token, refresh_token }),
        _ => Err(IdentityError::Decode("email change returned no tokens".to_owned())),
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// REST client for the identity toolkit and secure-token endpoints.
pub struct IdentityToolkit {
    http: reqwest::Client,
    config: IdentityConfig,
}

impl IdentityToolkit {
    /// # Errors
    ///
    /// Returns [`IdentityError::ClientBuild`] if the HTTP client fails to build.
    pub fn new(config: IdentityConfig, timeout_secs: u64) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| IdentityError::ClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn accounts_url(&self, method: &str) -> String {
        format!("{}/v1/accounts:{method}?key={}", self.config.base_url, self.config.api_key)
    }

    fn token_url(&self) -> String {
        format!("{}/v1/token?key={}", self.config.token_url, self.config.api_key)
    }

    async fn read(resp: reqwest::Response) -> Result<String, IdentityError> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| IdentityError::Request(e.to_string()))?;
        if status.is_success() { Ok(body) } else { Err(parse_error(&body)) }
    }

    async fn post_accounts(&self, method: &str, body: serde_json::Value) -> Result<String, IdentityError> {
        let resp = self
            .http
            .post(self.accounts_url(method))
            .json(&body)
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;
        Self::read(resp).await
    }
}

#[async_trait::async_trait]
impl IdentityProvider for IdentityToolkit {
    async fn sign_up(&self, email: &str, password: &str) -> Result<IdentitySession, IdentityError> {
        let body = serde_json::json!({ "email": email, "password": password, "returnSecureToken": true });
        parse_sign_in(&self.post_accounts("signUp", body).await?)
    }

    async fn update_profile(
        &self,
        id_token: &str,
        display_name: Option<&str>,
        photo_url: Option<&str>,
    ) -> Result<(), IdentityError> {
        let mut body = serde_json::json!({ "idToken": id_token, "returnSecureToken": false });
        if let Some(name) = display_name {
            body["displayName"] = serde_json::Value::from(name);
        }
        if let Some(url) = photo_url {
            body["photoUrl"] = serde_json::Value::from(url);
        }
        self.post_accounts("update", body).await.map(|_| ())
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<IdentitySession, IdentityError> {
        let body = serde_json::json!({ "email": email, "password": password, "returnSecureToken": true });
        parse_sign_in(&self.post_accounts("signInWithPassword", body).await?)
    }

    async fn sign_in_with_google(
        &self,
        google_id_token: &str,
        request_uri: &str,
    ) -> Result<IdentitySession, IdentityError> {
        let post_body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("id_token", google_id_token)
            .append_pair("providerId", "google.com")
            .finish();
        let body = serde_json::json!({
            "postBody": post_body,
            "requestUri": request_uri,
            "returnSecureToken": true,
            "returnIdpCredential": true,
        });
        parse_sign_in(&self.post_accounts("signInWithIdp", body).await?)
    }

    async fn lookup(&self, id_token: &str) -> Result<SessionUser, IdentityError> {
        let body = serde_json::json!({ "idToken": id_token });
        parse_lookup(&self.post_accounts("lookup", body).await?)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedTokens, IdentityError> {
        let form = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", "refresh_token")
            .append_pair("refresh_token", refresh_token)
            .finish();
        let resp = self
            .http
            .post(self.token_url())
            .header(reqwest::header::CONTENT_TYPE, super::google::FORM_CONTENT_TYPE)
            .body(form)
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;
        parse_refresh(&Self::read(resp).await?)
    }

    async fn change_email(&self, id_token: &str, email: &str) -> Result<RefreshedTokens, IdentityError> {
        let body = serde_json::json!({ "idToken": id_token, "email": email, "returnSecureToken": true });
        parse_email_change(&self.post_accounts("update", body).await?)
    }
}
