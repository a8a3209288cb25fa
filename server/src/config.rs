//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before [`Config::from_env`] runs. Parsing goes
//! through a lookup function so tests never touch the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::services::google::GoogleConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "https://pulse-portal-server.vercel.app";
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_IDENTITY_TOKEN_URL: &str = "https://securetoken.googleapis.com";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Identity provider REST endpoints and key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    pub base_url: String,
    pub token_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Remote camp API base, without trailing slash.
    pub api_url: String,
    pub identity: IdentityConfig,
    /// `None` disables federated sign-in.
    pub google: Option<GoogleConfig>,
    pub cookie_secure: bool,
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `IDENTITY_API_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PULSE_API_URL`: remote camp API base
    /// - `IDENTITY_BASE_URL` / `IDENTITY_TOKEN_URL`: provider REST bases
    /// - `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET` / `GOOGLE_REDIRECT_URI`
    /// - `COOKIE_SECURE`: inferred from the redirect URI scheme when absent
    /// - `UPSTREAM_TIMEOUT_SECS`: default 20
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a
    /// numeric/boolean variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let upstream_timeout_secs = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::Invalid { var: "UPSTREAM_TIMEOUT_SECS", value: raw }),
            },
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        let identity = IdentityConfig {
            api_key: get("IDENTITY_API_KEY").ok_or(ConfigError::Missing { var: "IDENTITY_API_KEY" })?,
            base_url: base_url(get("IDENTITY_BASE_URL"), DEFAULT_IDENTITY_BASE_URL),
            token_url: base_url(get("IDENTITY_TOKEN_URL"), DEFAULT_IDENTITY_TOKEN_URL),
        };

        let google = match (get("GOOGLE_CLIENT_ID"), get("GOOGLE_CLIENT_SECRET"), get("GOOGLE_REDIRECT_URI")) {
            (Some(client_id), Some(client_secret), Some(redirect_uri)) => {
                Some(GoogleConfig { client_id, client_secret, redirect_uri })
            }
            _ => None,
        };

        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => google
                .as_ref()
                .is_some_and(|g| g.redirect_uri.starts_with("https://")),
        };

        Ok(Self {
            port,
            api_url: base_url(get("PULSE_API_URL"), DEFAULT_API_URL),
            identity,
            google,
            cookie_secure,
            upstream_timeout_secs,
        })
    }
}

fn base_url(raw: Option<String>, default: &str) -> String {
    raw.unwrap_or_else(|| default.to_owned())
        .trim_end_matches('/')
        .to_owned()
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
