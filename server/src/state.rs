//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds no entity data: only the parsed config, the identity provider, and
//! the HTTP client used for the `/api` forwarder and the Google exchange.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::services::identity::IdentityProvider;

/// Clone is required by Axum; every field is Arc-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub identity: Arc<dyn IdentityProvider>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be built.
    pub fn new(config: Config, identity: Arc<dyn IdentityProvider>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), identity, http })
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use super::*;
    use crate::config::IdentityConfig;

    pub(crate) fn test_config() -> Config {
        Config {
            port: 0,
            api_url: "http://127.0.0.1:9".to_owned(),
            identity: IdentityConfig {
                api_key: "test-key".to_owned(),
                base_url: "http://127.0.0.1:9".to_owned(),
                token_url: "http://127.0.0.1:9".to_owned(),
            },
            google: None,
            cookie_secure: false,
            upstream_timeout_secs: 5,
        }
    }

    pub(crate) fn test_app_state(config: Config, identity: Arc<dyn IdentityProvider>) -> AppState {
        AppState::new(config, identity).expect("test http client")
    }
}
