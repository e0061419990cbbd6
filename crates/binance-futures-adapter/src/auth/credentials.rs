/*
[INPUT]:  API key and secret strings (explicit or from environment)
[OUTPUT]: Validated credentials with a redacted secret
[POS]:    Auth layer - credential storage for signed endpoints
[UPDATE]: When credential sources or naming conventions change
*/

use std::env;
use std::fmt;

use crate::http::{FuturesError, Result};

pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// Secret key bytes. Never printed; `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(Vec<u8>);

impl ApiSecret {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    pub fn expose_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(***)")
    }
}

/// API key and secret pair for signed endpoints
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    api_key: String,
    secret: ApiSecret,
}

impl ApiCredentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<Vec<u8>>) -> Result<Self> {
        let api_key = api_key.into();
        let secret = ApiSecret::new(api_secret);
        if api_key.trim().is_empty() || secret.is_empty() {
            return Err(FuturesError::Config(
                "API key and secret must be provided.".to_string(),
            ));
        }
        Ok(Self { api_key, secret })
    }

    /// Read credentials from `BINANCE_API_KEY` / `BINANCE_API_SECRET`
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV).unwrap_or_default();
        let api_secret = env::var(API_SECRET_ENV).unwrap_or_default();
        if api_key.is_empty() || api_secret.is_empty() {
            return Err(FuturesError::Config(format!(
                "Environment variables {API_KEY_ENV} and {API_SECRET_ENV} must be set."
            )));
        }
        Self::new(api_key, api_secret)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn secret(&self) -> &ApiSecret {
        &self.secret
    }
}
