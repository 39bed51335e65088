use std::env;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts;

/// Process-wide configuration, built once at startup and shared read-only.
///
/// The signing secret in particular is never read from the environment again
/// after this point; request-handling code only ever sees it through the
/// `TokenCodec` built from this struct.
#[derive(Clone)]
pub struct Config {
    secret_key: String,
    token_ttl_seconds: i64,
    token_cookie_name: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

impl Config {
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }
    pub fn token_cookie_name(&self) -> &str {
        &self.token_cookie_name
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let secret_key = req_var(consts::env::SECRET_KEY_ENV_VAR)?;
        if secret_key.is_empty() {
            return Err(ConfigError::Invalid(consts::env::SECRET_KEY_ENV_VAR));
        }

        let token_ttl_seconds = match opt_var(consts::env::TOKEN_TTL_SECONDS_ENV_VAR) {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|ttl| *ttl > 0)
                .ok_or(ConfigError::Invalid(consts::env::TOKEN_TTL_SECONDS_ENV_VAR))?,
            None => consts::DEFAULT_TOKEN_TTL_SECONDS,
        };

        let token_cookie_name = opt_var(consts::env::TOKEN_COOKIE_NAME_ENV_VAR)
            .unwrap_or_else(|| consts::TOKEN_COOKIE_NAME.to_owned());

        Ok(Self {
            secret_key,
            token_ttl_seconds,
            token_cookie_name,
        })
    }

    /// Configuration for tests: fixed secret, default TTL, default cookie
    /// name, no environment access.
    pub fn for_tests(secret: &str) -> Self {
        Self {
            secret_key: secret.to_owned(),
            token_ttl_seconds: consts::DEFAULT_TOKEN_TTL_SECONDS,
            token_cookie_name: consts::TOKEN_COOKIE_NAME.to_owned(),
        }
    }
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}
