use std::{env, time::Duration};
use strum_macros::Display;

/// Environment variable holding the API server root.
pub const AUTH_SERVER_VAR: &str = "API_AUTH_SERVER";
/// Environment variable holding the request timeout in seconds.
pub const REQUEST_TIMEOUT_VAR: &str = "API_REQUEST_TIMEOUT_SECS";

const DEFAULT_AUTH_SERVER: &str = "http://localhost:5000";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Process-wide API configuration, resolved once at startup and never reloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEnvironment {
    /// Server root without a trailing slash, e.g. `"http://localhost:5000"`.
    auth_server: String,
    /// Timeout applied to every request issued by the shared client.
    request_timeout: Duration,
}

impl ApiEnvironment {
    /// Validates and stores the given configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidServerUrl`] if `auth_server` is not an absolute URL.
    pub fn new(auth_server: &str, request_timeout: Duration) -> Result<Self, ConfigError> {
        let trimmed = auth_server.trim().trim_end_matches('/');
        url::Url::parse(trimmed).map_err(|_| ConfigError::InvalidServerUrl(trimmed.to_string()))?;
        Ok(Self { auth_server: trimmed.to_string(), request_timeout })
    }

    /// Reads `API_AUTH_SERVER` and `API_REQUEST_TIMEOUT_SECS`, falling back to
    /// `http://localhost:5000` and 5 seconds.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_var = env::var(AUTH_SERVER_VAR);
        let server = server_var.as_ref().map_or(DEFAULT_AUTH_SERVER, |v| v.as_str());
        let timeout = match env::var(REQUEST_TIMEOUT_VAR) {
            Ok(raw) => Duration::from_secs(
                raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidTimeout(raw))?,
            ),
            Err(_) => DEFAULT_REQUEST_TIMEOUT,
        };
        Self::new(server, timeout)
    }

    pub fn auth_server(&self) -> &str { self.auth_server.as_str() }
    pub fn request_timeout(&self) -> Duration { self.request_timeout }
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ConfigError {
    InvalidServerUrl(String),
    InvalidTimeout(String),
}

impl std::error::Error for ConfigError {}
