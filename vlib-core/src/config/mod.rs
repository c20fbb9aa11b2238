//! Configuration structures and constants for the vlib-core library.
//!
//! This module describes how to reach the content library endpoint: the
//! server URL, credentials or an existing session, TLS verification and the
//! per-request timeout.

mod builder;

use std::time::Duration;

use crate::error::{CoreError, CoreResult};

pub use builder::ClientConfigBuilder;

// Default constants

/// Default per-request HTTP timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for the REST library service.
///
/// Either `session_id` or `username`/`password` must be supplied for the
/// service to authenticate. `validate` checks the URL shape and that a
/// username comes with a password.
///
/// # Examples
///
/// ```rust
/// use vlib_core::config::ClientConfigBuilder;
///
/// let config = ClientConfigBuilder::new()
///     .url("https://vcenter.example.com")
///     .username("administrator@vsphere.local")
///     .password("secret")
///     .insecure(true)
///     .build()
///     .unwrap();
/// assert!(config.insecure);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server; any path component is ignored
    pub url: String,

    pub username: Option<String>,

    pub password: Option<String>,

    /// Existing session id, used instead of creating a new session
    pub session_id: Option<String>,

    /// Skip TLS certificate verification
    pub insecure: bool,

    /// Upper bound for each HTTP request
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: None,
            password: None,
            session_id: None,
            insecure: false,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Checks the configuration for values the service cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        let after_scheme = self
            .url
            .strip_prefix("https://")
            .or_else(|| self.url.strip_prefix("http://"))
            .ok_or_else(|| {
                CoreError::Config(format!(
                    "Invalid server URL '{}': must start with http:// or https://",
                    self.url
                ))
            })?;

        let host_end = after_scheme.find('/').unwrap_or(after_scheme.len());
        if after_scheme[..host_end].is_empty() {
            return Err(CoreError::Config(format!(
                "URL '{}' must have a non-empty host",
                self.url
            )));
        }

        if self.username.is_some() && self.password.is_none() {
            return Err(CoreError::Config(
                "a password is required when a username is given".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(CoreError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> ClientConfig {
        ClientConfig {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(config("https://vc.example.com").validate().is_ok());
        assert!(config("http://127.0.0.1:8989/sdk").validate().is_ok());
    }

    #[test]
    fn rejects_missing_scheme() {
        let err = config("vc.example.com").validate().unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn rejects_empty_host() {
        assert!(config("https:///sdk").validate().is_err());
    }

    #[test]
    fn username_requires_password() {
        let mut cfg = config("https://vc.example.com");
        cfg.username = Some("admin".to_string());
        assert!(cfg.validate().is_err());
        cfg.password = Some("pw".to_string());
        assert!(cfg.validate().is_ok());
    }
}
