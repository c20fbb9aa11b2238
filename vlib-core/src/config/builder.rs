// ============================================================================
// vlib-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ClientConfig
//
// Fluent construction of ClientConfig with defaults for every optional
// setting. `build` validates the result so callers never hold a
// configuration the REST service would reject.
//
// AI-ASSISTANT-INFO: Builder pattern implementation for ClientConfig

// ---- Standard library imports ----
use std::time::Duration;

// ---- Internal crate imports ----
use super::ClientConfig;
use crate::error::{CoreError, CoreResult};

/// Builder for creating ClientConfig instances.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    // Required fields
    url: Option<String>,

    // Optional fields
    username: Option<String>,
    password: Option<String>,
    session_id: Option<String>,
    insecure: bool,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server URL (required).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Reuses an existing session instead of logging in.
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(ClientConfig)` - A validated configuration
    /// * `Err(CoreError::Config)` - If the URL is missing or invalid
    pub fn build(self) -> CoreResult<ClientConfig> {
        let url = self
            .url
            .ok_or_else(|| CoreError::Config("server URL is required".to_string()))?;

        let config = ClientConfig {
            url,
            username: self.username,
            password: self.password,
            session_id: self.session_id,
            insecure: self.insecure,
            timeout: self.timeout.unwrap_or(super::DEFAULT_REQUEST_TIMEOUT),
        };
        config.validate()?;
        Ok(config)
    }
}
