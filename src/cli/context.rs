//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, validation, and client initialization.

use crate::cli::OutputFormat;
use crate::client::PlatformClient;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::session::{Session, SessionUser};

/// Context for command execution containing config, client, and runtime
/// options.
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// Platform API client
    pub client: PlatformClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config (explicit path or `~/.teamctl/config.yaml`),
    /// validates that a token and user identity are present, and builds the
    /// API client. An `--api-host` override wins over the configured host.
    pub fn new(
        format: OutputFormat,
        api_host_override: Option<&str>,
        config_path: Option<&str>,
    ) -> Result<Self> {
        let config = Config::load_at(config_path)?;
        config.validate()?;

        let host = api_host_override
            .map(str::to_string)
            .or_else(|| config.api_host.clone());
        let client = PlatformClient::with_host(config.api_token.clone(), host)?;

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// The signed-in user from the validated config.
    pub fn session_user(&self) -> Result<SessionUser> {
        let id = self
            .config
            .user_id
            .clone()
            .ok_or(ConfigError::MissingUser)?;
        let name = self
            .config
            .username
            .clone()
            .ok_or(ConfigError::MissingUser)?;
        Ok(SessionUser {
            id,
            name,
            role: self.config.role,
        })
    }

    /// Start a session: capture the identity and prime the capacity cache.
    pub async fn start_session(&self) -> Result<Session> {
        let user = self.session_user()?;
        Ok(Session::start(user, &self.client).await)
    }
}
