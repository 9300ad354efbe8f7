//! Configuration module with feature-specific sub-modules
//!
//! - `collaborators` - verification and resend collaborator settings
//! - `environment` - environment detection and logging configuration
//! - `verification` - expiry, cooldown and countdown timings
//!
//! Loading order: per-environment defaults, then `config.<env>.toml` if
//! present, then `BOOTH__SECTION__KEY` environment variables.

pub mod collaborators;
pub mod environment;
pub mod verification;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::types::Language;

pub use collaborators::CollaboratorConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use verification::VerificationConfig;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "BOOTH";

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Verification code timings
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Collaborator configuration
    #[serde(default)]
    pub collaborators: CollaboratorConfig,

    /// Language for user-visible messages
    #[serde(default)]
    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Create configuration defaults for an environment
    pub fn for_environment(env: Environment) -> Self {
        let collaborators = if env.is_production() {
            CollaboratorConfig::production()
        } else {
            CollaboratorConfig::default()
        };

        Self {
            environment: env,
            logging: LoggingConfig::for_environment(env),
            verification: VerificationConfig::default(),
            collaborators,
            language: Language::default(),
        }
    }

    /// Load configuration for the environment named by `ENVIRONMENT`
    ///
    /// Reads the matching `.env.<env>` (falling back to `.env`) first, so
    /// variables defined there take part in the override step.
    pub fn load() -> Result<Self, ConfigError> {
        let env = Environment::from_env();
        if dotenvy::from_filename(env.env_file()).is_err() {
            dotenvy::dotenv().ok();
        }
        Self::load_from(env, Path::new(env.config_file()))
    }

    /// Load configuration layering an optional TOML file and environment overrides
    pub fn load_from(env: Environment, file: &Path) -> Result<Self, ConfigError> {
        let defaults = Self::for_environment(env);

        let settings = ::config::Config::builder()
            .add_source(::config::Config::try_from(&defaults)?)
            .add_source(
                ::config::File::from(file)
                    .format(::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field rules
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.verification.validate().map_err(ConfigError::Invalid)?;
        if self.collaborators.provider.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "collaborators.provider must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
