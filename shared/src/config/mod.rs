//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Token signing and password hashing
//! - `database` - SQLite connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `favorites` - Listing sizes and delete ownership policy
//! - `server` - HTTP server and CORS configuration
//!
//! [`AppConfig::load`] layers built-in defaults, optional TOML files and
//! `CLICAKI__`-prefixed environment variables, in that order.

pub mod auth;
pub mod database;
pub mod environment;
pub mod favorites;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, PasswordConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use favorites::FavoritesConfig;
pub use server::{CorsConfig, ServerConfig};

/// Prefix for environment variable overrides (`CLICAKI__SERVER__PORT=8080`)
pub const ENV_PREFIX: &str = "CLICAKI";

/// Directory searched for `default.toml` and `{environment}.toml`
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Errors raised while assembling the application configuration
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Configuration source error: {0}")]
    Source(#[from] ::config::ConfigError),

    #[error("Refusing to start in {0} with the built-in development JWT secret")]
    InsecureSecret(Environment),

    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Favorites listing and ownership policy
    #[serde(default)]
    pub favorites: FavoritesConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        let mut config = Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            favorites: FavoritesConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        };

        if environment.is_production() {
            config.server = ServerConfig::new("0.0.0.0", 5000);
            config.database = DatabaseConfig::default().with_max_connections(10);
            config.cors = CorsConfig::restricted();
        }

        config
    }

    /// Load configuration for the environment named by `ENVIRONMENT`
    ///
    /// Reads `.env` first, then layers defaults, `config/default.toml`,
    /// `config/{environment}.toml` and `CLICAKI__*` variables.
    pub fn load() -> Result<Self, ConfigLoadError> {
        dotenvy::dotenv().ok();
        Self::load_from(Environment::from_env(), DEFAULT_CONFIG_DIR)
    }

    /// Load configuration for an explicit environment and config directory
    pub fn load_from(environment: Environment, config_dir: &str) -> Result<Self, ConfigLoadError> {
        let defaults = Self::for_environment(environment);

        let settings = ::config::Config::builder()
            .add_source(::config::Config::try_from(&defaults)?)
            .add_source(::config::File::with_name(&format!("{config_dir}/default")).required(false))
            .add_source(
                ::config::File::with_name(&format!("{config_dir}/{environment}")).required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject configurations the services cannot run with
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigLoadError::InsecureSecret(self.environment));
        }
        if self.auth.jwt.secret.is_empty() {
            return Err(ConfigLoadError::Invalid {
                field: "auth.jwt.secret".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.auth.jwt.expiry_days <= 0 {
            return Err(ConfigLoadError::Invalid {
                field: "auth.jwt.expiry_days".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if !(PasswordConfig::MIN_COST..=PasswordConfig::MAX_COST).contains(&self.auth.password.bcrypt_cost) {
            return Err(ConfigLoadError::Invalid {
                field: "auth.password.bcrypt_cost".to_string(),
                reason: format!(
                    "must be between {} and {}",
                    PasswordConfig::MIN_COST,
                    PasswordConfig::MAX_COST
                ),
            });
        }
        if self.favorites.page_size == 0 || self.favorites.owner_list_limit == 0 {
            return Err(ConfigLoadError::Invalid {
                field: "favorites".to_string(),
                reason: "page_size and owner_list_limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
