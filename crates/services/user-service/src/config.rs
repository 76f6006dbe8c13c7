//! User service configuration.

use common::DatabaseConfig;

/// Environment prefix checked before the generic `DATABASE_URL`.
pub const ENV_PREFIX: &str = "USER_SERVICE";

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(ENV_PREFIX),
        }
    }
}
