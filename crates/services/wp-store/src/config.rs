//! WordPress store configuration.

use std::env;

use common::DatabaseConfig;

/// WordPress store configuration.
#[derive(Debug, Clone, Default)]
pub struct WpStoreConfig {
    /// Connection to the database holding the `wp_*` tables
    pub database: DatabaseConfig,
}

impl WpStoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to [`DatabaseConfig::default`].
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("WP_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: parsed("WP_DB_MAX_CONNECTIONS").unwrap_or(defaults.max_connections),
                min_connections: parsed("WP_DB_MIN_CONNECTIONS").unwrap_or(defaults.min_connections),
                connect_timeout_secs: parsed("WP_DB_CONNECT_TIMEOUT")
                    .unwrap_or(defaults.connect_timeout_secs),
                sql_logging: parsed("WP_DB_SQL_LOGGING").unwrap_or(defaults.sql_logging),
            },
        }
    }

    /// Replace the database URL, keeping the pool settings.
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database.url = url.into();
        self
    }
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_database_url_keeps_pool_settings() {
        let config = WpStoreConfig::default().with_database_url("mysql://wp@db/blog");

        assert_eq!(config.database.url, "mysql://wp@db/blog");
        assert_eq!(config.database.max_connections, 10);
        assert!(!config.database.sql_logging);
    }
}
