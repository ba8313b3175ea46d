use std::fmt;
use std::str::FromStr;

use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse_or, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Where user records live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in-memory" => Ok(Self::Memory),
            other => Err(format!("expected `postgres` or `memory`, got `{other}`")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => f.write_str("postgres"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub storage: StorageBackend,
    /// Present exactly when `storage` is `Postgres`
    pub database: Option<PostgresConfig>,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let storage = env_parse_or("USER_STORAGE", StorageBackend::default())?;

        let database = match storage {
            StorageBackend::Postgres => Some(PostgresConfig::from_env()?), // DATABASE_URL required
            StorageBackend::Memory => None,
        };

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            storage,
            database,
            run_migrations: env_parse_or("DB_RUN_MIGRATIONS", true)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = ["USER_STORAGE", "DATABASE_URL", "DB_RUN_MIGRATIONS", "PORT"];

    #[test]
    fn storage_backend_parses_case_insensitively() {
        assert_eq!("Memory".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
        assert_eq!("POSTGRES".parse::<StorageBackend>(), Ok(StorageBackend::Postgres));
        assert!("sqlite".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn postgres_is_the_default_and_needs_a_url() {
        temp_env::with_vars_unset(VARS, || {
            assert_eq!(
                Config::from_env().unwrap_err(),
                ConfigError::MissingEnvVar("DATABASE_URL".to_string())
            );
        });
    }

    #[test]
    fn postgres_config_is_loaded() {
        temp_env::with_vars(
            [
                ("USER_STORAGE", None),
                ("DATABASE_URL", Some("postgresql://localhost/users")),
                ("DB_RUN_MIGRATIONS", Some("false")),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.storage, StorageBackend::Postgres);
                assert_eq!(
                    config.database.as_ref().map(PostgresConfig::url),
                    Some("postgresql://localhost/users")
                );
                assert!(!config.run_migrations);
                assert_eq!(config.server.port, 8080);
            },
        );
    }

    #[test]
    fn memory_storage_skips_database_config() {
        temp_env::with_vars(
            [
                ("USER_STORAGE", Some("memory")),
                ("DATABASE_URL", None),
                ("DB_RUN_MIGRATIONS", None),
                ("PORT", Some("9090")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.storage, StorageBackend::Memory);
                assert!(config.database.is_none());
                assert!(config.run_migrations);
                assert_eq!(config.server.port, 9090);
            },
        );
    }

    #[test]
    fn unknown_storage_is_a_parse_error() {
        temp_env::with_var("USER_STORAGE", Some("mongo"), || {
            assert!(matches!(
                Config::from_env(),
                Err(ConfigError::ParseError { ref key, .. }) if key == "USER_STORAGE"
            ));
        });
    }
}
