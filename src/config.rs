//! Server and database configuration loaded from environment variables.

use crate::error::ConfigError;
use std::str::FromStr;

/// Named environment selecting the storage backend and its defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// SQLite, in-memory unless `DATABASE_URL` says otherwise.
    Test,
    /// PostgreSQL with a pooled connection.
    Development,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" => Ok(Environment::Test),
            "development" | "dev" => Ok(Environment::Development),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub environment: Environment,
    pub url: String,
    pub min_connections: u32,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Defaults for `environment`; no environment variables are read.
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Test => Self {
                environment,
                url: "sqlite::memory:".into(),
                min_connections: 1,
                max_connections: 1,
            },
            Environment::Development => Self {
                environment,
                url: "postgres://postgres@localhost/movies_api".into(),
                min_connections: 2,
                max_connections: 10,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
    /// Insert the seed movies after migrating.
    pub seed: bool,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                                      |
    /// |----------------------|----------------------------------------------|
    /// | `APP_ENV`            | `development`                                |
    /// | `DATABASE_URL`       | per environment                              |
    /// | `DB_MIN_CONNECTIONS` | `2` (development), `1` (test)                |
    /// | `DB_MAX_CONNECTIONS` | `10` (development), `1` (test)               |
    /// | `HOST`               | `0.0.0.0`                                    |
    /// | `PORT`               | `1337`                                       |
    /// | `BODY_LIMIT_BYTES`   | `1048576`                                    |
    /// | `SEED_DATABASE`      | `false`                                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV") {
            Some(v) => v.parse()?,
            None => Environment::Development,
        };
        let mut database = DatabaseConfig::for_environment(environment);
        if let Some(url) = lookup("DATABASE_URL") {
            database.url = url;
        }
        database.min_connections = parse_var(&lookup, "DB_MIN_CONNECTIONS", "u32", database.min_connections)?;
        database.max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", "u32", database.max_connections)?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_var(&lookup, "PORT", "u16", 1337)?,
            body_limit_bytes: parse_var(&lookup, "BODY_LIMIT_BYTES", "usize", 1024 * 1024)?,
            seed: parse_var(&lookup, "SEED_DATABASE", "bool", false)?,
            database,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, expected: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidVar {
            name,
            expected,
            value,
        }),
    }
}
