use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::account::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::account::application::ports::outgoing::{HashError, PasswordHasher};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value `{value}`")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub connect_retries: u32,
    pub connect_retry_delay: Duration,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HasherConfig {
    Argon2 {
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    },
    Bcrypt {
        cost: u32,
    },
}

impl HasherConfig {
    pub fn build(&self) -> Result<Arc<dyn PasswordHasher>, HashError> {
        let hasher: Arc<dyn PasswordHasher> = match *self {
            HasherConfig::Argon2 {
                memory_kib,
                iterations,
                parallelism,
            } => Arc::new(Argon2Hasher::with_params(memory_kib, iterations, parallelism)?),
            HasherConfig::Bcrypt { cost } => Arc::new(BcryptHasher::with_cost(cost)?),
        };
        Ok(hasher)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub hasher: HasherConfig,
}

impl AppConfig {
    /// Reads the process environment. Call after the `.env` files are loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let url = vars
            .get("DATABASE_URL")
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let database = DatabaseConfig {
            url,
            max_connections: vars.parse("DB_MAX_CONNECTIONS", 50)?,
            min_connections: vars.parse("DB_MIN_CONNECTIONS", 5)?,
            connect_timeout: Duration::from_secs(vars.parse("DB_CONNECT_TIMEOUT_SECS", 5)?),
            acquire_timeout: Duration::from_secs(vars.parse("DB_ACQUIRE_TIMEOUT_SECS", 5)?),
            connect_retries: vars.parse("DB_CONNECT_RETRIES", 5)?,
            connect_retry_delay: Duration::from_millis(
                vars.parse("DB_CONNECT_RETRY_DELAY_MS", 1000)?,
            ),
            run_migrations: vars.parse("RUN_MIGRATIONS", false)?,
        };

        let hasher = match vars.get("PASSWORD_HASHER").as_deref() {
            None | Some("argon2") => HasherConfig::Argon2 {
                memory_kib: vars.parse("ARGON2_MEMORY_KIB", 19 * 1024)?,
                iterations: vars.parse("ARGON2_ITERATIONS", 2)?,
                parallelism: vars.parse("ARGON2_PARALLELISM", 1)?,
            },
            Some("bcrypt") => HasherConfig::Bcrypt {
                cost: vars.parse("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "PASSWORD_HASHER",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host: vars.get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: vars.parse("PORT", 8080)?,
            database,
            hasher,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Blank values count as unset.
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse<T: std::str::FromStr>(&self, key: &'static str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key, value }),
        }
    }
}
