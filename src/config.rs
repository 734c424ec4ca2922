//! Application configuration loaded from environment variables.

use std::fmt;

use serde::Deserialize;
use sqlx::mysql::MySqlConnectOptions;

use crate::error::{AppError, Result};

/// Application configuration loaded from environment variables.
#[derive(Clone, Deserialize)]
pub struct Config {
    // === Database ===
    /// MySQL host.
    #[serde(default = "default_db_host")]
    pub db_host: String,

    /// MySQL port.
    #[serde(default = "default_db_port")]
    pub db_port: u16,

    /// MySQL user. Left to the driver default when unset.
    #[serde(default)]
    pub db_username: Option<String>,

    /// MySQL password.
    #[serde(default)]
    pub db_password: Option<String>,

    /// Database holding the `patients` and `providers` tables.
    #[serde(default)]
    pub db_name: Option<String>,

    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,

    // === Server Configuration ===
    /// HTTP listening port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Prometheus exporter port. The exporter is off when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    3306
}

fn default_max_connections() -> u32 {
    5
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Build configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.db_max_connections == 0 {
            return Err(AppError::InvalidConfig(
                "DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        if self.metrics_port == Some(self.port) {
            return Err(AppError::InvalidConfig(
                "METRICS_PORT must differ from PORT".to_string(),
            ));
        }

        Ok(())
    }

    /// Connection options for the MySQL pool.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let mut options = MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port);

        if let Some(user) = &self.db_username {
            options = options.username(user);
        }
        if let Some(password) = &self.db_password {
            options = options.password(password);
        }
        if let Some(name) = &self.db_name {
            options = options.database(name);
        }

        options
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_username", &self.db_username)
            .field("db_password", &self.db_password.as_ref().map(|_| "<redacted>"))
            .field("db_name", &self.db_name)
            .field("db_max_connections", &self.db_max_connections)
            .field("port", &self.port)
            .field("metrics_port", &self.metrics_port)
            .finish()
    }
}
