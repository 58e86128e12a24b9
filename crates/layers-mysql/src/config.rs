//! Connection settings.
//!
//! Settings deserialize from any serde source, or load from `DB_*`
//! environment variables with [`Config::from_env`].

use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;

use crate::error::{Error, Result};

/// The only driver this crate speaks.
pub const DRIVER: &str = "mysql";

fn default_driver() -> String {
    DRIVER.to_string()
}

const fn default_port() -> u16 {
    3306
}

fn default_charset() -> String {
    String::from("utf8mb4")
}

/// MySQL connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Driver name. Only `mysql` is accepted.
    #[serde(default = "default_driver")]
    pub driver: String,
    /// Server host.
    pub host: String,
    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database (schema) name.
    pub database: String,
    /// User name.
    pub username: String,
    /// Password.
    #[serde(default)]
    pub password: String,
    /// Connection character set.
    #[serde(default = "default_charset")]
    pub charset: String,
    /// Keep a connection open for the lifetime of the pool.
    #[serde(default)]
    pub persistent: bool,
}

impl Config {
    /// Creates settings with the default driver, port and charset.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        database: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            driver: default_driver(),
            host: host.into(),
            port: default_port(),
            database: database.into(),
            username: username.into(),
            password: password.into(),
            charset: default_charset(),
            persistent: false,
        }
    }

    /// Sets the port.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the charset.
    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Sets the persistent flag.
    #[must_use]
    pub const fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// Loads settings from `DB_HOST`, `DB_PORT`, `DB_DATABASE`,
    /// `DB_USERNAME`, `DB_PASSWORD`, `DB_CHARSET` and `DB_PERSISTENT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through `lookup`, keyed like [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{key} is not set")))
        };

        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("DB_PORT is not a port number: {raw}")))?,
            None => default_port(),
        };
        let persistent = match lookup("DB_PERSISTENT").as_deref() {
            None | Some("" | "0" | "false" | "FALSE") => false,
            Some("1" | "true" | "TRUE") => true,
            Some(other) => {
                return Err(Error::Config(format!(
                    "DB_PERSISTENT must be true or false, got {other}"
                )))
            }
        };

        let config = Self {
            driver: lookup("DB_DRIVER").unwrap_or_else(default_driver),
            host: required("DB_HOST")?,
            port,
            database: required("DB_DATABASE")?,
            username: required("DB_USERNAME")?,
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            charset: lookup("DB_CHARSET")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(default_charset),
            persistent,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects drivers other than `mysql`.
    pub fn validate(&self) -> Result<()> {
        if self.driver != DRIVER {
            return Err(Error::Config(format!(
                "unsupported driver '{}', only '{DRIVER}' is available",
                self.driver
            )));
        }
        Ok(())
    }

    /// Builds sqlx connect options.
    #[must_use]
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .password(&self.password)
            .charset(&self.charset)
    }
}
