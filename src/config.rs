//! Process configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | unset, overrides every `DB_*` connection part |
//! | `DB_HOST` | `localhost` |
//! | `DB_PORT` | `5432` |
//! | `DB_USERNAME` | `postgres` |
//! | `DB_PASSWORD` | `12345678` |
//! | `DB_DATABASE` | `Northwind` |
//! | `DB_ENCRYPT` | `true` |
//! | `DB_TRUST_SERVER_CERTIFICATE` | `true` |
//! | `DB_LOGGING` | `false` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `PORT` | `3000` |

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("cannot build database url: {0}")]
    Url(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub port: u16,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub encrypt: bool,
    pub trust_server_certificate: bool,
    pub logging: bool,
    pub max_connections: u32,
    url: String,
}

impl Config {
    /// # Errors
    ///
    /// Fails when a variable holds a value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup; `from_env` passes the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Fails when a variable holds a value that cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mut database = DatabaseConfig {
            host: get("DB_HOST", "localhost"),
            port: parse(&lookup, "DB_PORT", 5432, "a port number")?,
            username: get("DB_USERNAME", "postgres"),
            password: get("DB_PASSWORD", "12345678"),
            database: get("DB_DATABASE", "Northwind"),
            encrypt: parse_flag(&lookup, "DB_ENCRYPT", true)?,
            trust_server_certificate: parse_flag(&lookup, "DB_TRUST_SERVER_CERTIFICATE", true)?,
            logging: parse_flag(&lookup, "DB_LOGGING", false)?,
            max_connections: parse(&lookup, "DB_MAX_CONNECTIONS", 10, "a positive integer")?,
            url: String::new(),
        };
        database.url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => database.assemble_url()?,
        };

        Ok(Self {
            database,
            port: parse(&lookup, "PORT", 3000, "a port number")?,
        })
    }
}

impl DatabaseConfig {
    /// Connection URL handed to the driver
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connection URL with the password masked, for logs.
    pub fn redacted_url(&self) -> String {
        match Url::parse(&self.url) {
            Ok(mut url) if url.password().is_some() => {
                // set_password only fails for cannot-be-a-base urls, which have no password
                let _ = url.set_password(Some("***"));
                url.to_string()
            }
            Ok(url) => url.to_string(),
            Err(_) => "<unparseable database url>".to_string(),
        }
    }

    /// Postgres `sslmode` for the encrypt/trust flags.
    pub fn ssl_mode(&self) -> &'static str {
        match (self.encrypt, self.trust_server_certificate) {
            (false, _) => "disable",
            (true, true) => "require",
            (true, false) => "verify-full",
        }
    }

    fn assemble_url(&self) -> Result<String, ConfigError> {
        let mut url = Url::parse("postgres://localhost").map_err(|e| ConfigError::Url(e.to_string()))?;
        url.set_host(Some(&self.host))
            .map_err(|e| ConfigError::Url(format!("DB_HOST: {e}")))?;
        url.set_port(Some(self.port))
            .map_err(|()| ConfigError::Url("DB_PORT rejected".to_string()))?;
        url.set_username(&self.username)
            .map_err(|()| ConfigError::Url("DB_USERNAME rejected".to_string()))?;
        url.set_password(Some(&self.password))
            .map_err(|()| ConfigError::Url("DB_PASSWORD rejected".to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ConfigError::Url("DB_DATABASE rejected".to_string()))?
            .push(&self.database);
        url.query_pairs_mut().append_pair("sslmode", self.ssl_mode());
        Ok(url.to_string())
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("database", &self.database)
            .field("encrypt", &self.encrypt)
            .field("trust_server_certificate", &self.trust_server_certificate)
            .field("logging", &self.logging)
            .field("max_connections", &self.max_connections)
            .field("url", &self.redacted_url())
            .finish()
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T, expected: &'static str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value,
            expected,
        }),
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value,
            expected: "a boolean",
        }),
    }
}
