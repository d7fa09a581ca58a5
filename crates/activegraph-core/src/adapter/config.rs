use crate::{Error, Result};

use serde::Deserialize;
use std::str::FromStr;
use url::Url;

/// Where and how to connect: the adapter kind and a database locator.
///
/// For SQLite the locator is a file path or `:memory:`. Other adapters
/// receive the URL they were configured with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    pub adapter: String,

    #[serde(default)]
    pub database: String,
}

impl DatabaseConfig {
    pub fn new(adapter: impl Into<String>, database: impl Into<String>) -> DatabaseConfig {
        DatabaseConfig {
            adapter: adapter.into(),
            database: database.into(),
        }
    }

    pub fn sqlite_in_memory() -> DatabaseConfig {
        DatabaseConfig::new("sqlite", ":memory:")
    }

    /// Parses a database URL.
    ///
    /// ```
    /// # use activegraph_core::DatabaseConfig;
    /// let config = DatabaseConfig::from_url("sqlite::memory:").unwrap();
    /// assert_eq!(config, DatabaseConfig::new("sqlite", ":memory:"));
    ///
    /// let config = DatabaseConfig::from_url("sqlite:///var/db/books.sqlite").unwrap();
    /// assert_eq!(config.database, "/var/db/books.sqlite");
    /// ```
    pub fn from_url(url: &str) -> Result<DatabaseConfig> {
        let url = Url::parse(url)?;
        let adapter = url.scheme().to_string();

        let database = match &adapter[..] {
            "sqlite" if url.cannot_be_a_base() => url.path().to_string(),
            "sqlite" => match url.host_str() {
                // `sqlite://books.sqlite` names a relative path
                Some(host) => format!("{host}{}", url.path()),
                None => url.path().to_string(),
            },
            _ => url.as_str().to_string(),
        };

        if database.is_empty() {
            return Err(Error::invalid_database_config(format!(
                "missing database in `{url}`"
            )));
        }

        Ok(DatabaseConfig { adapter, database })
    }
}

impl FromStr for DatabaseConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DatabaseConfig::from_url(s)
    }
}
