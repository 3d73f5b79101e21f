use serde::Deserialize;
use std::env;
use url::Url;

use crate::error::{Result, TrackerError};

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub triplestore: TriplestoreConfig,
    pub repository: RepositoryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// SPARQL endpoint the lookups are issued against.
#[derive(Debug, Clone, Deserialize)]
pub struct TriplestoreConfig {
    pub url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryConfig {
    /// Address every canonical resource URI starts with, including the
    /// trailing slash (e.g. `http://fedora.example.edu:8080/fcrepo/rest/`).
    pub root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("TRACKER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("TRACKER_PORT", 3000),
            },
            triplestore: TriplestoreConfig {
                url: env::var("TRIPLESTORE_URL")
                    .unwrap_or_else(|_| "http://localhost:3030/fcrepo/query".to_string()),
                timeout_secs: parse_env_or("TRIPLESTORE_TIMEOUT", 30),
            },
            repository: RepositoryConfig {
                root: env::var("REPOSITORY_ROOT")
                    .unwrap_or_else(|_| "http://localhost:8080/fcrepo/rest/".to_string()),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Both addresses must be absolute http(s) URLs; they are fixed for the
    /// life of the process so a bad value is rejected at startup.
    pub fn validate(&self) -> Result<()> {
        check_http_url("TRIPLESTORE_URL", &self.triplestore.url)?;
        check_http_url("REPOSITORY_ROOT", &self.repository.root)?;
        Ok(())
    }
}

fn check_http_url(name: &str, value: &str) -> Result<()> {
    let parsed = Url::parse(value)?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(TrackerError::Config(format!(
            "{name} must use http or https, got scheme '{other}'"
        ))),
    }
}
