use std::env;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5500;
const DEFAULT_CLUSTER: &str = "cluster0.rmsmw.mongodb.net";
const DEFAULT_DATABASE: &str = "lingoLink";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a number, got {0:?}")]
    InvalidPort(String),
    #[error("set MONGODB_URI or both DB_USER and DB_PASS")]
    MissingCredentials,
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let mongodb_uri = match non_empty(lookup("MONGODB_URI")) {
            Some(uri) => uri,
            None => {
                let user = non_empty(lookup("DB_USER")).ok_or(ConfigError::MissingCredentials)?;
                let pass = non_empty(lookup("DB_PASS")).ok_or(ConfigError::MissingCredentials)?;
                let cluster = lookup("MONGODB_CLUSTER").unwrap_or_else(|| DEFAULT_CLUSTER.to_string());
                atlas_uri(&user, &pass, &cluster)
            }
        };

        let database = lookup("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Ok(Self {
            host,
            port,
            mongodb_uri,
            database,
        })
    }

    /// Connection string safe to print: everything before '@' is masked.
    pub fn redacted_uri(&self) -> String {
        match (self.mongodb_uri.find("://"), self.mongodb_uri.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => format!(
                "{}://***{}",
                &self.mongodb_uri[..scheme_end],
                &self.mongodb_uri[at..]
            ),
            _ => self.mongodb_uri.clone(),
        }
    }
}

/// `.env` files leave unset values as empty strings.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn atlas_uri(user: &str, pass: &str, cluster: &str) -> String {
    format!(
        "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName=Cluster0",
        urlencoding::encode(user),
        urlencoding::encode(pass),
        cluster
    )
}
