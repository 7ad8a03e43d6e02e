use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub db_url: String,
    pub static_dir: PathBuf,
    pub views_dir: PathBuf,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

impl EnvConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        Ok(EnvConfig {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            db_url,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "public".to_string()).into(),
            views_dir: get("VIEWS_DIR").unwrap_or_else(|| "views".to_string()).into(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
