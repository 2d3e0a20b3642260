//! Server configuration parsed from environment variables.
//!
//! Read once at startup. `.env` is loaded first by `main`, so values there
//! behave like real environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
    #[error("PUBLIC_URL must be empty or start with '/': {0:?}")]
    InvalidBasePath(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,
    /// Directory holding the bundled public files (the sample PDF).
    pub public_dir: PathBuf,
    /// Path prefix the public files are served under; empty for `/`.
    pub public_url: String,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PUBLIC_DIR`: default `public`
    /// - `PUBLIC_URL`: default empty (files served at `/`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let public_dir = lookup("PUBLIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);
        let public_url = normalize_base_path(lookup("PUBLIC_URL").as_deref())?;
        Ok(Self { port, public_dir, public_url })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|source| ConfigError::InvalidPort { value: value.to_owned(), source }),
    }
}

fn normalize_base_path(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Ok(String::new());
    }
    if !value.starts_with('/') {
        return Err(ConfigError::InvalidBasePath(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}
