use anyhow::{Context, Result};
use docext::ExtractionConfig;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_FILTER: &str = "info,server_core=debug,docext=debug";

/// Which origins CORS lets through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// `*`: any origin, method and header
    Any,
    /// Only these exact origins
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parse a comma-separated allow-list. Empty input or a `*` entry means
    /// any origin.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub allowed_origins: AllowedOrigins,
    pub fetch_timeout: Duration,
    /// `None` disables the size check
    pub max_document_bytes: Option<u64>,
    pub docx_staging_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            allowed_origins: AllowedOrigins::Any,
            fetch_timeout: docext::types::config::DEFAULT_FETCH_TIMEOUT,
            max_document_bytes: Some(docext::types::config::DEFAULT_MAX_DOCUMENT_BYTES),
            docx_staging_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().context("PORT must be a valid number")?,
            None => defaults.port,
        };

        let fetch_timeout = match lookup("FETCH_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => defaults.fetch_timeout,
        };

        let max_document_bytes = match lookup("MAX_DOCUMENT_BYTES") {
            Some(raw) => {
                let limit: u64 = raw
                    .trim()
                    .parse()
                    .context("MAX_DOCUMENT_BYTES must be a number of bytes")?;
                // 0 means unlimited
                (limit > 0).then_some(limit)
            }
            None => defaults.max_document_bytes,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|raw| AllowedOrigins::parse(&raw))
                .unwrap_or(defaults.allowed_origins),
            fetch_timeout,
            max_document_bytes,
            docx_staging_dir: lookup("DOCX_STAGING_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }

    /// Address to bind the HTTP listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Settings for the extraction library.
    pub fn extraction_config(&self) -> ExtractionConfig {
        let config = ExtractionConfig::default()
            .with_fetch_timeout(self.fetch_timeout)
            .with_max_document_bytes(self.max_document_bytes);

        match &self.docx_staging_dir {
            Some(dir) => config.with_staging_dir(dir),
            None => config,
        }
    }
}
