//! Runtime configuration, read from the environment (and a `.env` file when
//! present), falling back to built-in defaults.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_FRONTEND_ORIGIN: &str = "https://minima-frontend-nfvb.vercel.app";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => bail!("unknown LOG_FORMAT: {other}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Registry file, created on first registration
    pub registry_path: PathBuf,

    /// Origin allowed to call the API from a browser
    pub frontend_origin: String,

    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        let config = Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            registry_path: lookup("REGISTRY_PATH")
                .unwrap_or_else(|| "email.txt".to_string())
                .into(),
            frontend_origin: lookup("FRONTEND_ORIGIN")
                .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string()),
            log_format,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            bail!("PORT must be greater than 0");
        }
        if self.registry_path.as_os_str().is_empty() {
            bail!("REGISTRY_PATH must not be empty");
        }
        Ok(())
    }

    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
