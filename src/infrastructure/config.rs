//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::value_objects::Theme;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the external generation service
    pub service_base_url: String,

    /// Port the form host listens on
    pub server_port: u16,

    /// Directory the storyline Save action writes into
    pub export_dir: PathBuf,

    /// Stored theme preference; `None` means use the system default
    pub theme_preference: Option<Theme>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            service_base_url: lookup("CHRONICLES_SERVICE_URL")
                .unwrap_or_else(|| "https://legendary-chronicles-1.onrender.com".to_string()),

            server_port: lookup("CHRONICLES_SERVER_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("CHRONICLES_SERVER_PORT must be a valid port number")?,

            export_dir: lookup("CHRONICLES_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("exports")),

            theme_preference: lookup("CHRONICLES_THEME")
                .filter(|value| !value.trim().is_empty())
                .map(|value| value.parse::<Theme>())
                .transpose()
                .context("CHRONICLES_THEME must be 'light' or 'dark'")?,
        })
    }
}
