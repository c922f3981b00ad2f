use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::preferences::theme::Theme;

const DEFAULT_PREFERENCES_PATH: &str = ".jobboard/preferences.json";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub preferences_path: PathBuf,
    pub default_theme: Theme,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            preferences_path: PathBuf::from(env_or("PREFERENCES_PATH", DEFAULT_PREFERENCES_PATH)),
            default_theme: env_or("DEFAULT_THEME", "light")
                .parse::<Theme>()
                .context("DEFAULT_THEME must be 'dark' or 'light'")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
