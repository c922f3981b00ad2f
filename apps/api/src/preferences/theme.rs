use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PreferenceError::UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Unknown theme '{0}' (expected 'dark' or 'light')")]
    UnknownTheme(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed preferences file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// On-disk shape: `{"theme": "dark"}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPreferences {
    theme: Option<Theme>,
}

/// Single-key preference file. Read once at startup, rewritten on every change.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PreferenceStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when nothing has been stored yet.
    pub async fn load(&self) -> Result<Option<Theme>, PreferenceError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };
        let stored: StoredPreferences = serde_json::from_slice(&raw)?;
        Ok(stored.theme)
    }

    pub async fn save(&self, theme: Theme) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }
        let body = serde_json::to_vec_pretty(&StoredPreferences { theme: Some(theme) })?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|source| self.io_error(source))?;
        info!("Theme preference persisted: {theme}");
        Ok(())
    }

    /// Startup read. A missing or unreadable file falls back to `default`.
    pub async fn load_or(&self, default: Theme) -> Theme {
        match self.load().await {
            Ok(Some(theme)) => {
                info!("Theme preference loaded: {theme}");
                theme
            }
            Ok(None) => default,
            Err(e) => {
                warn!("Ignoring preferences at {}: {e}", self.path.display());
                default
            }
        }
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
