use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `history_limit`
pub const HISTORY_LIMIT_ENV: &str = "VOYAGE_HISTORY_LIMIT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read editor config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse editor config YAML {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}

/// Editor settings
///
/// ```yaml
/// history_limit: 200      # omit for unbounded undo
/// user_id_prefix: user
/// persist_on_commit: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of undo steps kept (`None` keeps the whole session)
    pub history_limit: Option<usize>,
    /// Prefix for ids of events created in the editor
    pub user_id_prefix: String,
    /// Save the trip through the repository after every change
    pub persist_on_commit: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: None,
            user_id_prefix: "user".to_string(),
            persist_on_commit: true,
        }
    }
}

impl EditorConfig {
    /// Load settings from a YAML file. Missing keys take their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `VOYAGE_HISTORY_LIMIT` when it is set
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        match std::env::var(HISTORY_LIMIT_ENV) {
            Ok(raw) => self.with_history_limit_str(&raw),
            Err(_) => Ok(self),
        }
    }

    /// Parse a history limit: a number of undo steps, or `unbounded`/`none`
    pub fn with_history_limit_str(mut self, raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        self.history_limit = match raw.to_ascii_lowercase().as_str() {
            "" | "none" | "unbounded" => None,
            _ => Some(raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: HISTORY_LIMIT_ENV.to_string(),
                value: raw.to_string(),
            })?),
        };
        Ok(self)
    }
}
