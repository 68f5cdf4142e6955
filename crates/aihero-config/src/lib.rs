//! Configuration for the AI HERO terminal brochure.
//!
//! Settings come from a TOML file in the platform config directory, with every
//! field defaulted. Webhook credentials may be overridden from the
//! environment so they never have to be written to disk.

use std::path::{Path, PathBuf};

use aihero_core::{FieldSettings, RenderSettings};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variables checked for the bot token, highest priority first.
pub const TOKEN_VARS: [&str; 2] = ["AIHERO_TELEGRAM_BOT_TOKEN", "TELEGRAM_BOT_TOKEN"];
/// Environment variables checked for the chat id, highest priority first.
pub const CHAT_ID_VARS: [&str; 2] = ["AIHERO_TELEGRAM_CHAT_ID", "TELEGRAM_CHAT_ID"];

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "aihero.log";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Telegram webhook settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    /// Base URL of the Bot API.
    pub api_base: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            api_base: "https://api.telegram.org".to_string(),
            timeout_secs: 10,
        }
    }
}

impl TelegramConfig {
    /// Bot token, if set to something non-blank.
    pub fn bot_token(&self) -> Option<&str> {
        non_blank(self.bot_token.as_deref())
    }

    /// Chat id, if set to something non-blank.
    pub fn chat_id(&self) -> Option<&str> {
        non_blank(self.chat_id.as_deref())
    }

    /// Whether both credentials are present.
    #[cfg(test)]
    pub fn is_configured(&self) -> bool {
        self.bot_token().is_some() && self.chat_id().is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Presentation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Draw the animated backdrop.
    pub background: bool,
    /// Draw the custom cursor.
    pub cursor: bool,
    /// Route shown at startup.
    pub start_route: String,
    /// Autoplay delay of the team carousel in milliseconds.
    pub carousel_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            background: true,
            cursor: true,
            start_route: "/".to_string(),
            carousel_delay_ms: 3000,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub field: FieldSettings,
    pub render: RenderSettings,
    pub ui: UiConfig,
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                let config = Self::from_toml(&text, &path)?;
                tracing::info!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Override credentials from environment variables.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Override credentials using `lookup` to read variables.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |keys: &[&str]| {
            keys.iter()
                .filter_map(|k| lookup(k))
                .find(|v| !v.trim().is_empty())
        };
        if let Some(token) = first(&TOKEN_VARS) {
            self.telegram.bot_token = Some(token);
        }
        if let Some(chat_id) = first(&CHAT_ID_VARS) {
            self.telegram.chat_id = Some(chat_id);
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("uz", "aihero", "aihero")
}

/// Default location of the config file.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Default location of the log file.
pub fn default_log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.telegram.api_base, "https://api.telegram.org");
        assert!(!config.telegram.is_configured());
        assert!(config.ui.background);
        assert_eq!(config.ui.start_route, "/");
        assert_eq!(config.field, FieldSettings::default());
    }

    #[test]
    fn test_partial_file() {
        let text = r#"
            [telegram]
            chat_id = "-100123"

            [field]
            node_count = 20
            connection_distance = 120.0

            [ui]
            cursor = false
        "#;
        let config = Config::from_toml(text, Path::new("config.toml")).unwrap();
        assert_eq!(config.telegram.chat_id(), Some("-100123"));
        assert_eq!(config.telegram.bot_token(), None);
        assert_eq!(config.field.node_count, 20);
        assert_eq!(config.field.connection_distance, 120.0);
        assert_eq!(config.field.static_star_count, 400);
        assert!(!config.ui.cursor);
        assert!(config.ui.background);
    }

    #[test]
    fn test_invalid_file() {
        let err = Config::from_toml("[field]\nnode_count = \"many\"", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nstart_route = \"/aloqa\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.ui.start_route, "/aloqa");
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TELEGRAM_BOT_TOKEN", "fallback-token"),
            ("AIHERO_TELEGRAM_BOT_TOKEN", "primary-token"),
            ("TELEGRAM_CHAT_ID", "42"),
            ("AIHERO_TELEGRAM_CHAT_ID", "  "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_with(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.telegram.bot_token(), Some("primary-token"));
        assert_eq!(config.telegram.chat_id(), Some("42"));
        assert!(config.telegram.is_configured());
    }

    #[test]
    fn test_blank_credentials_are_missing() {
        let config = TelegramConfig {
            bot_token: Some("   ".to_string()),
            chat_id: Some("1".to_string()),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
