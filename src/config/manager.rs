use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::fs::atomic_write;
use crate::paths;
use crate::translation::{DEFAULT_BASE_URL, DEFAULT_CONTEXT, DEFAULT_MODEL};

/// Environment variable consulted for the API key unless the config file
/// names another one.
pub const API_KEY_ENV: &str = "CARELINGO_API_KEY";

/// Built-in default source language.
pub const DEFAULT_SOURCE_LANG: &str = "en";

/// Built-in default target language.
pub const DEFAULT_TARGET_LANG: &str = "es";

/// Remote backend settings in the `[backend]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    /// OpenAI-compatible API base URL.
    pub base_url: Option<String>,
    /// Model requested for completions.
    pub model: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl BackendConfig {
    /// Gets the API key, preferring the environment over the config file.
    ///
    /// Returns `None` when neither source has a non-empty key. That is
    /// not an error: the translation service then runs in offline mode.
    pub fn get_api_key(&self) -> Option<String> {
        let env_var = self.api_key_env.as_deref().unwrap_or(API_KEY_ENV);
        if let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

/// Default translation settings in the `[defaults]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Source language code (ISO 639-1).
    pub from: Option<String>,
    /// Target language code (ISO 639-1).
    pub to: Option<String>,
    /// Domain context shaping the translation prompt.
    pub context: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/carelingo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Remote backend settings.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Default translation settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Resolved configuration after merging CLI arguments, the config file,
/// and built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API base URL.
    pub base_url: String,
    /// The model to use for translation.
    pub model: String,
    /// The API key; `None` selects offline mode.
    pub api_key: Option<String>,
    /// The source language code.
    pub from: String,
    /// The target language code.
    pub to: String,
    /// The domain context.
    pub context: String,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source language override.
    pub from: Option<String>,
    /// Target language override.
    pub to: Option<String>,
    /// Domain context override.
    pub context: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// API base URL override.
    pub base_url: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
/// Resolution cannot fail: every field has a built-in value, and a
/// missing API key selects offline mode rather than erroring.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    let base_url = options
        .base_url
        .clone()
        .or_else(|| config_file.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let model = options
        .model
        .clone()
        .or_else(|| config_file.backend.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let from = options
        .from
        .clone()
        .or_else(|| config_file.defaults.from.clone())
        .unwrap_or_else(|| DEFAULT_SOURCE_LANG.to_string());

    let to = options
        .to
        .clone()
        .or_else(|| config_file.defaults.to.clone())
        .unwrap_or_else(|| DEFAULT_TARGET_LANG.to_string());

    let context = options
        .context
        .clone()
        .or_else(|| config_file.defaults.context.clone())
        .unwrap_or_else(|| DEFAULT_CONTEXT.to_string());

    let api_key = config_file.backend.get_api_key();

    ResolvedConfig {
        base_url,
        model,
        api_key,
        from,
        to,
        context,
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/carelingo/config.toml`
    /// or `~/.config/carelingo/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            backend: BackendConfig {
                base_url: Some("http://localhost:8080/v1".to_string()),
                model: Some("test-model".to_string()),
                api_key: None,
                api_key_env: Some("TEST_KEY_VAR".to_string()),
            },
            defaults: DefaultsConfig {
                from: Some("en".to_string()),
                to: Some("fr".to_string()),
                context: Some("healthcare".to_string()),
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(
            loaded.backend.base_url,
            Some("http://localhost:8080/v1".to_string())
        );
        assert_eq!(loaded.backend.model, Some("test-model".to_string()));
        assert_eq!(loaded.backend.api_key_env, Some("TEST_KEY_VAR".to_string()));
        assert_eq!(loaded.defaults.from, Some("en".to_string()));
        assert_eq!(loaded.defaults.to, Some("fr".to_string()));
        assert_eq!(loaded.defaults.context, Some("healthcare".to_string()));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let result = manager.load();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = manager.load_or_default();
        assert!(config.backend.base_url.is_none());
        assert!(config.defaults.from.is_none());
    }

    #[test]
    fn test_partial_config_file_parses() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        fs::write(
            manager.config_path(),
            "[defaults]\nto = \"fr\"\n",
        )
        .unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.defaults.to, Some("fr".to_string()));
        assert!(loaded.defaults.from.is_none());
        assert!(loaded.backend.base_url.is_none());
    }

    #[test]
    fn test_get_api_key_from_custom_env() {
        // SAFETY: test-specific env var name, not shared with other tests
        unsafe {
            std::env::set_var("CARELINGO_TEST_KEY_A", "env-key-value");
        }

        let backend = BackendConfig {
            base_url: None,
            model: None,
            api_key: Some("file-key".to_string()),
            api_key_env: Some("CARELINGO_TEST_KEY_A".to_string()),
        };

        // Environment variable takes priority over the file value
        assert_eq!(backend.get_api_key(), Some("env-key-value".to_string()));

        // SAFETY: cleanup of the test-specific env var
        unsafe {
            std::env::remove_var("CARELINGO_TEST_KEY_A");
        }
    }

    #[test]
    fn test_get_api_key_falls_back_to_file() {
        let backend = BackendConfig {
            base_url: None,
            model: None,
            api_key: Some("file-key".to_string()),
            api_key_env: Some("CARELINGO_TEST_KEY_UNSET".to_string()),
        };

        assert_eq!(backend.get_api_key(), Some("file-key".to_string()));
    }

    #[test]
    fn test_get_api_key_empty_values_mean_offline() {
        let backend = BackendConfig {
            base_url: None,
            model: None,
            api_key: Some(String::new()),
            api_key_env: Some("CARELINGO_TEST_KEY_UNSET_B".to_string()),
        };

        assert_eq!(backend.get_api_key(), None);
    }
}
