//! Configuration management for Gatehouse.
//!
//! Loads configuration from ${GATEHOUSE_HOME}/config.toml with sensible
//! defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Theme colors as "#rrggbb" hex strings.
///
/// Values that fail to parse fall back to the default for that slot at
/// render time; configuration loading never rejects them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Accent color: card border, title, focused elements.
    pub primary: String,
    /// Failing-field borders and inline error text.
    pub error: String,
    /// Success banner text.
    pub success: String,
    /// Unfocused field borders and helper text.
    pub border: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#ff6d00".to_string(),
            error: "#ff1744".to_string(),
            success: "#388e3c".to_string(),
            border: "#9e9e9e".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Title shown at the top of the form card.
    pub title: String,
    /// Theme colors.
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Login".to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Saves configuration to the default config path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&paths::config_path())
    }

    /// Saves configuration to a specific path.
    ///
    /// User values are merged into the commented template so new sections
    /// from an upgrade stay visible in the file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let serialized = toml::to_string(self).context("Failed to serialize config")?;
        let merged = merge_with_template(&serialized)?;
        fs::write(path, merged)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// This ensures new comments/sections from the template are always present,
/// while preserving the user's customized values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;

    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for Gatehouse configuration and data directories.
    //!
    //! GATEHOUSE_HOME resolution order:
    //! 1. GATEHOUSE_HOME environment variable (if set)
    //! 2. ~/.config/gatehouse (default)

    use std::path::PathBuf;

    /// Returns the Gatehouse home directory.
    pub fn gatehouse_home() -> PathBuf {
        if let Ok(home) = std::env::var("GATEHOUSE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("gatehouse"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        gatehouse_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        gatehouse_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    /// Config loading: missing file returns defaults.
    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.title, "Login");
        assert_eq!(config.theme.primary, "#ff6d00");
    }

    /// Config loading: partial config merges with defaults.
    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "title = \"Sign in\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.title, "Sign in");
        assert_eq!(config.theme.error, "#ff1744");
    }

    /// Config loading: invalid TOML is an error, not silent defaults.
    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "title = [unclosed\n").unwrap();

        assert!(Config::load_from(&config_path).is_err());
    }

    /// Save then load round-trips customized values.
    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.title = "Register".to_string();
        config.theme.primary = "#123456".to_string();
        config.save_to(&config_path).unwrap();

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    /// Saved files keep the template's comments.
    #[test]
    fn test_save_preserves_template_comments() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        Config::default().save_to(&config_path).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("# Gatehouse configuration"));
        assert!(content.contains("[theme]"));
    }
}
