//! Configuration module for the ferc CLI.
//!
//! Settings come from an optional `ferc.toml`, looked up next to the
//! current directory and then in the user's configuration directory.
//! Command-line flags always win over the file.

use std::fs;
use std::path::Path;

use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::error::{FercError, Result};
use ferc_hl::ColorMode;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ferc.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// When to color highlighter output: `auto`, `always` or `never`.
    #[serde(default = "default_color")]
    pub color: String,

    /// Token-dump specific configuration.
    #[serde(default)]
    pub tokens: TokensConfig,
}

/// Configuration for the `tokens` subcommand.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Emit JSON by default instead of the line-oriented dump.
    #[serde(default)]
    pub json: bool,
}

fn default_color() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: default_color(),
            tokens: TokensConfig::default(),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicitly given path must exist and parse; otherwise `ferc.toml`
    /// in the current directory is tried, then `<config dir>/ferc/ferc.toml`,
    /// and finally the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        let local = Path::new(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::load_from(local);
        }

        if let Some(dir) = config_dir() {
            let global = dir.join("ferc").join(CONFIG_FILE_NAME);
            if global.exists() {
                return Self::load_from(&global);
            }
        }

        Ok(Self::default())
    }

    fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if ColorMode::from_name(&self.color).is_none() {
            return Err(FercError::Config(format!(
                "invalid color mode '{}' (expected auto, always, or never)",
                self.color
            )));
        }
        Ok(())
    }

    /// The configured color mode.
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_name(&self.color).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.color, "auto");
        assert!(!config.tokens.json);
        assert_eq!(config.color_mode(), ColorMode::Auto);
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            color = "always"

            [tokens]
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(config.color_mode(), ColorMode::Always);
        assert!(config.tokens.json);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config: Config = toml::from_str("color = \"never\"").unwrap();
        assert_eq!(config.color_mode(), ColorMode::Never);
        assert!(!config.tokens.json);
    }

    #[test]
    fn test_invalid_color_mode_is_rejected() {
        let config: Config = toml::from_str("color = \"sometimes\"").unwrap();
        assert!(matches!(config.validate(), Err(FercError::Config(_))));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/ferc.toml")));
        assert!(matches!(result, Err(FercError::Io(_))));
    }
}
