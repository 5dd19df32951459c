//! Configuration management for erloc CLI

use anyhow::{Context, Result};
use erloc::Variant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub variant: Option<Variant>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("erloc");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Input path from the flag, the config, or the default file name
    pub fn resolve_input(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.input.clone())
            .unwrap_or_else(|| PathBuf::from(erloc::DEFAULT_INPUT))
    }

    /// Output directory from the flag, the config, or the current directory
    pub fn resolve_output_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn resolve_variant(&self, flag: Option<Variant>) -> Variant {
        flag.or(self.variant).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            input: Some(PathBuf::from("/data/itemslots.yaml")),
            output_dir: None,
            variant: Some(Variant::Basic),
        };
        config.save_to(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("variant = \"basic\""));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "variant = \"fancy\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_flag_beats_config_beats_default() {
        let config = Config {
            input: Some(PathBuf::from("configured.yaml")),
            output_dir: None,
            variant: Some(Variant::Basic),
        };

        assert_eq!(
            config.resolve_input(Some(PathBuf::from("flag.yaml"))),
            PathBuf::from("flag.yaml")
        );
        assert_eq!(config.resolve_input(None), PathBuf::from("configured.yaml"));
        assert_eq!(Config::default().resolve_input(None), PathBuf::from("itemslots.yaml"));

        assert_eq!(config.resolve_variant(Some(Variant::Refined)), Variant::Refined);
        assert_eq!(config.resolve_variant(None), Variant::Basic);
        assert_eq!(Config::default().resolve_variant(None), Variant::Refined);

        assert_eq!(config.resolve_output_dir(None), PathBuf::from("."));
    }
}
