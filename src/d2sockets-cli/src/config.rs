//! Configuration management for the d2sockets CLI

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub manifest: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("d2sockets");

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
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

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

    pub fn get_manifest(&self) -> Option<&Path> {
        self.manifest.as_deref()
    }

    pub fn set_manifest(&mut self, path: PathBuf) {
        self.manifest = Some(path);
    }

    /// Pick the manifest path: explicit flag (or `D2_MANIFEST`) first, then config
    pub fn resolve_manifest(&self, flag: Option<&Path>) -> Result<PathBuf> {
        match flag.or(self.get_manifest()) {
            Some(path) => Ok(path.to_path_buf()),
            None => bail!(
                "No manifest configured. Pass --manifest, set D2_MANIFEST, \
                 or run `d2sockets configure --set-manifest <path>`"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_manifest(PathBuf::from("/data/world_content.json"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(
            loaded.get_manifest(),
            Some(Path::new("/data/world_content.json"))
        );
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "manifest = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_resolve_manifest() {
        let mut config = Config::default();
        assert!(config.resolve_manifest(None).is_err());

        config.set_manifest(PathBuf::from("configured.json"));
        assert_eq!(
            config.resolve_manifest(None).unwrap(),
            PathBuf::from("configured.json")
        );
        assert_eq!(
            config.resolve_manifest(Some(Path::new("flag.json"))).unwrap(),
            PathBuf::from("flag.json")
        );
    }
}
