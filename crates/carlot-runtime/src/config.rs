use crate::{Error, Result};
use carlot_store::IdScheme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CARLOT_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.carlot (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CARLOT_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("carlot"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".carlot"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// JSON file with brands/models/cars. The built-in demo data is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_data: Option<PathBuf>,

    #[serde(default)]
    pub id_scheme: IdScheme,
}

impl Config {
    pub const FILE_NAME: &'static str = "config.toml";

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        Self::load_from(&data_dir.join(Self::FILE_NAME))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reference data path with `~` expanded and relative paths anchored at `data_dir`.
    pub fn reference_data_path(&self, data_dir: &Path) -> Option<PathBuf> {
        let path = self.reference_data.as_ref()?;
        let expanded = expand_tilde(&path.to_string_lossy());

        if expanded.is_relative() {
            Some(data_dir.join(expanded))
        } else {
            Some(expanded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.reference_data.is_none());
        assert_eq!(config.id_scheme, IdScheme::Sequential);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            reference_data: Some(PathBuf::from("/srv/inventory.json")),
            id_scheme: IdScheme::Uuid,
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_parse_lowercase_id_scheme() -> Result<()> {
        let config: Config = toml::from_str("id_scheme = \"uuid\"")?;
        assert_eq!(config.id_scheme, IdScheme::Uuid);
        Ok(())
    }

    #[test]
    fn test_unknown_id_scheme_is_config_error() {
        let err = toml::from_str::<Config>("id_scheme = \"random\"")
            .map_err(Error::from)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_relative_reference_path_is_anchored_at_data_dir() {
        let config = Config {
            reference_data: Some(PathBuf::from("inventory.json")),
            id_scheme: IdScheme::Sequential,
        };

        assert_eq!(
            config.reference_data_path(Path::new("/data/carlot")),
            Some(PathBuf::from("/data/carlot/inventory.json"))
        );
    }

    #[test]
    fn test_explicit_data_dir_wins() -> Result<()> {
        let dir = resolve_data_dir(Some("/tmp/carlot-explicit"))?;
        assert_eq!(dir, PathBuf::from("/tmp/carlot-explicit"));
        Ok(())
    }
}
