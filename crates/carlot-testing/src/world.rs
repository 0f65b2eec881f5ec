//! Temporary carlot data directory for CLI-level tests.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// A throwaway data directory, removed on drop.
pub struct TestWorld {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl TestWorld {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let data_dir = temp_dir.path().join(".carlot");
        fs::create_dir_all(&data_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Write the fixture inventory and a config pointing at it.
    pub fn with_inventory(self) -> Result<Self> {
        let reference_path = self.data_dir.join("inventory.json");
        fs::write(&reference_path, fixtures::inventory_json())?;

        self.write_config(&format!(
            "reference_data = {:?}\nid_scheme = \"sequential\"\n",
            reference_path.display().to_string()
        ))?;

        Ok(self)
    }

    pub fn write_config(&self, content: &str) -> Result<()> {
        fs::write(self.data_dir.join("config.toml"), content)?;
        Ok(())
    }
}
