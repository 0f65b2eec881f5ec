use carlot_store::{RecordCollection, ReferenceData};
use std::path::{Path, PathBuf};

use crate::config::{Config, resolve_data_dir};
use crate::Result;

/// Data directory plus the configuration read from it.
#[derive(Debug, Clone)]
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
}

impl Workspace {
    pub fn open(explicit_path: Option<&str>) -> Result<Self> {
        let data_dir = resolve_data_dir(explicit_path)?;
        Self::open_at(data_dir)
    }

    pub fn open_at(data_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from_dir(&data_dir)?;
        tracing::debug!(data_dir = %data_dir.display(), ?config, "workspace opened");

        Ok(Self { data_dir, config })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn load_reference_data(&self) -> Result<ReferenceData> {
        match self.config.reference_data_path(&self.data_dir) {
            Some(path) => Ok(ReferenceData::load_from(&path)?),
            None => {
                tracing::debug!("no reference data configured, using demo dataset");
                Ok(ReferenceData::demo())
            }
        }
    }

    /// Load the tables and hand them to a collection using the configured id scheme.
    pub fn open_collection(&self) -> Result<RecordCollection> {
        let data = self.load_reference_data()?;
        let ids = self.config.id_scheme.generator(&data.cars);

        Ok(RecordCollection::new(data).with_id_generator(ids))
    }
}
