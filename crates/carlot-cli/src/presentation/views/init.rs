use std::fmt;

use crate::presentation::view_models::{ConfigStatus, InitResultViewModel};

pub struct InitResultView<'a> {
    data: &'a InitResultViewModel,
}

impl<'a> InitResultView<'a> {
    pub fn new(data: &'a InitResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.status {
            ConfigStatus::Saved => writeln!(f, "Configuration saved to {}", self.data.config_path)?,
            ConfigStatus::LoadedExisting => {
                writeln!(f, "Configuration already exists at {}", self.data.config_path)?;
                writeln!(f, "  (use --force to overwrite)")?;
            }
        }

        let reference = self
            .data
            .reference_data
            .as_deref()
            .unwrap_or("built-in demo inventory");
        writeln!(f, "  Reference data: {}", reference)?;
        writeln!(f, "  Id scheme:      {}", self.data.id_scheme)?;

        Ok(())
    }
}
