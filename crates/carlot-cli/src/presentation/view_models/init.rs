use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigStatus {
    Saved,
    /// A config file was already there and `--force` was not given
    LoadedExisting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitResultViewModel {
    pub config_path: String,
    pub status: ConfigStatus,
    /// `None` means the built-in demo inventory
    pub reference_data: Option<String>,
    pub id_scheme: String,
}
