use carlot_runtime::Config;
use carlot_store::IdScheme;
use std::path::Path;

use crate::presentation::view_models::{ConfigStatus, InitResultViewModel};

pub fn present_init_result(
    config_path: &Path,
    config: &Config,
    status: ConfigStatus,
) -> InitResultViewModel {
    let id_scheme = match config.id_scheme {
        IdScheme::Sequential => "sequential",
        IdScheme::Uuid => "uuid",
    };

    InitResultViewModel {
        config_path: config_path.display().to_string(),
        status,
        reference_data: config
            .reference_data
            .as_ref()
            .map(|path| path.display().to_string()),
        id_scheme: id_scheme.to_string(),
    }
}
