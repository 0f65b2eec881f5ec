use anyhow::Result;
use carlot_runtime::{Config, resolve_data_dir};
use carlot_store::IdScheme;
use std::path::PathBuf;

use crate::handlers::HandlerContext;
use crate::presentation::presenters::present_init_result;
use crate::presentation::view_models::ConfigStatus;
use crate::presentation::views::InitResultView;
use crate::types::OutputFormat;

pub struct InitOptions {
    pub reference_data: Option<PathBuf>,
    pub id_scheme: IdScheme,
    pub force: bool,
}

/// Write `config.toml` into the data directory. An existing file is left
/// alone unless `force` is set.
pub fn handle(data_dir: Option<&str>, options: InitOptions, format: OutputFormat) -> Result<()> {
    let data_dir = resolve_data_dir(data_dir)?;
    let config_path = data_dir.join(Config::FILE_NAME);

    let (config, status) = if config_path.exists() && !options.force {
        tracing::debug!(path = %config_path.display(), "config exists, not overwriting");
        (Config::load_from(&config_path)?, ConfigStatus::LoadedExisting)
    } else {
        let config = Config {
            reference_data: options.reference_data,
            id_scheme: options.id_scheme,
        };
        config.save_to(&config_path)?;
        tracing::info!(path = %config_path.display(), "config saved");
        (config, ConfigStatus::Saved)
    };

    let ctx = HandlerContext::new(format);
    let view_model = present_init_result(&config_path, &config, status);

    ctx.render(&view_model, InitResultView::new(&view_model))
}
