use super::args::{Cli, Commands};
use super::handlers;
use super::handlers::init::InitOptions;
use anyhow::Result;
use carlot_runtime::Workspace;
use carlot_store::RecordCollection;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = cli.data_dir.as_deref();
    // Init writes the config, so only the other commands open the workspace.
    let open_collection = || -> Result<RecordCollection> {
        Ok(Workspace::open(data_dir)?.open_collection()?)
    };

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::List { brand } => {
            handlers::list::handle(&open_collection()?, brand.as_deref(), cli.format)
        }
        Commands::Brands => handlers::brands::handle(&open_collection()?, cli.format),
        Commands::Models { brand } => {
            handlers::models::handle(&open_collection()?, brand.as_deref(), cli.format)
        }
        Commands::Tui => handlers::tui::handle(open_collection()?),
        Commands::Init {
            reference_data,
            id_scheme,
            force,
        } => {
            let options = InitOptions {
                reference_data,
                id_scheme: id_scheme.into(),
                force,
            };
            handlers::init::handle(data_dir, options, cli.format)
        }
    }
}
