use clap::{Parser, Subcommand};

use std::path::PathBuf;

use crate::types::{IdSchemeArg, LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "carlot")]
#[command(about = "Browse and edit a vehicle inventory in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $CARLOT_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the inventory joined with brand and model titles
    List {
        /// Only cars whose model belongs to this brand id
        #[arg(long)]
        brand: Option<String>,
    },

    /// Print the brand reference table
    Brands,

    /// Print the model reference table
    Models {
        /// Only models of this brand id
        #[arg(long)]
        brand: Option<String>,
    },

    /// Open the interactive inventory (default)
    Tui,

    /// Write config.toml into the data directory
    Init {
        /// JSON file with brands/models/cars (relative paths resolve against the data directory)
        #[arg(long)]
        reference_data: Option<PathBuf>,

        #[arg(long, default_value = "sequential")]
        id_scheme: IdSchemeArg,

        /// Overwrite an existing config.toml
        #[arg(long)]
        force: bool,
    },
}
