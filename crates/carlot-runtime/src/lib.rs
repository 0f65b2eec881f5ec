pub mod config;
pub mod error;
pub mod workspace;

pub use config::{Config, resolve_data_dir};
pub use error::{Error, Result};
pub use workspace::Workspace;
