mod context;

pub mod brands;
pub mod init;
pub mod list;
pub mod models;
pub mod tui;

pub use context::HandlerContext;
