pub mod init;
pub mod reference;
pub mod table;
pub mod tui;

pub use init::InitResultView;
pub use reference::{BrandListView, ModelListView};
pub use table::TableTextView;
