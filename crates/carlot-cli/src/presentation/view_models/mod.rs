pub mod common;
pub mod fields;
pub mod form;
pub mod init;
pub mod reference;
pub mod table;

pub use common::{StatusBarViewModel, StatusLevel};
pub use fields::{OptionView, SelectFieldView, TextFieldView};
pub use form::{CarFormView, FormField};
pub use init::{ConfigStatus, InitResultViewModel};
pub use reference::{BrandListViewModel, BrandRow, ModelListViewModel, ModelRow};
pub use table::{TableRowView, TableView};
