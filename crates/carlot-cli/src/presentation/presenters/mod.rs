pub mod init;
pub mod inventory;
pub mod reference;

pub use init::present_init_result;
pub use inventory::{
    ALL_BRANDS_TITLE, brand_filter_options, brand_options, car_columns, car_rows, form_values,
    model_options, table_title,
};
pub use reference::{present_brand_list, present_model_list};
