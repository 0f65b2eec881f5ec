use anyhow::Result;
use carlot_store::RecordCollection;

use crate::handlers::HandlerContext;
use crate::presentation::components::{Callback, Component, Table, TableProps};
use crate::presentation::presenters::{car_columns, car_rows, table_title};
use crate::presentation::views::TableTextView;
use crate::types::OutputFormat;

pub fn handle(collection: &RecordCollection, brand: Option<&str>, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);

    let cars = match brand {
        Some(brand_id) => collection.get_by_brand_id(brand_id),
        None => collection.get_all_cars(),
    };

    let table = Table::new(TableProps {
        title: table_title(collection, brand),
        columns: car_columns(),
        rows: car_rows(&cars),
        edited_row_id: None,
        on_edit: Callback::noop(),
        on_delete: Callback::noop(),
        focused: false,
    })?;

    ctx.render(&cars, TableTextView::new(table.output()))
}
