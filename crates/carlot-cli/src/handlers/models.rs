use anyhow::Result;
use carlot_store::RecordCollection;

use crate::handlers::HandlerContext;
use crate::presentation::presenters::present_model_list;
use crate::presentation::views::ModelListView;
use crate::types::OutputFormat;

pub fn handle(collection: &RecordCollection, brand: Option<&str>, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let view_model = present_model_list(collection, brand);

    ctx.render(&view_model.models, ModelListView::new(&view_model))
}
