use anyhow::Result;
use carlot_store::RecordCollection;

use crate::handlers::HandlerContext;
use crate::presentation::presenters::present_brand_list;
use crate::presentation::views::BrandListView;
use crate::types::OutputFormat;

pub fn handle(collection: &RecordCollection, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let view_model = present_brand_list(collection);

    ctx.render(&view_model.brands, BrandListView::new(&view_model))
}
