use anyhow::Result;
use carlot_store::RecordCollection;

use crate::app::App;
use crate::presentation::TuiRenderer;

pub fn handle(collection: RecordCollection) -> Result<()> {
    let app = App::new(collection)?;
    tracing::info!(cars = app.collection().len(), "starting inventory screen");

    TuiRenderer::new(app).run()
}
