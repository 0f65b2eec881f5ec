use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

/// Output settings shared by the non-interactive handlers
pub struct HandlerContext {
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print `data` as JSON, or `view` as plain text
    pub fn render<T, V>(&self, data: &T, view: V) -> Result<()>
    where
        T: Serialize + ?Sized,
        V: Display,
    {
        let renderer = ConsoleRenderer::new(self.format.is_json());
        renderer.render(data, view)
    }
}
