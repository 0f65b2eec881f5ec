use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

pub struct ConsoleRenderer {
    json_mode: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self { json_mode }
    }

    /// Print `data` as pretty JSON in JSON mode, `view` otherwise.
    pub fn render<T, V>(&self, data: &T, view: V) -> Result<()>
    where
        T: Serialize + ?Sized,
        V: Display,
    {
        let stdout = std::io::stdout();
        self.render_to(&mut stdout.lock(), data, view)
    }

    pub fn render_to<W, T, V>(&self, out: &mut W, data: &T, view: V) -> Result<()>
    where
        W: Write,
        T: Serialize + ?Sized,
        V: Display,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(data)?)?;
        } else {
            write!(out, "{}", view)?;
        }
        Ok(())
    }
}
