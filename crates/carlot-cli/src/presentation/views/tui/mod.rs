//! Ratatui widgets.
//!
//! Each widget borrows a view model and maps it onto the terminal buffer.
//! Widgets hold no state and make no decisions beyond layout; color mapping
//! from `StatusLevel` happens here.

pub mod fields;
pub mod form;
pub mod status_bar;
pub mod table;

pub use fields::{SelectFieldWidget, TextFieldWidget};
pub use form::CarFormWidget;
pub use status_bar::StatusBarWidget;
pub use table::TableWidget;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::{Color, Modifier, Style};

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let width = buf.area.width as usize;
    buf.content()
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}
