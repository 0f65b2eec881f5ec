//! Car table widget
//!
//! Renders the stringified rows with an action column. The cursor row is
//! reversed while the table has focus; the edited row is drawn in yellow.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use crate::presentation::view_models::TableView;

use super::focus_style;

const ACTIONS_WIDTH: u16 = 17;

pub struct TableWidget<'a> {
    model: &'a TableView,
}

impl<'a> TableWidget<'a> {
    pub fn new(model: &'a TableView) -> Self {
        Self { model }
    }
}

impl<'a> Widget for TableWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!("{} ({})", self.model.title, self.model.rows.len()),
                focus_style(self.model.focused),
            ))
            .borders(Borders::ALL);

        if self.model.rows.is_empty() {
            Paragraph::new("No cars to show.")
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(
            self.model
                .headers
                .iter()
                .map(|header| Cell::from(header.as_str()))
                .chain(std::iter::once(Cell::from(""))),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.model.rows.iter().enumerate().map(|(index, row)| {
            let actions = format!("[{}] [{}]", row.edit_label, row.delete_label);
            let cells = row
                .cells
                .iter()
                .map(|cell| Cell::from(cell.as_str()))
                .chain(std::iter::once(Cell::from(actions)));

            let mut style = Style::default();
            if row.edited {
                style = style.fg(Color::Yellow);
            }
            if self.model.focused && self.model.cursor == Some(index) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Row::new(cells).style(style)
        });

        let widths = self
            .model
            .headers
            .iter()
            .map(|_| Constraint::Fill(1))
            .chain(std::iter::once(Constraint::Length(ACTIONS_WIDTH)));

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .render(area, buf);
    }
}
