use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::CarFormView;

use super::{SelectFieldWidget, TextFieldWidget, focus_style};

/// Create/edit form: four field lines, submit button, missing-value notice.
pub struct CarFormWidget<'a> {
    model: &'a CarFormView,
}

impl<'a> CarFormWidget<'a> {
    pub fn new(model: &'a CarFormView) -> Self {
        Self { model }
    }
}

impl<'a> Widget for CarFormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.model.edited {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let block = Block::default()
            .title(Span::styled(
                self.model.title.as_str(),
                focus_style(self.model.focused),
            ))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1), // brand
            Constraint::Length(1), // model
            Constraint::Length(1), // price
            Constraint::Length(1), // year
            Constraint::Length(1),
            Constraint::Length(1), // submit
            Constraint::Min(0),    // missing values
        ])
        .split(inner);

        SelectFieldWidget::new(&self.model.brand)
            .compact(true)
            .render(rows[0], buf);
        SelectFieldWidget::new(&self.model.model)
            .compact(true)
            .render(rows[1], buf);
        TextFieldWidget::new(&self.model.price).render(rows[2], buf);
        TextFieldWidget::new(&self.model.year).render(rows[3], buf);

        let button_color = if self.model.edited {
            Color::Yellow
        } else {
            Color::Green
        };
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("[ {} ]", self.model.submit_label),
                Style::default()
                    .fg(button_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Enter"),
        ]))
        .render(rows[5], buf);

        if !self.model.missing.is_empty() {
            Paragraph::new(Span::styled(
                format!("Missing: {}", self.model.missing.join(", ")),
                Style::default().fg(Color::Red),
            ))
            .render(rows[6], buf);
        }
    }
}
