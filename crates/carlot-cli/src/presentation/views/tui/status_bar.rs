//! Status Bar View Component
//!
//! Renders the bottom status bar with the car count, the last status message
//! and the key bindings.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarWidget<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::raw(format!("Cars: {} ", self.model.car_count)),
            Span::raw("| "),
            Span::styled(&self.model.message, Style::default().fg(color)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[Tab]", key),
            Span::raw("pane "),
            Span::styled("[e]", key),
            Span::raw("dit "),
            Span::styled("[d]", key),
            Span::raw("elete "),
            Span::styled("[Esc]", key),
            Span::raw("quit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;
    use crate::presentation::views::tui::buffer_lines;

    #[test]
    fn test_status_message_uses_level_color() {
        let model = StatusBarViewModel {
            level: StatusLevel::Error,
            message: "Model not found: m404".to_string(),
            car_count: 4,
        };
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 3));

        StatusBarWidget::new(&model).render(buf.area, &mut buf);

        let line = &buffer_lines(&buf)[1];
        assert!(line.contains("Cars: 4 | Model not found: m404"));
        assert!(line.contains("[Esc]quit"));

        let message_x = line
            .chars()
            .position(|c| c == 'M')
            .map(|x| x as u16)
            .unwrap_or_default();
        assert_eq!(buf[(message_x, 1)].fg, Color::Red);
    }
}
