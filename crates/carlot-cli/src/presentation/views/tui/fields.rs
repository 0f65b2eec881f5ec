use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

use crate::presentation::view_models::{SelectFieldView, TextFieldView};

use super::focus_style;

/// Select field widget
///
/// Compact mode draws a single `Label: < Option >` line; otherwise the
/// options are listed inside a block titled with the label.
pub struct SelectFieldWidget<'a> {
    model: &'a SelectFieldView,
    compact: bool,
}

impl<'a> SelectFieldWidget<'a> {
    pub fn new(model: &'a SelectFieldView) -> Self {
        Self {
            model,
            compact: false,
        }
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

impl<'a> Widget for SelectFieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = focus_style(self.model.focused);

        if self.compact {
            let title = self
                .model
                .selected()
                .map(|option| option.title.as_str())
                .unwrap_or("-");

            let line = Line::from(vec![
                Span::styled(format!("{}: ", self.model.label), label_style),
                Span::raw(format!("< {} >", title)),
            ]);
            Paragraph::new(line).render(area, buf);
            return;
        }

        let block = Block::default()
            .title(Span::styled(self.model.label.as_str(), label_style))
            .borders(Borders::ALL);

        let items: Vec<ListItem> = self
            .model
            .options
            .iter()
            .map(|option| {
                if option.selected {
                    ListItem::new(Span::styled(
                        format!("▶ {}", option.title),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                } else {
                    ListItem::new(format!("  {}", option.title))
                }
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}

/// Single-line text input: `Label: value`
pub struct TextFieldWidget<'a> {
    model: &'a TextFieldView,
}

impl<'a> TextFieldWidget<'a> {
    pub fn new(model: &'a TextFieldView) -> Self {
        Self { model }
    }
}

impl<'a> Widget for TextFieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                format!("{}: ", self.model.label),
                focus_style(self.model.focused),
            ),
            Span::raw(self.model.value.as_str()),
        ];
        if self.model.focused {
            spans.push(Span::styled(
                "_",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
