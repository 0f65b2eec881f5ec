use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Component, ElementIds, HandleKey};
use crate::presentation::error::Result;
use crate::presentation::view_models::TextFieldView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldProps {
    pub label: String,
    pub name: String,
    /// Initial text; replacing it discards whatever was typed
    pub value: Option<String>,
    pub focused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TextFieldPatch {
    pub label: Option<String>,
    pub name: Option<String>,
    pub value: Option<Option<String>>,
    pub focused: Option<bool>,
}

#[derive(Debug)]
pub struct TextField {
    element_id: String,
    props: TextFieldProps,
    input: String,
    output: TextFieldView,
}

impl TextField {
    pub fn new(props: TextFieldProps, ids: &mut ElementIds) -> Self {
        let element_id = ids.next("input");
        let input = props.value.clone().unwrap_or_default();
        let output = render_text(&element_id, &props, &input);

        Self {
            element_id,
            props,
            input,
            output,
        }
    }

    /// Typed text, trimmed; `None` when nothing but whitespace was entered.
    pub fn current_value(&self) -> Option<&str> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.output = self.render();
    }

    pub fn pop_char(&mut self) {
        if self.input.pop().is_some() {
            self.output = self.render();
        }
    }
}

impl Component for TextField {
    type Props = TextFieldProps;
    type Patch = TextFieldPatch;
    type Output = TextFieldView;

    fn props(&self) -> &TextFieldProps {
        &self.props
    }

    fn render(&self) -> TextFieldView {
        render_text(&self.element_id, &self.props, &self.input)
    }

    fn output(&self) -> &TextFieldView {
        &self.output
    }

    fn update_props(&mut self, patch: TextFieldPatch) -> Result<()> {
        if let Some(label) = patch.label {
            self.props.label = label;
        }
        if let Some(name) = patch.name {
            self.props.name = name;
        }
        if let Some(value) = patch.value {
            self.input = value.clone().unwrap_or_default();
            self.props.value = value;
        }
        if let Some(focused) = patch.focused {
            self.props.focused = focused;
        }

        self.output = self.render();
        Ok(())
    }
}

impl HandleKey for TextField {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.push_char(c);
                true
            }
            KeyCode::Backspace => {
                self.pop_char();
                true
            }
            _ => false,
        }
    }
}

fn render_text(element_id: &str, props: &TextFieldProps, input: &str) -> TextFieldView {
    TextFieldView {
        element_id: element_id.to_string(),
        label: props.label.clone(),
        name: props.name.clone(),
        value: input.to_string(),
        focused: props.focused,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price_field(value: Option<&str>) -> TextField {
        TextField::new(
            TextFieldProps {
                label: "Price".to_string(),
                name: "price".to_string(),
                value: value.map(str::to_string),
                focused: true,
            },
            &mut ElementIds::new(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_initial_value_fills_input() {
        let field = price_field(Some("15000"));

        assert_eq!(field.current_value(), Some("15000"));
        assert_eq!(field.output().value, "15000");
        assert_eq!(field.output().element_id, "input-1");
    }

    #[test]
    fn test_empty_input_has_no_value() {
        let mut field = price_field(None);
        assert_eq!(field.current_value(), None);

        field.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(field.current_value(), None);
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = price_field(None);

        for c in "1250".chars() {
            assert!(field.handle_key(key(KeyCode::Char(c))));
        }
        assert!(field.handle_key(key(KeyCode::Backspace)));

        assert_eq!(field.current_value(), Some("125"));
        assert_eq!(field.output().value, "125");
    }

    #[test]
    fn test_control_keys_are_not_consumed() {
        let mut field = price_field(Some("1"));

        assert!(!field.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!field.handle_key(key(KeyCode::Enter)));
        assert_eq!(field.current_value(), Some("1"));
    }

    #[test]
    fn test_replacing_value_resets_input() {
        let mut field = price_field(Some("100"));
        field.handle_key(key(KeyCode::Char('9')));

        field
            .update_props(TextFieldPatch {
                value: Some(None),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(field.current_value(), None);
        assert_eq!(field.props().value, None);
    }

    #[test]
    fn test_patch_without_value_keeps_typed_text() {
        let mut field = price_field(None);
        field.handle_key(key(KeyCode::Char('7')));

        field
            .update_props(TextFieldPatch {
                focused: Some(false),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(field.current_value(), Some("7"));
        assert!(!field.output().focused);
        assert_eq!(field.output().label, "Price");
    }
}
