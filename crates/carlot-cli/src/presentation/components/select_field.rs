use crossterm::event::{KeyCode, KeyEvent};
use serde::Serialize;

use super::{Callback, Component, ElementIds, HandleKey};
use crate::presentation::error::Result;
use crate::presentation::view_models::{OptionView, SelectFieldView};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub title: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectFieldProps {
    pub label: String,
    pub options: Vec<SelectOption>,
    /// Receives the option value whenever the selection moves
    pub on_change: Option<Callback<String>>,
    pub name: Option<String>,
    /// Value of the option to show as selected; the first option when unset or unknown
    pub value: Option<String>,
    pub focused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SelectFieldPatch {
    pub label: Option<String>,
    pub options: Option<Vec<SelectOption>>,
    pub on_change: Option<Option<Callback<String>>>,
    pub name: Option<Option<String>>,
    pub value: Option<Option<String>>,
    pub focused: Option<bool>,
}

#[derive(Debug)]
pub struct SelectField {
    element_id: String,
    props: SelectFieldProps,
    /// Index of the selected option (UI state)
    selected: usize,
    output: SelectFieldView,
}

impl SelectField {
    pub fn new(props: SelectFieldProps, ids: &mut ElementIds) -> Self {
        let element_id = ids.next("select");
        let selected = index_of_value(&props);
        let output = render_select(&element_id, &props, selected);

        Self {
            element_id,
            props,
            selected,
            output,
        }
    }

    /// Value of the selected option; `None` when there are no options.
    pub fn current_value(&self) -> Option<&str> {
        self.props
            .options
            .get(self.selected)
            .map(|option| option.value.as_str())
    }

    /// Select the option at `index` and report it through `on_change`.
    /// Returns `false` when the index is out of range or already selected.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.props.options.len() || index == self.selected {
            return false;
        }

        self.selected = index;
        self.output = self.render();

        if let Some(on_change) = &self.props.on_change {
            on_change.emit(self.props.options[index].value.clone());
        }
        true
    }
}

impl Component for SelectField {
    type Props = SelectFieldProps;
    type Patch = SelectFieldPatch;
    type Output = SelectFieldView;

    fn props(&self) -> &SelectFieldProps {
        &self.props
    }

    fn render(&self) -> SelectFieldView {
        render_select(&self.element_id, &self.props, self.selected)
    }

    fn output(&self) -> &SelectFieldView {
        &self.output
    }

    fn update_props(&mut self, patch: SelectFieldPatch) -> Result<()> {
        let resync = patch.value.is_some() || patch.options.is_some();

        if let Some(label) = patch.label {
            self.props.label = label;
        }
        if let Some(options) = patch.options {
            self.props.options = options;
        }
        if let Some(on_change) = patch.on_change {
            self.props.on_change = on_change;
        }
        if let Some(name) = patch.name {
            self.props.name = name;
        }
        if let Some(value) = patch.value {
            self.props.value = value;
        }
        if let Some(focused) = patch.focused {
            self.props.focused = focused;
        }

        if resync {
            self.selected = index_of_value(&self.props);
        }
        self.output = self.render();
        Ok(())
    }
}

impl HandleKey for SelectField {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let last = self.props.options.len().saturating_sub(1);

        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
                self.select_index(self.selected.saturating_sub(1));
                true
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
                self.select_index((self.selected + 1).min(last));
                true
            }
            KeyCode::Home => {
                self.select_index(0);
                true
            }
            KeyCode::End => {
                self.select_index(last);
                true
            }
            _ => false,
        }
    }
}

fn index_of_value(props: &SelectFieldProps) -> usize {
    props
        .value
        .as_deref()
        .and_then(|value| props.options.iter().position(|option| option.value == value))
        .unwrap_or(0)
}

fn render_select(element_id: &str, props: &SelectFieldProps, selected: usize) -> SelectFieldView {
    SelectFieldView {
        element_id: element_id.to_string(),
        label: props.label.clone(),
        name: props.name.clone(),
        options: props
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionView {
                title: option.title.clone(),
                value: option.value.clone(),
                selected: index == selected,
            })
            .collect(),
        focused: props.focused,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn brand_options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("Toyota", "b1"),
            SelectOption::new("Volkswagen", "b2"),
            SelectOption::new("BMW", "b3"),
        ]
    }

    fn props() -> SelectFieldProps {
        SelectFieldProps {
            label: "Brand".to_string(),
            options: brand_options(),
            on_change: None,
            name: Some("brand".to_string()),
            value: None,
            focused: false,
        }
    }

    fn recorder() -> (Callback<String>, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (Callback::new(move |value| sink.borrow_mut().push(value)), seen)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_defaults_to_first_option() {
        let field = SelectField::new(props(), &mut ElementIds::new());

        assert_eq!(field.current_value(), Some("b1"));
        assert_eq!(field.output().selected().map(|o| o.title.as_str()), Some("Toyota"));
    }

    #[test]
    fn test_value_prop_selects_matching_option() {
        let mut initial = props();
        initial.value = Some("b3".to_string());

        let field = SelectField::new(initial, &mut ElementIds::new());

        assert_eq!(field.current_value(), Some("b3"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let field = SelectField::new(props(), &mut ElementIds::new());

        assert_eq!(field.render(), field.render());
        assert_eq!(&field.render(), field.output());
    }

    #[test]
    fn test_update_props_merges_and_keeps_unspecified() {
        let mut field = SelectField::new(props(), &mut ElementIds::new());

        field
            .update_props(SelectFieldPatch {
                label: Some("Make".to_string()),
                ..Default::default()
            })
            .unwrap();

        let output = field.output();
        assert_eq!(output.label, "Make");
        assert_eq!(output.name.as_deref(), Some("brand"));
        assert_eq!(output.options.len(), 3);
    }

    #[test]
    fn test_replacing_value_moves_selection() {
        let mut field = SelectField::new(props(), &mut ElementIds::new());

        field
            .update_props(SelectFieldPatch {
                value: Some(Some("b2".to_string())),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(field.current_value(), Some("b2"));
        assert!(field.output().options[1].selected);
    }

    #[test]
    fn test_keys_move_selection_and_emit_change() {
        let (on_change, seen) = recorder();
        let mut initial = props();
        initial.on_change = Some(on_change);
        let mut field = SelectField::new(initial, &mut ElementIds::new());

        assert!(field.handle_key(key(KeyCode::Down)));
        assert!(field.handle_key(key(KeyCode::Down)));
        // Already at the last option: nothing emitted.
        assert!(field.handle_key(key(KeyCode::Down)));
        assert!(field.handle_key(key(KeyCode::Up)));

        assert_eq!(*seen.borrow(), vec!["b2", "b3", "b2"]);
        assert_eq!(field.current_value(), Some("b2"));
    }

    #[test]
    fn test_selection_without_callback_is_silent() {
        let mut field = SelectField::new(props(), &mut ElementIds::new());

        assert!(field.select_index(2));
        assert!(!field.select_index(9));
        assert_eq!(field.current_value(), Some("b3"));
    }

    #[test]
    fn test_empty_options_have_no_value() {
        let mut initial = props();
        initial.options.clear();
        let mut field = SelectField::new(initial, &mut ElementIds::new());

        assert_eq!(field.current_value(), None);
        assert!(!field.select_index(0));
    }

    #[test]
    fn test_element_ids_come_from_sequence() {
        let mut ids = ElementIds::new();
        let first = SelectField::new(props(), &mut ids);
        let second = SelectField::new(props(), &mut ids);

        assert_eq!(first.output().element_id, "select-1");
        assert_eq!(second.output().element_id, "select-2");
    }
}
