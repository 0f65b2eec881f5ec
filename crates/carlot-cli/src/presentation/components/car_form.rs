use crossterm::event::{KeyCode, KeyEvent};
use serde::Serialize;

use super::{
    Callback, Component, ElementIds, HandleKey, SelectField, SelectFieldPatch, SelectFieldProps,
    SelectOption, TextField, TextFieldPatch, TextFieldProps,
};
use crate::presentation::error::{ComponentError, Result};
use crate::presentation::view_models::{CarFormView, FormField};

/// Raw form input, one string per field; empty means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub brand: String,
    pub model: String,
    pub price: String,
    pub year: String,
}

impl FormValues {
    fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Brand => &self.brand,
            FormField::Model => &self.model,
            FormField::Price => &self.price,
            FormField::Year => &self.year,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CarFormProps {
    pub title: String,
    pub values: FormValues,
    pub submit_label: String,
    pub on_submit: Callback<FormValues>,
    pub is_edited: bool,
    pub brand_options: Vec<SelectOption>,
    pub model_options: Vec<SelectOption>,
    pub focused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CarFormPatch {
    pub title: Option<String>,
    pub values: Option<FormValues>,
    pub submit_label: Option<String>,
    pub on_submit: Option<Callback<FormValues>>,
    pub is_edited: Option<bool>,
    pub brand_options: Option<Vec<SelectOption>>,
    pub model_options: Option<Vec<SelectOption>>,
    pub focused: Option<bool>,
}

#[derive(Debug)]
pub struct CarForm {
    props: CarFormProps,
    brand: SelectField,
    model: SelectField,
    price: TextField,
    year: TextField,
    focused_field: FormField,
    missing: Vec<&'static str>,
    output: CarFormView,
}

impl CarForm {
    pub fn new(props: CarFormProps, ids: &mut ElementIds) -> Self {
        let select = |label: &str, field: FormField, options: &[SelectOption]| SelectFieldProps {
            label: label.to_string(),
            options: options.to_vec(),
            on_change: None,
            name: Some(field.name().to_string()),
            value: non_empty(props.values.get(field)),
            focused: false,
        };
        let text = |label: &str, field: FormField| TextFieldProps {
            label: label.to_string(),
            name: field.name().to_string(),
            value: non_empty(props.values.get(field)),
            focused: false,
        };

        let brand = SelectField::new(
            select("Brand", FormField::Brand, &props.brand_options),
            ids,
        );
        let model = SelectField::new(
            select("Model", FormField::Model, &props.model_options),
            ids,
        );
        let price = TextField::new(text("Price", FormField::Price), ids);
        let year = TextField::new(text("Year", FormField::Year), ids);

        let mut form = Self {
            output: CarFormView {
                title: props.title.clone(),
                submit_label: props.submit_label.clone(),
                edited: props.is_edited,
                focused: props.focused,
                focused_field: FormField::Brand,
                brand: brand.output().clone(),
                model: model.output().clone(),
                price: price.output().clone(),
                year: year.output().clone(),
                missing: Vec::new(),
            },
            props,
            brand,
            model,
            price,
            year,
            focused_field: FormField::Brand,
            missing: Vec::new(),
        };
        form.sync_focus();
        form.output = form.render();
        form
    }

    pub fn focused_field(&self) -> FormField {
        self.focused_field
    }

    pub fn focus_field(&mut self, field: FormField) {
        self.focused_field = field;
        self.sync_focus();
        self.output = self.render();
    }

    /// Values currently held by the child fields.
    pub fn current_values(&self) -> FormValues {
        FormValues {
            brand: self.brand.current_value().unwrap_or_default().to_string(),
            model: self.model.current_value().unwrap_or_default().to_string(),
            price: self.price.current_value().unwrap_or_default().to_string(),
            year: self.year.current_value().unwrap_or_default().to_string(),
        }
    }

    /// Hand the current values to `on_submit`, unless one of them is absent.
    pub fn submit(&mut self) -> Result<()> {
        let values = self.current_values();
        let missing: Vec<&'static str> = FormField::ALL
            .into_iter()
            .filter(|field| values.get(*field).is_empty())
            .map(FormField::name)
            .collect();

        self.missing = missing.clone();
        self.output = self.render();

        if !missing.is_empty() {
            tracing::error!(
                brand = %values.brand,
                model = %values.model,
                price = %values.price,
                year = %values.year,
                "form submitted with missing values"
            );
            return Err(ComponentError::MissingFields(missing));
        }

        self.props.on_submit.emit(values);
        Ok(())
    }

    fn push_values(&mut self) -> Result<()> {
        let values = &self.props.values;
        let brand = non_empty(&values.brand);
        let model = non_empty(&values.model);
        let price = non_empty(&values.price);
        let year = non_empty(&values.year);

        self.brand.update_props(SelectFieldPatch {
            value: Some(brand),
            ..Default::default()
        })?;
        self.model.update_props(SelectFieldPatch {
            value: Some(model),
            ..Default::default()
        })?;
        self.price.update_props(TextFieldPatch {
            value: Some(price),
            ..Default::default()
        })?;
        self.year.update_props(TextFieldPatch {
            value: Some(year),
            ..Default::default()
        })
    }

    fn sync_focus(&mut self) {
        let focused = self.props.focused;
        let current = self.focused_field;
        let is = |field: FormField| Some(focused && current == field);

        // Focus-only patches cannot fail.
        let _ = self.brand.update_props(SelectFieldPatch {
            focused: is(FormField::Brand),
            ..Default::default()
        });
        let _ = self.model.update_props(SelectFieldPatch {
            focused: is(FormField::Model),
            ..Default::default()
        });
        let _ = self.price.update_props(TextFieldPatch {
            focused: is(FormField::Price),
            ..Default::default()
        });
        let _ = self.year.update_props(TextFieldPatch {
            focused: is(FormField::Year),
            ..Default::default()
        });
    }
}

impl Component for CarForm {
    type Props = CarFormProps;
    type Patch = CarFormPatch;
    type Output = CarFormView;

    fn props(&self) -> &CarFormProps {
        &self.props
    }

    fn render(&self) -> CarFormView {
        CarFormView {
            title: self.props.title.clone(),
            submit_label: self.props.submit_label.clone(),
            edited: self.props.is_edited,
            focused: self.props.focused,
            focused_field: self.focused_field,
            brand: self.brand.output().clone(),
            model: self.model.output().clone(),
            price: self.price.output().clone(),
            year: self.year.output().clone(),
            missing: self.missing.clone(),
        }
    }

    fn output(&self) -> &CarFormView {
        &self.output
    }

    fn update_props(&mut self, patch: CarFormPatch) -> Result<()> {
        if let Some(title) = patch.title {
            self.props.title = title;
        }
        if let Some(submit_label) = patch.submit_label {
            self.props.submit_label = submit_label;
        }
        if let Some(on_submit) = patch.on_submit {
            self.props.on_submit = on_submit;
        }
        if let Some(is_edited) = patch.is_edited {
            self.props.is_edited = is_edited;
        }
        if let Some(focused) = patch.focused {
            self.props.focused = focused;
        }
        if let Some(options) = patch.brand_options {
            self.props.brand_options = options.clone();
            self.brand.update_props(SelectFieldPatch {
                options: Some(options),
                ..Default::default()
            })?;
        }
        if let Some(options) = patch.model_options {
            self.props.model_options = options.clone();
            self.model.update_props(SelectFieldPatch {
                options: Some(options),
                ..Default::default()
            })?;
        }
        if let Some(values) = patch.values {
            self.props.values = values;
            self.missing.clear();
            self.push_values()?;
        }

        self.sync_focus();
        self.output = self.render();
        Ok(())
    }
}

impl HandleKey for CarForm {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                self.focus_field(self.focused_field.previous());
                return true;
            }
            KeyCode::Down => {
                self.focus_field(self.focused_field.next());
                return true;
            }
            KeyCode::Enter => {
                // Rejections are logged and shown through `missing`.
                let _ = self.submit();
                return true;
            }
            _ => {}
        }

        let consumed = match self.focused_field {
            FormField::Brand => match key.code {
                KeyCode::Left | KeyCode::Right => self.brand.handle_key(key),
                _ => false,
            },
            FormField::Model => match key.code {
                KeyCode::Left | KeyCode::Right => self.model.handle_key(key),
                _ => false,
            },
            FormField::Price => self.price.handle_key(key),
            FormField::Year => self.year.handle_key(key),
        };

        if consumed {
            self.output = self.render();
        }
        consumed
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
        pairs
            .iter()
            .map(|(title, value)| SelectOption::new(*title, *value))
            .collect()
    }

    fn props(on_submit: Callback<FormValues>) -> CarFormProps {
        CarFormProps {
            title: "New car".to_string(),
            values: FormValues::default(),
            submit_label: "Create".to_string(),
            on_submit,
            is_edited: false,
            brand_options: options(&[("Toyota", "b1"), ("BMW", "b3")]),
            model_options: options(&[("Corolla", "m1"), ("X5", "m5")]),
            focused: true,
        }
    }

    fn recorder() -> (Callback<FormValues>, Rc<RefCell<Vec<FormValues>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (Callback::new(move |values| sink.borrow_mut().push(values)), seen)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut CarForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_children_get_distinct_element_ids() {
        let form = CarForm::new(props(Callback::noop()), &mut ElementIds::new());
        let output = form.output();

        assert_eq!(output.brand.element_id, "select-1");
        assert_eq!(output.model.element_id, "select-2");
        assert_eq!(output.price.element_id, "input-1");
        assert_eq!(output.year.element_id, "input-2");
    }

    #[test]
    fn test_submit_with_missing_text_is_rejected() {
        let (on_submit, seen) = recorder();
        let mut form = CarForm::new(props(on_submit), &mut ElementIds::new());

        let err = form.submit().unwrap_err();

        assert_eq!(err, ComponentError::MissingFields(vec!["price", "year"]));
        assert_eq!(form.output().missing, vec!["price", "year"]);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_typed_values_are_submitted() {
        let (on_submit, seen) = recorder();
        let mut form = CarForm::new(props(on_submit), &mut ElementIds::new());

        form.handle_key(key(KeyCode::Right));
        form.handle_key(key(KeyCode::Down));
        form.handle_key(key(KeyCode::Down));
        type_text(&mut form, "42000");
        form.handle_key(key(KeyCode::Down));
        type_text(&mut form, "2021");
        form.handle_key(key(KeyCode::Enter));

        assert_eq!(
            *seen.borrow(),
            vec![FormValues {
                brand: "b3".to_string(),
                model: "m1".to_string(),
                price: "42000".to_string(),
                year: "2021".to_string(),
            }]
        );
        assert!(form.output().missing.is_empty());
    }

    #[test]
    fn test_values_patch_is_pushed_into_children() {
        let mut form = CarForm::new(props(Callback::noop()), &mut ElementIds::new());

        form.update_props(CarFormPatch {
            title: Some("Edit car".to_string()),
            submit_label: Some("Save".to_string()),
            is_edited: Some(true),
            values: Some(FormValues {
                brand: "b3".to_string(),
                model: "m5".to_string(),
                price: "42000".to_string(),
                year: "2021".to_string(),
            }),
            ..Default::default()
        })
        .unwrap();

        let output = form.output();
        assert_eq!(output.title, "Edit car");
        assert_eq!(output.submit_label, "Save");
        assert!(output.edited);
        assert_eq!(output.brand.selected().map(|o| o.value.as_str()), Some("b3"));
        assert_eq!(output.model.selected().map(|o| o.value.as_str()), Some("m5"));
        assert_eq!(output.price.value, "42000");
        assert_eq!(output.year.value, "2021");
    }

    #[test]
    fn test_clearing_values_resets_typed_text() {
        let mut form = CarForm::new(props(Callback::noop()), &mut ElementIds::new());
        form.focus_field(FormField::Price);
        type_text(&mut form, "99");

        form.update_props(CarFormPatch {
            values: Some(FormValues::default()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(form.output().price.value, "");
        assert_eq!(form.current_values().brand, "b1");
    }

    #[test]
    fn test_focus_follows_focused_field() {
        let mut form = CarForm::new(props(Callback::noop()), &mut ElementIds::new());
        assert!(form.output().brand.focused);

        form.handle_key(key(KeyCode::Up));

        let output = form.output();
        assert_eq!(output.focused_field, FormField::Year);
        assert!(output.year.focused);
        assert!(!output.brand.focused);
    }

    #[test]
    fn test_unfocused_form_has_no_focused_child() {
        let mut form = CarForm::new(props(Callback::noop()), &mut ElementIds::new());

        form.update_props(CarFormPatch {
            focused: Some(false),
            ..Default::default()
        })
        .unwrap();

        let output = form.output();
        assert!(!output.brand.focused);
        assert!(!output.model.focused);
        assert!(!output.price.focused);
        assert!(!output.year.focused);
    }

    #[test]
    fn test_render_matches_output() {
        let form = CarForm::new(props(Callback::noop()), &mut ElementIds::new());

        assert_eq!(form.render(), form.render());
        assert_eq!(&form.render(), form.output());
    }
}
