//! Inventory screen controller.
//!
//! Owns the collection and the components. Components report user intent
//! through callbacks that push [`AppAction`]s into a channel; after every key
//! press the controller drains the channel and handles each action to
//! completion: mutate the collection, then push fresh props into the
//! components.

mod action;

pub use action::{AppAction, Pane};

use std::sync::mpsc::{self, Receiver, Sender};

use carlot_store::RecordCollection;
use carlot_types::{BrandId, CarProps, ModelId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::presentation::components::{
    Callback, CarForm, CarFormPatch, CarFormProps, Component, ElementIds, FormValues, HandleKey,
    SelectField, SelectFieldPatch, SelectFieldProps, Table, TablePatch, TableProps,
};
use crate::presentation::error::Result;
use crate::presentation::presenters::{
    brand_filter_options, brand_options, car_columns, car_rows, form_values, model_options,
    table_title,
};
use crate::presentation::view_models::{StatusBarViewModel, StatusLevel};

const NEW_CAR_TITLE: &str = "New car";
const EDIT_CAR_TITLE: &str = "Edit car";
const CREATE_LABEL: &str = "Create";
const SAVE_LABEL: &str = "Save";

pub struct App {
    collection: RecordCollection,
    filter: SelectField,
    table: Table,
    form: CarForm,
    actions: Receiver<AppAction>,
    selected_brand_id: Option<String>,
    edited_car_id: Option<String>,
    focus: Pane,
    status: StatusBarViewModel,
    should_quit: bool,
}

impl App {
    pub fn new(collection: RecordCollection) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut ids = ElementIds::new();
        let focus = Pane::default();

        let filter = SelectField::new(
            SelectFieldProps {
                label: "Brand".to_string(),
                options: brand_filter_options(&collection),
                on_change: Some(sender(&tx, AppAction::FilterChanged)),
                name: Some("brand-filter".to_string()),
                value: None,
                focused: focus == Pane::Filter,
            },
            &mut ids,
        );

        let table = Table::new(TableProps {
            title: table_title(&collection, None),
            columns: car_columns(),
            rows: car_rows(&collection.get_all_cars()),
            edited_row_id: None,
            on_edit: sender(&tx, AppAction::EditRequested),
            on_delete: sender(&tx, AppAction::DeleteRequested),
            focused: focus == Pane::Table,
        })?;

        let form = CarForm::new(
            CarFormProps {
                title: NEW_CAR_TITLE.to_string(),
                values: FormValues::default(),
                submit_label: CREATE_LABEL.to_string(),
                on_submit: sender(&tx, AppAction::FormSubmitted),
                is_edited: false,
                brand_options: brand_options(&collection),
                model_options: model_options(&collection),
                focused: focus == Pane::Form,
            },
            &mut ids,
        );

        let status = StatusBarViewModel {
            level: StatusLevel::Info,
            message: format!("Loaded {} cars", collection.len()),
            car_count: collection.len(),
        };

        Ok(Self {
            collection,
            filter,
            table,
            form,
            actions: rx,
            selected_brand_id: None,
            edited_car_id: None,
            focus,
            status,
            should_quit: false,
        })
    }

    pub fn collection(&self) -> &RecordCollection {
        &self.collection
    }

    pub fn filter(&self) -> &SelectField {
        &self.filter
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn form(&self) -> &CarForm {
        &self.form
    }

    pub fn focus(&self) -> Pane {
        self.focus
    }

    pub fn status(&self) -> &StatusBarViewModel {
        &self.status
    }

    pub fn selected_brand_id(&self) -> Option<&str> {
        self.selected_brand_id.as_deref()
    }

    pub fn edited_car_id(&self) -> Option<&str> {
        self.edited_car_id.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Route a key press, then handle every action it produced.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.previous());
                return;
            }
            _ => {}
        }

        match self.focus {
            Pane::Filter => {
                self.filter.handle_key(key);
            }
            Pane::Table => {
                self.table.handle_key(key);
            }
            Pane::Form if key.code == KeyCode::Enter => {
                if let Err(err) = self.form.submit() {
                    self.set_status(StatusLevel::Error, err.to_string());
                }
            }
            Pane::Form => {
                self.form.handle_key(key);
            }
        }

        self.process_actions();
    }

    /// Handle queued actions until the channel stays empty.
    pub fn process_actions(&mut self) {
        loop {
            let pending: Vec<AppAction> = self.actions.try_iter().collect();
            if pending.is_empty() {
                break;
            }
            for action in pending {
                self.dispatch(action);
            }
        }
    }

    pub fn dispatch(&mut self, action: AppAction) {
        tracing::debug!(?action, "dispatching action");

        match action {
            AppAction::FilterChanged(brand_id) => self.apply_filter(brand_id),
            AppAction::EditRequested(car_id) => self.toggle_edit(car_id),
            AppAction::DeleteRequested(car_id) => self.delete(car_id),
            AppAction::FormSubmitted(values) => self.save(values),
        }
    }

    pub fn set_focus(&mut self, pane: Pane) {
        self.focus = pane;

        let filter = self.filter.update_props(SelectFieldPatch {
            focused: Some(pane == Pane::Filter),
            ..Default::default()
        });
        let table = self.table.update_props(TablePatch {
            focused: Some(pane == Pane::Table),
            ..Default::default()
        });
        let form = self.form.update_props(CarFormPatch {
            focused: Some(pane == Pane::Form),
            ..Default::default()
        });

        for result in [filter, table, form] {
            self.report(result);
        }
    }

    fn apply_filter(&mut self, brand_id: String) {
        self.selected_brand_id = (!brand_id.is_empty()).then_some(brand_id);
        self.refresh_table();

        let shown = self.table.props().rows.len();
        let title = table_title(&self.collection, self.selected_brand_id.as_deref());
        self.set_status(StatusLevel::Info, format!("{}: {} shown", title, shown));
    }

    fn toggle_edit(&mut self, car_id: String) {
        if self.edited_car_id.as_deref() == Some(car_id.as_str()) {
            self.edited_car_id = None;
            self.set_status(StatusLevel::Info, "Editing cancelled".to_string());
        } else if self.collection.find_car(&car_id).is_some() {
            self.set_status(StatusLevel::Info, format!("Editing car {}", car_id));
            self.edited_car_id = Some(car_id);
            self.set_focus(Pane::Form);
        } else {
            tracing::warn!(car_id = %car_id, "edit requested for unknown car");
            self.set_status(StatusLevel::Warning, format!("Car not found: {}", car_id));
            return;
        }

        self.refresh_table();
        self.reset_form();
    }

    fn delete(&mut self, car_id: String) {
        if !self.collection.delete_by_id(&car_id) {
            self.set_status(
                StatusLevel::Warning,
                format!("Car {} was already removed", car_id),
            );
            return;
        }

        if self.edited_car_id.as_deref() == Some(car_id.as_str()) {
            self.edited_car_id = None;
            self.reset_form();
        }
        self.refresh_table();
        self.set_status(StatusLevel::Success, format!("Deleted car {}", car_id));
    }

    fn save(&mut self, values: FormValues) {
        let props = match parse_props(&values) {
            Ok(props) => props,
            Err(message) => {
                tracing::warn!(%message, "form input rejected");
                self.set_status(StatusLevel::Error, message);
                return;
            }
        };

        let result = match self.edited_car_id.clone() {
            Some(car_id) => self
                .collection
                .update(&car_id, props)
                .map(|()| format!("Updated car {}", car_id)),
            None => self
                .collection
                .add(props)
                .map(|car_id| format!("Added car {}", car_id)),
        };

        match result {
            Ok(message) => {
                self.edited_car_id = None;
                self.refresh_table();
                self.reset_form();
                self.set_status(StatusLevel::Success, message);
            }
            Err(err) => {
                tracing::warn!(error = %err, "car mutation rejected");
                self.set_status(StatusLevel::Error, err.to_string());
            }
        }
    }

    fn refresh_table(&mut self) {
        let brand_id = self.selected_brand_id.as_deref();
        let cars = match brand_id {
            Some(id) => self.collection.get_by_brand_id(id),
            None => self.collection.get_all_cars(),
        };

        let result = self.table.update_props(TablePatch {
            title: Some(table_title(&self.collection, brand_id)),
            rows: Some(car_rows(&cars)),
            edited_row_id: Some(self.edited_car_id.clone()),
            ..Default::default()
        });
        self.report(result);
        self.status.car_count = self.collection.len();
    }

    fn reset_form(&mut self) {
        let edited = self.edited_car_id.is_some();
        let (title, submit_label) = if edited {
            (EDIT_CAR_TITLE, SAVE_LABEL)
        } else {
            (NEW_CAR_TITLE, CREATE_LABEL)
        };

        let result = self.form.update_props(CarFormPatch {
            title: Some(title.to_string()),
            submit_label: Some(submit_label.to_string()),
            is_edited: Some(edited),
            values: Some(form_values(
                &self.collection,
                self.edited_car_id.as_deref(),
            )),
            ..Default::default()
        });
        self.report(result);
    }

    fn report(&mut self, result: Result<()>) {
        if let Err(err) = result {
            tracing::error!(error = %err, "component rejected props");
            self.set_status(StatusLevel::Error, err.to_string());
        }
    }

    fn set_status(&mut self, level: StatusLevel, message: String) {
        self.status = StatusBarViewModel {
            level,
            message,
            car_count: self.collection.len(),
        };
    }
}

fn sender<T: 'static>(tx: &Sender<AppAction>, wrap: fn(T) -> AppAction) -> Callback<T> {
    let tx = tx.clone();
    Callback::new(move |value| {
        // Sending only fails once the app, and with it the receiver, is gone.
        let _ = tx.send(wrap(value));
    })
}

fn parse_props(values: &FormValues) -> std::result::Result<CarProps, String> {
    let price = values
        .price
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("Invalid price: {}", values.price))?;
    let year = values
        .year
        .trim()
        .parse::<u16>()
        .map_err(|_| format!("Invalid year: {}", values.year))?;

    Ok(CarProps {
        brand_id: BrandId::new(values.brand.as_str()),
        model_id: ModelId::new(values.model.as_str()),
        price,
        year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(brand: &str, model: &str, price: &str, year: &str) -> FormValues {
        FormValues {
            brand: brand.to_string(),
            model: model.to_string(),
            price: price.to_string(),
            year: year.to_string(),
        }
    }

    #[test]
    fn test_parse_props() {
        let props = parse_props(&values("b1", "m1", " 15000 ", "2020")).unwrap();

        assert_eq!(props.brand_id, BrandId::new("b1"));
        assert_eq!(props.model_id, ModelId::new("m1"));
        assert_eq!(props.price, 15000);
        assert_eq!(props.year, 2020);
    }

    #[test]
    fn test_parse_props_rejects_non_numbers() {
        assert_eq!(
            parse_props(&values("b1", "m1", "cheap", "2020")).unwrap_err(),
            "Invalid price: cheap"
        );
        assert_eq!(
            parse_props(&values("b1", "m1", "1", "99999")).unwrap_err(),
            "Invalid year: 99999"
        );
    }

    #[test]
    fn test_pane_cycle() {
        assert_eq!(Pane::Filter.next(), Pane::Table);
        assert_eq!(Pane::Form.next(), Pane::Filter);
        assert_eq!(Pane::Filter.previous(), Pane::Form);
    }
}
