use serde::Serialize;

use super::fields::{SelectFieldView, TextFieldView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Brand,
    Model,
    Price,
    Year,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Brand,
        FormField::Model,
        FormField::Price,
        FormField::Year,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormField::Brand => "brand",
            FormField::Model => "model",
            FormField::Price => "price",
            FormField::Year => "year",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Brand => FormField::Model,
            FormField::Model => FormField::Price,
            FormField::Price => FormField::Year,
            FormField::Year => FormField::Brand,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Brand => FormField::Year,
            FormField::Model => FormField::Brand,
            FormField::Price => FormField::Model,
            FormField::Year => FormField::Price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarFormView {
    pub title: String,
    pub submit_label: String,
    pub edited: bool,
    pub focused: bool,
    pub focused_field: FormField,
    pub brand: SelectFieldView,
    pub model: SelectFieldView,
    pub price: TextFieldView,
    pub year: TextFieldView,
    /// Names of fields that were empty on the last rejected submit
    pub missing: Vec<&'static str>,
}
