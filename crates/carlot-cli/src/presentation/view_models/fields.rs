use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub title: String,
    pub value: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectFieldView {
    pub element_id: String,
    pub label: String,
    pub name: Option<String>,
    pub options: Vec<OptionView>,
    pub focused: bool,
}

impl SelectFieldView {
    pub fn selected(&self) -> Option<&OptionView> {
        self.options.iter().find(|option| option.selected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextFieldView {
    pub element_id: String,
    pub label: String,
    pub name: String,
    pub value: String,
    pub focused: bool,
}
