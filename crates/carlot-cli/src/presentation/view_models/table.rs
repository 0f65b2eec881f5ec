use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRowView {
    pub id: String,
    /// Cell text in column order
    pub cells: Vec<String>,
    pub edited: bool,
    pub edit_label: &'static str,
    pub delete_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<TableRowView>,
    /// Row under the cursor; `None` for an empty table
    pub cursor: Option<usize>,
    pub focused: bool,
}
