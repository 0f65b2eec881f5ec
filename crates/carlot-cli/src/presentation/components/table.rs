use crossterm::event::{KeyCode, KeyEvent};
use indexmap::IndexMap;

use super::{Callback, Component, HandleKey};
use crate::presentation::error::{ComponentError, Result};
use crate::presentation::formatters::StringRecord;
use crate::presentation::view_models::{TableRowView, TableView};

const EDIT_LABEL: &str = "Edit";
const CANCEL_LABEL: &str = "Cancel";
const DELETE_LABEL: &str = "Delete";

#[derive(Debug, Clone)]
pub struct TableProps {
    pub title: String,
    /// Field key to column header, in display order
    pub columns: IndexMap<String, String>,
    pub rows: Vec<StringRecord>,
    pub edited_row_id: Option<String>,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
    pub focused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TablePatch {
    pub title: Option<String>,
    pub columns: Option<IndexMap<String, String>>,
    pub rows: Option<Vec<StringRecord>>,
    pub edited_row_id: Option<Option<String>>,
    pub on_edit: Option<Callback<String>>,
    pub on_delete: Option<Callback<String>>,
    pub focused: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

#[derive(Debug)]
pub struct Table {
    props: TableProps,
    cursor: usize,
    output: TableView,
}

impl Table {
    pub fn new(props: TableProps) -> Result<Self> {
        validate_rows(&props.columns, &props.rows)?;
        let output = render_table(&props, 0);

        Ok(Self {
            props,
            cursor: 0,
            output,
        })
    }

    pub fn cursor(&self) -> Option<usize> {
        (!self.props.rows.is_empty()).then_some(self.cursor)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let last = self.props.rows.len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.output = self.render();
    }

    /// Report `action` for the row at `index` through the matching callback.
    /// Returns `false` when there is no such row.
    pub fn invoke(&self, action: RowAction, index: usize) -> bool {
        let Some(id) = self.props.rows.get(index).and_then(|row| row.get("id")) else {
            return false;
        };

        match action {
            RowAction::Edit => self.props.on_edit.emit(id.to_string()),
            RowAction::Delete => self.props.on_delete.emit(id.to_string()),
        }
        true
    }
}

impl Component for Table {
    type Props = TableProps;
    type Patch = TablePatch;
    type Output = TableView;

    fn props(&self) -> &TableProps {
        &self.props
    }

    fn render(&self) -> TableView {
        render_table(&self.props, self.cursor)
    }

    fn output(&self) -> &TableView {
        &self.output
    }

    fn update_props(&mut self, patch: TablePatch) -> Result<()> {
        let columns = patch.columns.as_ref().unwrap_or(&self.props.columns);
        let rows = patch.rows.as_ref().unwrap_or(&self.props.rows);
        validate_rows(columns, rows)?;

        if let Some(title) = patch.title {
            self.props.title = title;
        }
        if let Some(columns) = patch.columns {
            self.props.columns = columns;
        }
        if let Some(rows) = patch.rows {
            self.props.rows = rows;
        }
        if let Some(edited_row_id) = patch.edited_row_id {
            self.props.edited_row_id = edited_row_id;
        }
        if let Some(on_edit) = patch.on_edit {
            self.props.on_edit = on_edit;
        }
        if let Some(on_delete) = patch.on_delete {
            self.props.on_delete = on_delete;
        }
        if let Some(focused) = patch.focused {
            self.props.focused = focused;
        }

        self.cursor = self.cursor.min(self.props.rows.len().saturating_sub(1));
        self.output = self.render();
        Ok(())
    }
}

impl HandleKey for Table {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                true
            }
            KeyCode::Enter | KeyCode::Char('e') => self.invoke(RowAction::Edit, self.cursor),
            KeyCode::Delete | KeyCode::Char('d') => self.invoke(RowAction::Delete, self.cursor),
            _ => false,
        }
    }
}

fn validate_rows(columns: &IndexMap<String, String>, rows: &[StringRecord]) -> Result<()> {
    for (index, row) in rows.iter().enumerate() {
        if row.len() != columns.len() {
            return Err(ComponentError::SchemaMismatch {
                row: index,
                expected: columns.len(),
                found: row.len(),
            });
        }
        if row.get("id").is_none() {
            return Err(ComponentError::MissingRowId { row: index });
        }
    }
    Ok(())
}

fn render_table(props: &TableProps, cursor: usize) -> TableView {
    let rows = props
        .rows
        .iter()
        .map(|row| {
            let id = row.get("id").unwrap_or_default().to_string();
            let edited = props.edited_row_id.as_deref() == Some(id.as_str());

            TableRowView {
                cells: props
                    .columns
                    .keys()
                    .map(|key| row.get(key).unwrap_or_default().to_string())
                    .collect(),
                edit_label: if edited { CANCEL_LABEL } else { EDIT_LABEL },
                delete_label: DELETE_LABEL,
                edited,
                id,
            }
        })
        .collect::<Vec<_>>();

    TableView {
        title: props.title.clone(),
        headers: props.columns.values().cloned().collect(),
        cursor: (!rows.is_empty()).then_some(cursor),
        rows,
        focused: props.focused,
    }
}
