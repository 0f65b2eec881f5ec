use crate::presentation::components::FormValues;

/// User intent reported by the components through their callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Brand filter moved; empty for "All brands"
    FilterChanged(String),
    FormSubmitted(FormValues),
    /// Edit (or cancel editing) the row with this car id
    EditRequested(String),
    DeleteRequested(String),
}

/// Screen region that receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    Filter,
    #[default]
    Table,
    Form,
}

impl Pane {
    pub fn next(self) -> Self {
        match self {
            Pane::Filter => Pane::Table,
            Pane::Table => Pane::Form,
            Pane::Form => Pane::Filter,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Pane::Filter => Pane::Form,
            Pane::Table => Pane::Filter,
            Pane::Form => Pane::Table,
        }
    }
}
