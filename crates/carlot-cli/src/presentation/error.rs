use std::fmt;

/// Result type for view components
pub type Result<T> = std::result::Result<T, ComponentError>;

/// Errors raised by view components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// A table row does not have one field per column
    SchemaMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A table row has no `id` field to report row actions with
    MissingRowId { row: usize },

    /// Form submitted while some fields had no value
    MissingFields(Vec<&'static str>),
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentError::SchemaMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "Table schema mismatch: row {} has {} fields, columns define {}",
                row, found, expected
            ),
            ComponentError::MissingRowId { row } => {
                write!(f, "Table row {} has no 'id' field", row)
            }
            ComponentError::MissingFields(fields) => {
                write!(f, "Missing values: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ComponentError {}
