use carlot_types::CarId;
use std::fmt;

/// Result type for carlot-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reference a car mutation points at through its props
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceField {
    Brand,
    Model,
}

impl ReferenceField {
    /// Field name as it appears in car props
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceField::Brand => "brandId",
            ReferenceField::Model => "modelId",
        }
    }
}

impl fmt::Display for ReferenceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// A referenced brand or model does not exist
    Validation { field: ReferenceField, id: String },

    /// The targeted car is not in the table
    NotFound { car_id: CarId },

    /// Reference data lists the same car id more than once
    DuplicateId { car_id: CarId },

    /// Reading reference data failed
    Io(std::io::Error),

    /// Reference data is not valid JSON for the expected tables
    Parse(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation { field, id } => {
                write!(f, "Validation error: {} '{}' does not exist", field, id)
            }
            Error::NotFound { car_id } => write!(f, "Car not found: {}", car_id),
            Error::DuplicateId { car_id } => write!(f, "Duplicate car id: {}", car_id),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse(err) => write!(f, "Reference data error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Validation { .. } | Error::NotFound { .. } | Error::DuplicateId { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field_and_id() {
        let err = Error::Validation {
            field: ReferenceField::Model,
            id: "missing".to_string(),
        };
        let msg = err.to_string();

        assert!(msg.contains("modelId"));
        assert!(msg.contains("'missing'"));
    }

    #[test]
    fn test_not_found_has_no_source() {
        let err = Error::NotFound {
            car_id: CarId::new("c9"),
        };

        assert_eq!(err.to_string(), "Car not found: c9");
        assert!(std::error::Error::source(&err).is_none());
    }
}
