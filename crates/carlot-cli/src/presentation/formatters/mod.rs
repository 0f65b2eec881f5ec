pub mod stringify;

pub use stringify::{FieldValue, FlatRecord, StringRecord, stringify_props};
