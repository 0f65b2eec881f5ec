// In-memory record tables
// Cars are mutable for the lifetime of the process; brands and models are
// fixed once loaded. Nothing is written back to the reference data source.

mod collection;
mod error;
mod ids;
mod join;
mod reference;

// Public API
pub use collection::RecordCollection;
pub use error::{Error, ReferenceField, Result};
pub use ids::{IdGenerator, IdScheme, SequentialIds, UuidIds};
pub use join::JoinedCar;
pub use reference::ReferenceData;
