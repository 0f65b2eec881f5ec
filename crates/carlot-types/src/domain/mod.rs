mod ids;
mod records;

pub use ids::{BrandId, CarId, ModelId};
pub use records::{BRAND_NOT_FOUND, Brand, Car, CarJoined, CarProps, MODEL_NOT_FOUND, Model};
