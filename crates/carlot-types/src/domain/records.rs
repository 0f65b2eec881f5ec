use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

use super::ids::{BrandId, CarId, ModelId};

/// Display text used when a car's brand cannot be resolved.
pub const BRAND_NOT_FOUND: &str = "Brand not found.";

/// Display text used when a car's model cannot be resolved.
pub const MODEL_NOT_FOUND: &str = "Model not found.";

/// Brand reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub title: String,
}

/// Model reference record.
///
/// `brand_id` is a foreign key that is not checked at load time; a dangling
/// value is valid but resolves to no brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: ModelId,
    pub title: String,
    pub brand_id: BrandId,
}

/// Car record as stored in the car table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: CarId,
    pub model_id: ModelId,
    pub price: u32,
    pub year: u16,
    /// Fields present in loaded data that this tool does not interpret.
    /// Carried through updates untouched.
    #[serde(flatten, default)]
    pub extra: BTreeMap<String, JsonValue>,
}

impl Car {
    pub fn new(id: CarId, model_id: ModelId, price: u32, year: u16) -> Self {
        Self {
            id,
            model_id,
            price,
            year,
            extra: BTreeMap::new(),
        }
    }
}

/// Car with its model/brand references replaced by display titles.
///
/// Derived on every query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarJoined {
    pub id: CarId,
    pub price: u32,
    pub year: u16,
    pub brand: String,
    pub model: String,
}

/// Input for creating or updating a car.
///
/// `brand_id` takes part in validation only; the stored car infers its brand
/// through the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarProps {
    pub brand_id: BrandId,
    pub model_id: ModelId,
    pub price: u32,
    pub year: u16,
}
