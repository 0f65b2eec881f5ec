//! Reference datasets for tests.
//!
//! `inventory()` is laid out so every join outcome is represented:
//!
//! | car | model | brand | join |
//! |-----|-------|-------|------|
//! | c1  | m1 Corolla | b1 Toyota | resolved |
//! | c2  | m2 Golf    | b2 Volkswagen | resolved |
//! | c3  | m3 RAV4    | b1 Toyota | resolved |
//! | c4  | m4 Ghost   | b9 (dangling) | brand missing |
//! | c5  | m404 (dangling) | - | model and brand missing |
//!
//! Brand `b3` (BMW) has no models.

use carlot_store::{RecordCollection, ReferenceData};
use carlot_types::{Brand, BrandId, Car, CarId, CarProps, Model, ModelId};

pub fn brand(id: &str, title: &str) -> Brand {
    Brand {
        id: BrandId::new(id),
        title: title.to_string(),
    }
}

pub fn model(id: &str, title: &str, brand_id: &str) -> Model {
    Model {
        id: ModelId::new(id),
        title: title.to_string(),
        brand_id: BrandId::new(brand_id),
    }
}

pub fn car(id: &str, model_id: &str, price: u32, year: u16) -> Car {
    Car::new(CarId::new(id), ModelId::new(model_id), price, year)
}

pub fn car_props(brand_id: &str, model_id: &str, price: u32, year: u16) -> CarProps {
    CarProps {
        brand_id: BrandId::new(brand_id),
        model_id: ModelId::new(model_id),
        price,
        year,
    }
}

/// The single-row dataset: Toyota Corolla, 15000, 2020.
pub fn single_car() -> ReferenceData {
    ReferenceData {
        brands: vec![brand("b1", "Toyota")],
        models: vec![model("m1", "Corolla", "b1")],
        cars: vec![car("c1", "m1", 15000, 2020)],
    }
}

/// Five cars covering resolved and unresolvable joins (see module docs).
pub fn inventory() -> ReferenceData {
    ReferenceData {
        brands: vec![
            brand("b1", "Toyota"),
            brand("b2", "Volkswagen"),
            brand("b3", "BMW"),
        ],
        models: vec![
            model("m1", "Corolla", "b1"),
            model("m2", "Golf", "b2"),
            model("m3", "RAV4", "b1"),
            model("m4", "Ghost", "b9"),
        ],
        cars: vec![
            car("c1", "m1", 15000, 2020),
            car("c2", "m2", 12500, 2018),
            car("c3", "m3", 27000, 2023),
            car("c4", "m4", 5000, 2001),
            car("c5", "m404", 100, 1990),
        ],
    }
}

pub fn inventory_collection() -> RecordCollection {
    RecordCollection::new(inventory())
}

/// `inventory()` as the JSON document read by `ReferenceData::load_from`.
pub fn inventory_json() -> String {
    serde_json::to_string_pretty(&inventory()).unwrap_or_default()
}
