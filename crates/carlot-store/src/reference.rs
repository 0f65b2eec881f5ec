use carlot_types::{Brand, BrandId, Car, CarId, Model, ModelId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::{Error, Result};

/// The three record tables a collection is seeded with.
///
/// On disk this is a single JSON document:
/// `{ "brands": [...], "models": [...], "cars": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub models: Vec<Model>,
    #[serde(default)]
    pub cars: Vec<Car>,
}

impl ReferenceData {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let data: ReferenceData = serde_json::from_str(&content)?;
        data.check_unique_car_ids()?;

        tracing::debug!(
            path = %path.display(),
            brands = data.brands.len(),
            models = data.models.len(),
            cars = data.cars.len(),
            "reference data loaded"
        );

        Ok(data)
    }

    /// Car ids are the key for update and delete; a repeated id is rejected.
    fn check_unique_car_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.cars.len());
        match self.cars.iter().find(|car| !seen.insert(car.id.as_str())) {
            Some(car) => Err(Error::DuplicateId {
                car_id: car.id.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Built-in dataset used when no reference file is configured.
    pub fn demo() -> Self {
        let brands = [
            ("b1", "Toyota"),
            ("b2", "Volkswagen"),
            ("b3", "BMW"),
            ("b4", "Audi"),
            ("b5", "Honda"),
        ]
        .into_iter()
        .map(|(id, title)| Brand {
            id: BrandId::new(id),
            title: title.to_string(),
        })
        .collect();

        let models = [
            ("m1", "Corolla", "b1"),
            ("m2", "RAV4", "b1"),
            ("m3", "Golf", "b2"),
            ("m4", "Passat", "b2"),
            ("m5", "X5", "b3"),
            ("m6", "3 Series", "b3"),
            ("m7", "A4", "b4"),
            ("m8", "Q7", "b4"),
            ("m9", "Civic", "b5"),
            ("m10", "CR-V", "b5"),
        ]
        .into_iter()
        .map(|(id, title, brand_id)| Model {
            id: ModelId::new(id),
            title: title.to_string(),
            brand_id: BrandId::new(brand_id),
        })
        .collect();

        let cars: [(&str, &str, u32, u16); 10] = [
            ("1", "m1", 15000, 2020),
            ("2", "m3", 12500, 2018),
            ("3", "m5", 42000, 2021),
            ("4", "m7", 21000, 2019),
            ("5", "m9", 17500, 2022),
            ("6", "m2", 27000, 2023),
            ("7", "m4", 9800, 2015),
            ("8", "m6", 31000, 2020),
            ("9", "m8", 55000, 2022),
            ("10", "m10", 26000, 2021),
        ];
        let cars = cars
            .into_iter()
            .map(|(id, model_id, price, year)| {
                Car::new(CarId::new(id), ModelId::new(model_id), price, year)
            })
            .collect();

        Self {
            brands,
            models,
            cars,
        }
    }
}
