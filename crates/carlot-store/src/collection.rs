use carlot_types::{Brand, Car, CarId, CarJoined, CarProps, Model};
use std::collections::HashSet;
use std::fmt;

use crate::ids::{IdGenerator, SequentialIds, UuidIds};
use crate::join::JoinedCar;
use crate::reference::ReferenceData;
use crate::{Error, ReferenceField, Result};

const MAX_ID_ATTEMPTS: usize = 16;

// NOTE: Ownership
//
// The collection is the only owner and the only mutator of the three
// tables. Callers get shared slices, joined copies, or ids back; nothing
// outside this type holds `&mut` access to a table.
//
// Tables are plain vectors scanned linearly: inventories are small and
// insertion order is the display order.

pub struct RecordCollection {
    cars: Vec<Car>,
    brands: Vec<Brand>,
    models: Vec<Model>,
    ids: Box<dyn IdGenerator>,
}

impl RecordCollection {
    /// Take ownership of the tables. New ids continue after the largest
    /// numeric car id.
    pub fn new(data: ReferenceData) -> Self {
        let ids = Box::new(SequentialIds::after(&data.cars));

        Self {
            cars: data.cars,
            brands: data.brands,
            models: data.models,
            ids,
        }
    }

    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn find_car(&self, car_id: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == car_id)
    }

    pub fn find_model(&self, model_id: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.id == model_id)
    }

    pub fn find_brand(&self, brand_id: &str) -> Option<&Brand> {
        self.brands.iter().find(|brand| brand.id == brand_id)
    }

    /// Resolve one car against the reference tables.
    pub fn join<'a>(&'a self, car: &'a Car) -> JoinedCar<'a> {
        JoinedCar::resolve(car, &self.brands, &self.models)
    }

    pub fn joined_cars(&self) -> impl Iterator<Item = JoinedCar<'_>> + '_ {
        self.cars.iter().map(|car| self.join(car))
    }

    /// Every car, joined, in table order.
    pub fn get_all_cars(&self) -> Vec<CarJoined> {
        self.joined_cars().map(CarJoined::from).collect()
    }

    /// Cars whose model belongs to `brand_id`, joined, in table order.
    ///
    /// A brand with no models (or an unknown brand id) yields an empty list.
    pub fn get_by_brand_id(&self, brand_id: &str) -> Vec<CarJoined> {
        let brand_model_ids: HashSet<&str> = self
            .models
            .iter()
            .filter(|model| model.brand_id == brand_id)
            .map(|model| model.id.as_str())
            .collect();

        if brand_model_ids.is_empty() {
            return Vec::new();
        }

        self.cars
            .iter()
            .filter(|car| brand_model_ids.contains(car.model_id.as_str()))
            .map(|car| self.join(car).to_display())
            .collect()
    }

    /// Append a new car after checking its model and brand exist.
    ///
    /// On error the table is left unchanged.
    pub fn add(&mut self, props: CarProps) -> Result<CarId> {
        self.validate_references(&props)?;

        let id = self.fresh_id();
        self.cars.push(Car::new(
            id.clone(),
            props.model_id,
            props.price,
            props.year,
        ));

        tracing::debug!(car_id = %id, total = self.cars.len(), "car added");
        Ok(id)
    }

    /// Replace model, price and year of an existing car in place.
    ///
    /// The id, table position and any extra fields are kept.
    pub fn update(&mut self, car_id: &str, props: CarProps) -> Result<()> {
        let Some(index) = self.cars.iter().position(|car| car.id == car_id) else {
            tracing::warn!(car_id, "update rejected: car not found");
            return Err(Error::NotFound {
                car_id: CarId::new(car_id),
            });
        };

        self.validate_references(&props)?;

        let previous = &self.cars[index];
        let updated = Car {
            id: previous.id.clone(),
            model_id: props.model_id,
            price: props.price,
            year: props.year,
            extra: previous.extra.clone(),
        };
        self.cars[index] = updated;

        tracing::debug!(car_id, "car updated");
        Ok(())
    }

    /// Remove the car with `car_id`. Returns whether a record was removed;
    /// an unknown id is a no-op.
    pub fn delete_by_id(&mut self, car_id: &str) -> bool {
        let Some(index) = self.cars.iter().position(|car| car.id == car_id) else {
            tracing::debug!(car_id, "delete ignored: car not found");
            return false;
        };

        self.cars.remove(index);
        tracing::debug!(car_id, total = self.cars.len(), "car deleted");
        true
    }

    fn validate_references(&self, props: &CarProps) -> Result<()> {
        if self.find_model(props.model_id.as_str()).is_none() {
            tracing::warn!(model_id = %props.model_id, "mutation rejected: unknown model");
            return Err(Error::Validation {
                field: ReferenceField::Model,
                id: props.model_id.to_string(),
            });
        }

        if self.find_brand(props.brand_id.as_str()).is_none() {
            tracing::warn!(brand_id = %props.brand_id, "mutation rejected: unknown brand");
            return Err(Error::Validation {
                field: ReferenceField::Brand,
                id: props.brand_id.to_string(),
            });
        }

        Ok(())
    }

    /// Draw from the configured generator; if it keeps colliding, fall back
    /// to random UUIDs so `add` always terminates.
    fn fresh_id(&mut self) -> CarId {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if self.find_car(id.as_str()).is_none() {
                return id;
            }
        }

        tracing::warn!(
            attempts = MAX_ID_ATTEMPTS,
            "id generator keeps colliding, using uuid"
        );
        loop {
            let id = UuidIds.next_id();
            if self.find_car(id.as_str()).is_none() {
                return id;
            }
        }
    }
}

impl fmt::Debug for RecordCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordCollection")
            .field("cars", &self.cars.len())
            .field("brands", &self.brands.len())
            .field("models", &self.models.len())
            .finish_non_exhaustive()
    }
}
