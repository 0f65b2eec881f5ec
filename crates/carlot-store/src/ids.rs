use carlot_types::{Car, CarId};
use serde::{Deserialize, Serialize};

/// Source of fresh car ids.
///
/// The collection re-draws whenever a generated id is already taken, so an
/// implementation only has to make repeats unlikely, not impossible.
pub trait IdGenerator {
    fn next_id(&mut self) -> CarId;
}

/// Monotonic decimal ids ("1", "2", ...).
///
/// Once the counter passes `u64::MAX` it hands out UUIDs instead.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: Option<u64>,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next: Some(next) }
    }

    /// Continue after the largest numeric id among `cars`.
    /// Non-numeric ids are ignored.
    pub fn after(cars: &[Car]) -> Self {
        let max = cars
            .iter()
            .filter_map(|car| car.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            next: max.checked_add(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> CarId {
        match self.next {
            Some(id) => {
                self.next = id.checked_add(1);
                CarId::new(id.to_string())
            }
            None => UuidIds.next_id(),
        }
    }
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> CarId {
        CarId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Id scheme selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    #[default]
    Sequential,
    Uuid,
}

impl IdScheme {
    /// Build a generator for a table that already holds `cars`
    pub fn generator(self, cars: &[Car]) -> Box<dyn IdGenerator> {
        match self {
            IdScheme::Sequential => Box::new(SequentialIds::after(cars)),
            IdScheme::Uuid => Box::new(UuidIds),
        }
    }
}
