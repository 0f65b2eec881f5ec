use carlot_types::{BRAND_NOT_FOUND, Brand, Car, CarJoined, MODEL_NOT_FOUND, Model};

/// A car with its model and brand looked up.
///
/// Unresolvable references stay `None` here; sentinel text is substituted
/// only by [`JoinedCar::to_display`].
#[derive(Debug, Clone, Copy)]
pub struct JoinedCar<'a> {
    pub car: &'a Car,
    pub model: Option<&'a Model>,
    pub brand: Option<&'a Brand>,
}

impl<'a> JoinedCar<'a> {
    /// Resolve `car.model_id -> Model -> brand_id -> Brand`, first match wins.
    pub(crate) fn resolve(car: &'a Car, brands: &'a [Brand], models: &'a [Model]) -> Self {
        let model = models.iter().find(|model| model.id == car.model_id);
        let brand = model.and_then(|model| brands.iter().find(|brand| brand.id == model.brand_id));

        Self { car, model, brand }
    }

    pub fn is_resolved(&self) -> bool {
        self.model.is_some() && self.brand.is_some()
    }

    pub fn to_display(&self) -> CarJoined {
        CarJoined {
            id: self.car.id.clone(),
            price: self.car.price,
            year: self.car.year,
            brand: self
                .brand
                .map_or_else(|| BRAND_NOT_FOUND.to_string(), |brand| brand.title.clone()),
            model: self
                .model
                .map_or_else(|| MODEL_NOT_FOUND.to_string(), |model| model.title.clone()),
        }
    }
}

impl From<JoinedCar<'_>> for CarJoined {
    fn from(joined: JoinedCar<'_>) -> Self {
        joined.to_display()
    }
}
