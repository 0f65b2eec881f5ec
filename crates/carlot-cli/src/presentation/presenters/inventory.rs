//! Props for the inventory screen, computed from the collection.

use carlot_store::RecordCollection;
use carlot_types::CarJoined;
use indexmap::IndexMap;

use crate::presentation::components::{FormValues, SelectOption};
use crate::presentation::formatters::{StringRecord, stringify_props};

pub const ALL_BRANDS_TITLE: &str = "All brands";

/// Column key to header for joined cars, in display order.
pub fn car_columns() -> IndexMap<String, String> {
    [
        ("id", "Id"),
        ("brand", "Brand"),
        ("model", "Model"),
        ("price", "Price"),
        ("year", "Year"),
    ]
    .into_iter()
    .map(|(key, header)| (key.to_string(), header.to_string()))
    .collect()
}

pub fn car_rows(cars: &[CarJoined]) -> Vec<StringRecord> {
    cars.iter().map(stringify_props).collect()
}

/// "All cars" without a filter, "<Brand> cars" otherwise.
pub fn table_title(collection: &RecordCollection, brand_id: Option<&str>) -> String {
    match brand_id {
        None => "All cars".to_string(),
        Some(id) => {
            let title = collection
                .find_brand(id)
                .map(|brand| brand.title.as_str())
                .unwrap_or(id);
            format!("{} cars", title)
        }
    }
}

pub fn brand_options(collection: &RecordCollection) -> Vec<SelectOption> {
    collection
        .brands()
        .iter()
        .map(|brand| SelectOption::new(brand.title.as_str(), brand.id.as_str()))
        .collect()
}

/// Brand options preceded by an "All brands" entry with an empty value.
pub fn brand_filter_options(collection: &RecordCollection) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ALL_BRANDS_TITLE, ""))
        .chain(brand_options(collection))
        .collect()
}

pub fn model_options(collection: &RecordCollection) -> Vec<SelectOption> {
    collection
        .models()
        .iter()
        .map(|model| SelectOption::new(model.title.as_str(), model.id.as_str()))
        .collect()
}

/// Form values for editing `car_id`; empty values when it is absent.
pub fn form_values(collection: &RecordCollection, car_id: Option<&str>) -> FormValues {
    let Some(car) = car_id.and_then(|id| collection.find_car(id)) else {
        return FormValues::default();
    };

    let brand = collection
        .find_model(car.model_id.as_str())
        .map(|model| model.brand_id.to_string())
        .unwrap_or_default();

    FormValues {
        brand,
        model: car.model_id.to_string(),
        price: car.price.to_string(),
        year: car.year.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlot_store::ReferenceData;

    fn demo() -> RecordCollection {
        RecordCollection::new(ReferenceData::demo())
    }

    #[test]
    fn test_rows_follow_column_keys() {
        let collection = demo();
        let rows = car_rows(&collection.get_all_cars());
        let columns = car_columns();

        assert_eq!(rows.len(), collection.len());
        for row in &rows {
            assert!(columns.keys().all(|key| row.get(key).is_some()));
        }
        assert_eq!(rows[0].get("brand"), Some("Toyota"));
        assert_eq!(rows[0].get("price"), Some("15000"));
    }

    #[test]
    fn test_table_title() {
        let collection = demo();

        assert_eq!(table_title(&collection, None), "All cars");
        assert_eq!(table_title(&collection, Some("b3")), "BMW cars");
        assert_eq!(table_title(&collection, Some("b99")), "b99 cars");
    }

    #[test]
    fn test_filter_options_start_with_all_brands() {
        let options = brand_filter_options(&demo());

        assert_eq!(options[0], SelectOption::new("All brands", ""));
        assert_eq!(options[1], SelectOption::new("Toyota", "b1"));
        assert_eq!(options.len(), 6);
    }

    #[test]
    fn test_form_values_for_existing_car() {
        let values = form_values(&demo(), Some("3"));

        assert_eq!(
            values,
            FormValues {
                brand: "b3".to_string(),
                model: "m5".to_string(),
                price: "42000".to_string(),
                year: "2021".to_string(),
            }
        );
        assert_eq!(form_values(&demo(), Some("missing")), FormValues::default());
        assert_eq!(form_values(&demo(), None), FormValues::default());
    }
}
