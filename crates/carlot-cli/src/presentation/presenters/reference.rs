use carlot_store::RecordCollection;
use carlot_types::BRAND_NOT_FOUND;

use crate::presentation::view_models::{BrandListViewModel, BrandRow, ModelListViewModel, ModelRow};

pub fn present_brand_list(collection: &RecordCollection) -> BrandListViewModel {
    let brands = collection
        .brands()
        .iter()
        .map(|brand| BrandRow {
            id: brand.id.to_string(),
            title: brand.title.clone(),
            model_count: collection
                .models()
                .iter()
                .filter(|model| model.brand_id == brand.id)
                .count(),
        })
        .collect();

    BrandListViewModel { brands }
}

/// Models in table order, optionally only those of `brand_id`.
pub fn present_model_list(
    collection: &RecordCollection,
    brand_id: Option<&str>,
) -> ModelListViewModel {
    let models = collection
        .models()
        .iter()
        .filter(|model| brand_id.is_none_or(|id| model.brand_id == id))
        .map(|model| ModelRow {
            id: model.id.to_string(),
            title: model.title.clone(),
            brand_id: model.brand_id.to_string(),
            brand: collection
                .find_brand(model.brand_id.as_str())
                .map(|brand| brand.title.clone())
                .unwrap_or_else(|| BRAND_NOT_FOUND.to_string()),
        })
        .collect();

    ModelListViewModel { models }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlot_store::ReferenceData;

    #[test]
    fn test_brand_list_counts_models() {
        let collection = RecordCollection::new(ReferenceData::demo());
        let list = present_brand_list(&collection);

        assert_eq!(list.brands.len(), 5);
        assert!(list.brands.iter().all(|brand| brand.model_count == 2));
    }

    #[test]
    fn test_model_list_filters_by_brand() {
        let collection = RecordCollection::new(ReferenceData::demo());
        let list = present_model_list(&collection, Some("b2"));

        let titles: Vec<&str> = list.models.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Golf", "Passat"]);
        assert!(list.models.iter().all(|m| m.brand == "Volkswagen"));
        assert!(present_model_list(&collection, Some("b9")).models.is_empty());
    }
}
