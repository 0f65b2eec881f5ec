use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandRow {
    pub id: String,
    pub title: String,
    pub model_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandListViewModel {
    pub brands: Vec<BrandRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRow {
    pub id: String,
    pub title: String,
    pub brand_id: String,
    /// Brand title, or the "not found" text for a dangling brand
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelListViewModel {
    pub models: Vec<ModelRow>,
}
