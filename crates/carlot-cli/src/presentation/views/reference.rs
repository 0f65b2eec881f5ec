use std::fmt;

use crate::presentation::view_models::{BrandListViewModel, ModelListViewModel};

// --------------------------------------------------------
// Brand List View
// --------------------------------------------------------

pub struct BrandListView<'a> {
    data: &'a BrandListViewModel,
}

impl<'a> BrandListView<'a> {
    pub fn new(data: &'a BrandListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for BrandListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.brands.is_empty() {
            writeln!(f, "No brands.")?;
            return Ok(());
        }

        writeln!(f, "{:<10} {:<20} MODELS", "ID", "TITLE")?;
        for brand in &self.data.brands {
            writeln!(f, "{:<10} {:<20} {}", brand.id, brand.title, brand.model_count)?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Model List View
// --------------------------------------------------------

pub struct ModelListView<'a> {
    data: &'a ModelListViewModel,
}

impl<'a> ModelListView<'a> {
    pub fn new(data: &'a ModelListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ModelListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.models.is_empty() {
            writeln!(f, "No models.")?;
            return Ok(());
        }

        writeln!(f, "{:<10} {:<20} BRAND", "ID", "TITLE")?;
        for model in &self.data.models {
            writeln!(
                f,
                "{:<10} {:<20} {} ({})",
                model.id, model.title, model.brand, model.brand_id
            )?;
        }

        Ok(())
    }
}
