//! Conversion of flat records into display text, one string per field.

use carlot_types::CarJoined;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// A primitive field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<u16> for FieldValue {
    fn from(value: u16) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// A record whose fields are all primitives, listed in a fixed order.
pub trait FlatRecord {
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;
}

impl FlatRecord for CarJoined {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("id", self.id.as_str().into()),
            ("price", self.price.into()),
            ("year", self.year.into()),
            ("brand", self.brand.as_str().into()),
            ("model", self.model.as_str().into()),
        ]
    }
}

/// Field name to display text, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StringRecord(IndexMap<String, String>);

impl StringRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Every field of `record` as text, names and order preserved.
pub fn stringify_props<R: FlatRecord + ?Sized>(record: &R) -> StringRecord {
    record
        .fields()
        .into_iter()
        .map(|(key, value)| (key, value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlot_types::CarId;

    struct Flags {
        name: &'static str,
        enabled: bool,
        ratio: f64,
    }

    impl FlatRecord for Flags {
        fn fields(&self) -> Vec<(&'static str, FieldValue)> {
            vec![
                ("name", self.name.into()),
                ("enabled", self.enabled.into()),
                ("ratio", self.ratio.into()),
            ]
        }
    }

    #[test]
    fn test_car_joined_fields_in_declaration_order() {
        let car = CarJoined {
            id: CarId::new("c1"),
            price: 15000,
            year: 2020,
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
        };

        let record = stringify_props(&car);

        let pairs: Vec<(&str, &str)> = record.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("id", "c1"),
                ("price", "15000"),
                ("year", "2020"),
                ("brand", "Toyota"),
                ("model", "Corolla"),
            ]
        );
    }

    #[test]
    fn test_bool_and_float_fields() {
        let record = stringify_props(&Flags {
            name: "x",
            enabled: true,
            ratio: 0.5,
        });

        assert_eq!(record.get("enabled"), Some("true"));
        assert_eq!(record.get("ratio"), Some("0.5"));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "enabled", "ratio"]);
    }
}
