//! Interplanetary delivery addresses.

use serde::{Deserialize, Serialize};

use crate::form::FormFields;

/// A delivery address as the portal stores and returns it.
///
/// All components are free-form strings; the portal performs no postal
/// validation beyond requiring the fields to be present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
    pub planet: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        zip: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        planet: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            zip: zip.into(),
            city: city.into(),
            country: country.into(),
            planet: planet.into(),
        }
    }
}

impl FormFields for Address {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("street", self.street.clone()),
            ("zip", self.zip.clone()),
            ("city", self.city.clone()),
            ("country", self.country.clone()),
            ("planet", self.planet.clone()),
        ]
    }
}
