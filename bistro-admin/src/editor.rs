//! Record editor draft
//!
//! The editor works on a copy of the record, never the displayed list;
//! nothing the user types is visible until a save round-trip completes.
//! On submit the draft is sanitized: a field left blank is unset and
//! dropped from the outgoing payload, not sent as an empty string.

use shared::models::{Restaurant, RestaurantCreate, RestaurantUpdate};
use thiserror::Error;

/// Validation failure for a submitted draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("rating must be between 0 and 5")]
    RatingOutOfRange,
}

/// Working copy of a restaurant record
///
/// Built blank for add mode or from an existing record for edit mode;
/// the mode is decided by the caller holding (or not holding) a record
/// being edited.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    id: i64,
    pub name: String,
    pub description: String,
    pub area: String,
    pub city: String,
    pub capacity: Option<i32>,
    pub rating: Option<f64>,
    pub cuisine: String,
    pub image: String,
}

impl Draft {
    /// Blank draft for a new restaurant
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing record
    ///
    /// Zero capacity/rating mean "unknown" on the entity and come back
    /// as blank fields.
    pub fn from_record(record: &Restaurant) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            area: record.area.clone(),
            city: record.city.clone(),
            capacity: (record.capacity != 0).then_some(record.capacity),
            rating: (record.rating != 0.0).then_some(record.rating),
            cuisine: record.cuisine.clone().unwrap_or_default(),
            image: record.image.clone(),
        }
    }

    /// Id of the record this draft was built from, 0 for a new record
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Check required fields and value ranges
    pub fn validate(&self) -> Result<(), DraftError> {
        for (value, field) in [
            (&self.name, "name"),
            (&self.description, "description"),
            (&self.area, "area"),
            (&self.city, "city"),
            (&self.image, "image"),
        ] {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(field));
            }
        }
        if let Some(rating) = self.rating
            && !(0.0..=5.0).contains(&rating)
        {
            return Err(DraftError::RatingOutOfRange);
        }
        Ok(())
    }

    /// Sanitize into a create payload, dropping blank optional fields
    pub fn into_create(self) -> Result<RestaurantCreate, DraftError> {
        self.validate()?;
        Ok(RestaurantCreate {
            name: self.name,
            description: self.description,
            area: self.area,
            city: self.city,
            capacity: self.capacity,
            rating: self.rating,
            cuisine: blank_to_none(self.cuisine),
            image: self.image,
        })
    }

    /// Sanitize into a sparse update payload
    pub fn into_update(self) -> Result<RestaurantUpdate, DraftError> {
        self.validate()?;
        Ok(RestaurantUpdate {
            name: Some(self.name),
            description: Some(self.description),
            area: Some(self.area),
            city: Some(self.city),
            capacity: self.capacity,
            rating: self.rating,
            cuisine: blank_to_none(self.cuisine),
            image: Some(self.image),
        })
    }
}

fn blank_to_none(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}
