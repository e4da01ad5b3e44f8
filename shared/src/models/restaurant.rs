//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant entity
///
/// `id` is server-assigned; 0 (or absent on the wire) marks a record that
/// has not been saved yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub area: String,
    pub city: String,
    /// Seats, 0 = unknown
    #[serde(default)]
    pub capacity: i32,
    /// 0.0..=5.0, 0 = unrated
    #[serde(default)]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    pub image: String,
}

impl Restaurant {
    /// Whether this record has been persisted by the server
    pub fn is_saved(&self) -> bool {
        self.id != 0
    }
}

/// Create restaurant payload
///
/// Unset optional fields are omitted from the JSON body entirely, so the
/// server applies its own defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub description: String,
    pub area: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    pub image: String,
}

/// Update restaurant payload
///
/// Sparse: only fields carrying `Some` reach the wire. The target record is
/// addressed by id in the request path, not in the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_defaults_on_deserialize() {
        let json = r#"{
            "name": "Pizza Palace",
            "description": "Wood-fired pies",
            "area": "Soho",
            "city": "London",
            "image": "https://example.com/p.jpg"
        }"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, 0);
        assert!(!r.is_saved());
        assert_eq!(r.capacity, 0);
        assert_eq!(r.rating, 0.0);
        assert!(r.cuisine.is_none());
    }

    #[test]
    fn test_create_payload_omits_unset_fields() {
        let payload = RestaurantCreate {
            name: "Pizza Palace".into(),
            description: "Wood-fired pies".into(),
            area: "Soho".into(),
            city: "London".into(),
            capacity: None,
            rating: None,
            cuisine: None,
            image: "https://example.com/p.jpg".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        let keys = value.as_object().unwrap();
        assert_eq!(keys.len(), 5);
        for key in ["name", "description", "area", "city", "image"] {
            assert!(keys.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_update_payload_is_sparse() {
        let payload = RestaurantUpdate {
            name: Some("Sushi Bar".into()),
            rating: Some(4.5),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        let keys = value.as_object().unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys["name"], "Sushi Bar");
        assert_eq!(keys["rating"], 4.5);
    }

    #[test]
    fn test_restaurant_roundtrip() {
        let r = Restaurant {
            id: 7,
            name: "Sushi Bar".into(),
            description: "Omakase counter".into(),
            area: "Shibuya".into(),
            city: "Tokyo".into(),
            capacity: 12,
            rating: 4.8,
            cuisine: Some("Japanese".into()),
            image: "https://example.com/s.jpg".into(),
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: Restaurant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
