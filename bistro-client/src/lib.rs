//! Bistro Client - HTTP client for the restaurant API
//!
//! Translates the four admin operations (list, create, update, delete)
//! into REST calls against a configured backend.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientResult, TransportError};
pub use http::RestaurantApi;

// Re-export shared types for convenience
pub use shared::models::{Restaurant, RestaurantCreate, RestaurantUpdate};
