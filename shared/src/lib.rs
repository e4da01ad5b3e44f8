//! Shared types for the Bistro admin tools
//!
//! Data model types exchanged between the wire client and the
//! admin application.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
