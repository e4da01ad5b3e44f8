//! Bistro Admin - front-end for the restaurant collection
//!
//! List view with search and pagination, a draft-based record editor,
//! and the coordinator that ties them to the API client.

pub mod app;
pub mod confirm;
pub mod editor;
pub mod state;

pub use app::{AdminApp, AdminError};
pub use confirm::{Confirm, ConsoleConfirm};
pub use editor::{Draft, DraftError};
pub use state::{DEFAULT_PAGE_SIZE, ListState};

// Re-export shared types for convenience
pub use shared::models::Restaurant;
