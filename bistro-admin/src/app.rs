//! Admin coordinator
//!
//! Wires the list state, the editor, and the API client together. Routes
//! a save to create or update based solely on whether a record is being
//! edited, and reloads the collection after each save. Delete skips the
//! reload and drops the record locally once the server acknowledges.
//!
//! Mutations take `&mut self`, so a second mutation cannot start while a
//! predecessor and its reload are still in flight on this coordinator.

use crate::confirm::Confirm;
use crate::editor::{Draft, DraftError};
use crate::state::ListState;
use bistro_client::{RestaurantApi, TransportError};
use thiserror::Error;

/// Failure surfaced by a coordinator operation
///
/// Transport and validation failures pass through unchanged; the
/// front-end is responsible for reporting them.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error("restaurant {0} is not in the collection")]
    UnknownRecord(i64),
}

/// Coordinator for the admin front-end
pub struct AdminApp<C: Confirm> {
    api: RestaurantApi,
    list: ListState,
    editing: Option<i64>,
    confirm: C,
}

impl<C: Confirm> AdminApp<C> {
    pub fn new(api: RestaurantApi, confirm: C) -> Self {
        Self {
            api,
            list: ListState::new(),
            editing: None,
            confirm,
        }
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    /// Mutable access for search and page navigation
    pub fn list_mut(&mut self) -> &mut ListState {
        &mut self.list
    }

    /// Id of the record currently being edited
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// The injected confirmation collaborator
    pub fn confirmer(&self) -> &C {
        &self.confirm
    }

    /// Fetch the collection and install it as the displayed list
    pub async fn load(&mut self) -> Result<(), AdminError> {
        let restaurants = self.api.list().await?;
        tracing::info!(count = restaurants.len(), "collection loaded");
        self.list.set_collection(restaurants);
        Ok(())
    }

    /// Open the editor on a blank draft
    pub fn start_add(&mut self) -> Draft {
        self.editing = None;
        Draft::new()
    }

    /// Open the editor on a copy of an existing record
    pub fn start_edit(&mut self, id: i64) -> Result<Draft, AdminError> {
        let record = self.list.get(id).ok_or(AdminError::UnknownRecord(id))?;
        let draft = Draft::from_record(record);
        self.editing = Some(id);
        Ok(draft)
    }

    /// Close the editor without saving
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Persist a submitted draft, then reload the collection
    ///
    /// With a record being edited the draft goes out as an update to that
    /// id; otherwise as a create. The reload is issued only after the
    /// server has acknowledged the mutation, and a failure at any point
    /// leaves the displayed list untouched.
    pub async fn save(&mut self, draft: Draft) -> Result<(), AdminError> {
        match self.editing {
            Some(id) => {
                let payload = draft.into_update()?;
                self.api.update(id, &payload).await?;
                tracing::info!(id, "restaurant updated");
                self.load().await?;
                self.editing = None;
            }
            None => {
                let payload = draft.into_create()?;
                let created = self.api.create(&payload).await?;
                tracing::info!(id = created.id, name = %created.name, "restaurant created");
                self.load().await?;
            }
        }
        Ok(())
    }

    /// Delete a record after interactive confirmation
    ///
    /// Returns false when the operator declines; nothing is sent in that
    /// case. On success the record is dropped from local state directly,
    /// saving the reload round-trip.
    pub async fn delete(&mut self, id: i64) -> Result<bool, AdminError> {
        let record = self.list.get(id).ok_or(AdminError::UnknownRecord(id))?;
        let message = format!("Are you sure you want to delete {}?", record.name);
        if !self.confirm.confirm(&message).await {
            tracing::debug!(id, "delete declined");
            return Ok(false);
        }
        self.api.delete(id).await?;
        self.list.remove(id);
        tracing::info!(id, "restaurant deleted");
        Ok(true)
    }
}
