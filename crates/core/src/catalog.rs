use std::sync::Arc;

use gatherly_store::{self as store, keys, KvStore};
use tracing::info;
use ulid::Ulid;

use crate::error::{Error, Result};
use crate::policy;
use crate::types::{Event, EventDraft, EventPatch, Profile};

/// Manages the set of events and their publication state.
///
/// Listing is unfiltered: visibility is the caller's concern, decided with
/// [`policy::can_view_event`]. Every mutation re-reads the full collection
/// immediately before writing it back.
#[derive(Clone)]
pub struct EventCatalog {
    store: Arc<dyn KvStore>,
}

impl EventCatalog {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Record a new draft event authored by `author`. Drafts always start
    /// unpublished with a zero attendee counter.
    pub async fn create(&self, draft: EventDraft, author: &Profile) -> Result<Event> {
        if !policy::can_create_event(author) {
            return Err(Error::Forbidden);
        }
        if draft.title.trim().is_empty() {
            return Err(Error::InvalidInput("title is required".to_owned()));
        }

        let mut events: Vec<Event> =
            store::read_collection(self.store.as_ref(), keys::EVENTS).await?;
        let event = Event {
            id: Ulid::new().to_string(),
            title: draft.title,
            description: draft.description,
            date: draft.date,
            location: draft.location,
            organizer_email: author.email.clone(),
            attendee_count: 0,
            image_ref: draft.image_ref,
            is_published: false,
        };
        events.push(event.clone());
        store::write_collection(self.store.as_ref(), keys::EVENTS, &events).await?;
        info!(event = %event.id, organizer = %event.organizer_email, "event drafted");
        Ok(event)
    }

    /// Every stored event, published or not.
    pub async fn list(&self) -> Result<Vec<Event>> {
        Ok(store::read_collection(self.store.as_ref(), keys::EVENTS).await?)
    }

    pub async fn get(&self, event_id: &str) -> Result<Event> {
        self.list()
            .await?
            .into_iter()
            .find(|e| e.id == event_id)
            .ok_or(Error::NotFound)
    }

    /// Flip publication state. Admin only; idempotent re-application is
    /// allowed.
    pub async fn set_published(
        &self,
        event_id: &str,
        is_published: bool,
        caller: &Profile,
    ) -> Result<Event> {
        if !policy::can_publish(caller) {
            return Err(Error::Forbidden);
        }
        let mut events: Vec<Event> =
            store::read_collection(self.store.as_ref(), keys::EVENTS).await?;
        let event = events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or(Error::NotFound)?;
        event.is_published = is_published;
        let updated = event.clone();
        store::write_collection(self.store.as_ref(), keys::EVENTS, &events).await?;
        info!(event = event_id, is_published, "publication state changed");
        Ok(updated)
    }

    /// Apply an admin edit to an event's content fields. Publication
    /// state, the attendee counter, the organizer and the registration
    /// view are not reachable through a patch.
    pub async fn update(
        &self,
        event_id: &str,
        patch: EventPatch,
        caller: &Profile,
    ) -> Result<Event> {
        if !policy::can_edit_event(caller) {
            return Err(Error::Forbidden);
        }
        let mut events: Vec<Event> =
            store::read_collection(self.store.as_ref(), keys::EVENTS).await?;
        let event = events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or(Error::NotFound)?;

        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(Error::InvalidInput("title is required".to_owned()));
            }
            event.title = title;
        }
        if let Some(description) = patch.description {
            event.description = description;
        }
        if let Some(date) = patch.date {
            event.date = date;
        }
        if let Some(location) = patch.location {
            event.location = location;
        }
        if let Some(image_ref) = patch.image_ref {
            event.image_ref = Some(image_ref);
        }

        let updated = event.clone();
        store::write_collection(self.store.as_ref(), keys::EVENTS, &events).await?;
        info!(event = event_id, "event updated");
        Ok(updated)
    }
}
