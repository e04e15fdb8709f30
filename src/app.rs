use std::sync::Arc;

use gatherly_core::{
    AccountDirectory, Error, Event, EventCatalog, EventDraft, EventPatch, EventView, Profile,
    RegisteredUser, Registration, RegistrationLedger, RegistrationStatus, Result, SeedAdmin,
};
use gatherly_store::{JsonFileStore, KvStore};

use crate::config::Config;

/// The call surface the presentation layer talks to.
///
/// One store handle, shared by all three components. Caller identity for
/// role-gated operations comes from the stored session; with no session
/// those operations fail with `Forbidden`.
#[derive(Clone)]
pub struct App {
    directory: AccountDirectory,
    catalog: EventCatalog,
    ledger: RegistrationLedger,
    store: Arc<dyn KvStore>,
}

impl App {
    pub fn new(store: Arc<dyn KvStore>, seed: SeedAdmin) -> Self {
        Self {
            directory: AccountDirectory::new(store.clone(), seed),
            catalog: EventCatalog::new(store.clone()),
            ledger: RegistrationLedger::new(store.clone()),
            store,
        }
    }

    /// Open the configured file-backed store and wire the components.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let store = JsonFileStore::open(&config.store.data_dir).await?;
        Ok(Self::new(
            Arc::new(store),
            SeedAdmin {
                email: config.seed.admin_email.clone(),
                password: config.seed.admin_password.clone(),
            },
        ))
    }

    /// The shared store handle, for wiring collaborators like the
    /// registered-users poller.
    pub fn store(&self) -> Arc<dyn KvStore> {
        self.store.clone()
    }

    pub async fn initialize(&self) -> Result<()> {
        self.directory.initialize().await
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<Profile> {
        self.directory.register(email, password).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Profile> {
        self.directory.login(email, password).await
    }

    pub async fn logout(&self) -> Result<()> {
        self.directory.logout().await
    }

    pub async fn current_user(&self) -> Result<Option<Profile>> {
        self.directory.current_user().await
    }

    async fn caller(&self) -> Result<Profile> {
        self.directory.current_user().await?.ok_or(Error::Forbidden)
    }

    /// Every event joined with its registrations. Unfiltered: the caller
    /// decides visibility with [`gatherly_core::policy::can_view_event`].
    pub async fn list_events(&self) -> Result<Vec<EventView>> {
        let events = self.catalog.list().await?;
        let mut views = Vec::with_capacity(events.len());
        for event in events {
            let registrations = self.ledger.list_for_event(&event.id).await?;
            views.push(EventView {
                event,
                registrations,
            });
        }
        Ok(views)
    }

    pub async fn get_event(&self, event_id: &str) -> Result<EventView> {
        let event = self.catalog.get(event_id).await?;
        let registrations = self.ledger.list_for_event(event_id).await?;
        Ok(EventView {
            event,
            registrations,
        })
    }

    pub async fn create_event(&self, draft: EventDraft) -> Result<Event> {
        let caller = self.caller().await?;
        self.catalog.create(draft, &caller).await
    }

    pub async fn set_event_published(&self, event_id: &str, is_published: bool) -> Result<Event> {
        let caller = self.caller().await?;
        self.catalog.set_published(event_id, is_published, &caller).await
    }

    pub async fn update_event(&self, event_id: &str, patch: EventPatch) -> Result<Event> {
        let caller = self.caller().await?;
        self.catalog.update(event_id, patch, &caller).await
    }

    pub async fn register_for_event(&self, event_id: &str) -> Result<Registration> {
        let caller = self.caller().await?;
        self.ledger
            .register(event_id, &caller.id, &caller.email)
            .await
    }

    pub async fn set_registration_status(
        &self,
        registration_id: &str,
        status: RegistrationStatus,
    ) -> Result<Registration> {
        let caller = self.caller().await?;
        self.ledger.set_status(registration_id, status, &caller).await
    }

    pub async fn list_registrations(&self) -> Result<Vec<Registration>> {
        let caller = self.caller().await?;
        self.ledger.list_all(&caller).await
    }

    pub async fn registered_users(&self) -> Result<Vec<RegisteredUser>> {
        let caller = self.caller().await?;
        self.ledger.registered_users(&caller).await
    }
}
