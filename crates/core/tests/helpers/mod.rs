#![allow(dead_code)]

use std::sync::Arc;

use gatherly_core::{
    AccountDirectory, EventCatalog, EventDraft, Profile, RegistrationLedger, Role, SeedAdmin,
};
use gatherly_store::{KvStore, MemoryStore};

pub struct TestBed {
    pub store: Arc<dyn KvStore>,
    pub directory: AccountDirectory,
    pub catalog: EventCatalog,
    pub ledger: RegistrationLedger,
}

/// Fresh components over one shared in-memory store, zero prior state.
pub fn setup() -> TestBed {
    let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    TestBed {
        directory: AccountDirectory::new(store.clone(), SeedAdmin::default()),
        catalog: EventCatalog::new(store.clone()),
        ledger: RegistrationLedger::new(store.clone()),
        store,
    }
}

pub fn admin() -> Profile {
    Profile {
        id: "admin-user".to_owned(),
        email: "admin@example.com".to_owned(),
        role: Role::Admin,
    }
}

pub fn alice() -> Profile {
    Profile {
        id: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: Role::User,
    }
}

pub fn bob() -> Profile {
    Profile {
        id: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        role: Role::User,
    }
}

pub fn draft(title: &str) -> EventDraft {
    EventDraft {
        title: title.to_owned(),
        description: "An event".to_owned(),
        date: "2026-10-01".to_owned(),
        location: "Berlin".to_owned(),
        image_ref: None,
    }
}
