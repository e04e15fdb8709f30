//! gatherly — client-side data and authorization layer for an event
//! registration front end.
//!
//! There is no server: durable state lives in a JSON key-value store that
//! stands in for a backend database. The presentation layer (out of scope
//! here) calls the [`App`] facade and renders whatever value or error kind
//! comes back.

mod app;
pub mod config;
pub mod observability;
pub mod poller;

pub use app::App;
pub use config::Config;
pub use gatherly_core::{
    policy, Error, Event, EventDraft, EventPatch, EventView, Profile, RegisteredUser, Registration,
    RegistrationStatus, Result, Role, SeedAdmin,
};
pub use gatherly_store::{JsonFileStore, KvStore, MemoryStore};
