use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use time::OffsetDateTime;

#[derive(
    EnumString, Display, AsRefStr, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(
    EnumString, Display, AsRefStr, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Stored credential record. The hash never leaves this crate; callers get
/// the sanitized [`Profile`] view instead.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub email: String,
    pub(crate) password_hash: String,
    pub role: Role,
}

impl Account {
    pub fn profile(&self) -> Profile {
        Profile {
            id: self.id.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// What the presentation layer sees of an account: no secret material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl Profile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// The currently-authenticated account reference; at most one per process.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub account_id: String,
}

/// Stored event record. Registrations are not embedded — the ledger is the
/// single source of truth and [`EventView`] carries the computed join.
/// `attendee_count` is bumped exactly once per new registration and always
/// equals the ledger count for the event.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub organizer_email: String,
    pub attendee_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    pub is_published: bool,
}

/// Organizer-supplied fields of a new event. Everything else (id, counter,
/// publication state) is set by the catalog.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub image_ref: Option<String>,
}

/// Admin edit of an event's content fields. Publication state, the
/// attendee counter and the organizer are not reachable through a patch.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub image_ref: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub event_id: String,
    pub account_id: String,
    pub account_email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub status: RegistrationStatus,
}

/// Entry in the legacy registered-users list the admin dashboard polls.
/// Written on an account's first successful registration, read back
/// verbatim, never reconciled with the accounts collection.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub registration_date: OffsetDateTime,
}

/// An event joined with its registrations from the ledger.
#[derive(Clone, Debug)]
pub struct EventView {
    pub event: Event,
    pub registrations: Vec<Registration>,
}
