//! Pure authorization decisions consulted before every mutation.
//!
//! Total functions over their inputs: no store access, no failure path.

use crate::types::{Event, Profile, Registration, Role};

/// Admins review events; they do not author them.
pub fn can_create_event(account: &Profile) -> bool {
    account.role != Role::Admin
}

pub fn can_publish(account: &Profile) -> bool {
    account.role == Role::Admin
}

pub fn can_edit_event(account: &Profile) -> bool {
    account.role == Role::Admin
}

pub fn can_moderate_registrations(account: &Profile) -> bool {
    account.role == Role::Admin
}

/// Visible iff admin, published, organizer, or already registered.
///
/// `registrations` is the event's registration view from the ledger;
/// entries for other events are ignored.
pub fn can_view_event(account: &Profile, event: &Event, registrations: &[Registration]) -> bool {
    account.is_admin()
        || event.is_published
        || account.email.eq_ignore_ascii_case(&event.organizer_email)
        || registrations
            .iter()
            .any(|r| r.event_id == event.id && r.account_id == account.id)
}
