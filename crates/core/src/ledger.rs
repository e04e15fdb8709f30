use std::sync::Arc;

use gatherly_store::{self as store, keys, KvStore};
use time::OffsetDateTime;
use tracing::{debug, info};
use ulid::Ulid;

use crate::error::{Error, Result};
use crate::policy;
use crate::types::{Event, Profile, RegisteredUser, Registration, RegistrationStatus};

/// Authoritative collection of attendance registrations.
///
/// The stored event record carries only the attendee counter; the per-event
/// registration list is always computed from here. The legacy
/// registered-users list consumed by the admin dashboard is appended to on
/// an account's first successful registration and never reconciled.
#[derive(Clone)]
pub struct RegistrationLedger {
    store: Arc<dyn KvStore>,
}

impl RegistrationLedger {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Record an attendance registration.
    ///
    /// Idempotent per `(event_id, account_id)`: a duplicate attempt returns
    /// the existing record unchanged and the attendee counter does not
    /// move. A new registration starts `pending` and bumps the counter by
    /// exactly one. No await point separates the collection re-reads from
    /// the writes, so no intermediate state is observable in-process.
    pub async fn register(
        &self,
        event_id: &str,
        account_id: &str,
        account_email: &str,
    ) -> Result<Registration> {
        let mut events: Vec<Event> =
            store::read_collection(self.store.as_ref(), keys::EVENTS).await?;
        let Some(event) = events.iter_mut().find(|e| e.id == event_id) else {
            return Err(Error::NotFound);
        };

        let mut registrations: Vec<Registration> =
            store::read_collection(self.store.as_ref(), keys::REGISTRATIONS).await?;
        if let Some(existing) = registrations
            .iter()
            .find(|r| r.event_id == event_id && r.account_id == account_id)
        {
            debug!(
                event = event_id,
                account = account_id,
                registration = %existing.id,
                "duplicate registration attempt, returning existing record"
            );
            return Ok(existing.clone());
        }

        let registration = Registration {
            id: Ulid::new().to_string(),
            event_id: event_id.to_owned(),
            account_id: account_id.to_owned(),
            account_email: account_email.to_owned(),
            created_at: OffsetDateTime::now_utc(),
            status: RegistrationStatus::Pending,
        };
        registrations.push(registration.clone());
        store::write_collection(self.store.as_ref(), keys::REGISTRATIONS, &registrations).await?;

        event.attendee_count += 1;
        store::write_collection(self.store.as_ref(), keys::EVENTS, &events).await?;

        self.record_registered_user(&registration).await?;
        info!(
            event = event_id,
            account = account_id,
            registration = %registration.id,
            "registration recorded"
        );
        Ok(registration)
    }

    /// Append to the legacy registered-users list unless the account is
    /// already on it.
    async fn record_registered_user(&self, registration: &Registration) -> Result<()> {
        let mut users: Vec<RegisteredUser> =
            store::read_collection(self.store.as_ref(), keys::REGISTERED_USERS).await?;
        if users.iter().any(|u| u.id == registration.account_id) {
            return Ok(());
        }
        users.push(RegisteredUser {
            id: registration.account_id.clone(),
            email: registration.account_email.clone(),
            registration_date: registration.created_at,
        });
        store::write_collection(self.store.as_ref(), keys::REGISTERED_USERS, &users).await?;
        Ok(())
    }

    /// Change a registration's review status. Admin only. Any status is
    /// reachable from any status; re-applying the current one is a no-op.
    pub async fn set_status(
        &self,
        registration_id: &str,
        status: RegistrationStatus,
        caller: &Profile,
    ) -> Result<Registration> {
        if !policy::can_moderate_registrations(caller) {
            return Err(Error::Forbidden);
        }
        let mut registrations: Vec<Registration> =
            store::read_collection(self.store.as_ref(), keys::REGISTRATIONS).await?;
        let registration = registrations
            .iter_mut()
            .find(|r| r.id == registration_id)
            .ok_or(Error::NotFound)?;
        registration.status = status;
        let updated = registration.clone();
        store::write_collection(self.store.as_ref(), keys::REGISTRATIONS, &registrations).await?;
        info!(registration = registration_id, status = %status, "registration status changed");
        Ok(updated)
    }

    /// The whole ledger. Admin-only view.
    pub async fn list_all(&self, caller: &Profile) -> Result<Vec<Registration>> {
        if !policy::can_moderate_registrations(caller) {
            return Err(Error::Forbidden);
        }
        Ok(store::read_collection(self.store.as_ref(), keys::REGISTRATIONS).await?)
    }

    /// Computed per-event view. Not permission-gated: it feeds the event
    /// join and the visibility helper.
    pub async fn list_for_event(&self, event_id: &str) -> Result<Vec<Registration>> {
        let registrations: Vec<Registration> =
            store::read_collection(self.store.as_ref(), keys::REGISTRATIONS).await?;
        Ok(registrations
            .into_iter()
            .filter(|r| r.event_id == event_id)
            .collect())
    }

    /// Verbatim read of the legacy registered-users list. Admin only.
    pub async fn registered_users(&self, caller: &Profile) -> Result<Vec<RegisteredUser>> {
        if !policy::can_moderate_registrations(caller) {
            return Err(Error::Forbidden);
        }
        Ok(store::read_collection(self.store.as_ref(), keys::REGISTERED_USERS).await?)
    }
}
