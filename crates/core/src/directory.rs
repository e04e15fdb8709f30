use std::sync::Arc;

use gatherly_store::{self as store, keys, KvStore};
use tracing::{debug, info};
use ulid::Ulid;
use validator::ValidateEmail;

use crate::error::{Error, Result};
use crate::password::{hash_password, verify_password};
use crate::types::{Account, Profile, Role, Session};

/// Credentials for the admin account created on first run.
#[derive(Clone, Debug)]
pub struct SeedAdmin {
    pub email: String,
    pub password: String,
}

impl Default for SeedAdmin {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_owned(),
            password: "admin123".to_owned(),
        }
    }
}

/// Manages the set of registered credentials and the current session.
///
/// Login has a single lookup path: case-insensitive email match plus hash
/// verification. The seeded admin satisfies it like any other account.
#[derive(Clone)]
pub struct AccountDirectory {
    store: Arc<dyn KvStore>,
    seed: SeedAdmin,
}

impl AccountDirectory {
    pub fn new(store: Arc<dyn KvStore>, seed: SeedAdmin) -> Self {
        Self { store, seed }
    }

    /// Create the account set with the seeded admin if none exists yet.
    /// Idempotent: an existing set is left untouched.
    pub async fn initialize(&self) -> Result<()> {
        if self.store.get(keys::ACCOUNTS).await?.is_some() {
            return Ok(());
        }
        let admin = Account {
            id: "admin-user".to_owned(),
            email: self.seed.email.clone(),
            password_hash: hash_password(&self.seed.password)?,
            role: Role::Admin,
        };
        store::write_collection(self.store.as_ref(), keys::ACCOUNTS, &[admin]).await?;
        info!(email = %self.seed.email, "account set seeded with initial admin");
        Ok(())
    }

    /// Create a `user`-role account. Does not start a session.
    pub async fn register(&self, email: &str, password: &str) -> Result<Profile> {
        if password.is_empty() {
            return Err(Error::InvalidInput("password is required".to_owned()));
        }
        if email.is_empty() {
            return Err(Error::InvalidInput("email is required".to_owned()));
        }
        if !email.validate_email() {
            return Err(Error::InvalidInput("email is not a valid address".to_owned()));
        }

        let mut accounts: Vec<Account> =
            store::read_collection(self.store.as_ref(), keys::ACCOUNTS).await?;
        if accounts.iter().any(|a| a.email.eq_ignore_ascii_case(email)) {
            debug!(email, "registration rejected, email taken");
            return Err(Error::DuplicateEmail);
        }

        let account = Account {
            id: Ulid::new().to_string(),
            email: email.to_owned(),
            password_hash: hash_password(password)?,
            role: Role::User,
        };
        let profile = account.profile();
        accounts.push(account);
        store::write_collection(self.store.as_ref(), keys::ACCOUNTS, &accounts).await?;
        info!(email, "account registered");
        Ok(profile)
    }

    /// Authenticate and persist the session. Returns the sanitized view.
    pub async fn login(&self, email: &str, password: &str) -> Result<Profile> {
        let accounts: Vec<Account> =
            store::read_collection(self.store.as_ref(), keys::ACCOUNTS).await?;
        let Some(account) = accounts.iter().find(|a| a.email.eq_ignore_ascii_case(email)) else {
            debug!(email, "login rejected, no such account");
            return Err(Error::InvalidCredentials);
        };
        if !verify_password(password, &account.password_hash)? {
            debug!(email, "login rejected, password mismatch");
            return Err(Error::InvalidCredentials);
        }

        let session = Session {
            account_id: account.id.clone(),
        };
        store::write_record(self.store.as_ref(), keys::SESSION, &session).await?;
        info!(email, role = %account.role, "login succeeded");
        Ok(account.profile())
    }

    /// Clear the session unconditionally; never fails on an absent one.
    pub async fn logout(&self) -> Result<()> {
        store::clear_record(self.store.as_ref(), keys::SESSION).await?;
        info!("session cleared");
        Ok(())
    }

    /// The account behind the stored session, if any. A dangling session
    /// reference reads as logged out.
    pub async fn current_user(&self) -> Result<Option<Profile>> {
        let Some(session) =
            store::read_record::<Session>(self.store.as_ref(), keys::SESSION).await?
        else {
            return Ok(None);
        };
        let accounts: Vec<Account> =
            store::read_collection(self.store.as_ref(), keys::ACCOUNTS).await?;
        Ok(accounts
            .iter()
            .find(|a| a.id == session.account_id)
            .map(Account::profile))
    }
}
