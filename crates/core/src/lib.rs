//! Data and authorization core for the event registration front end.
//!
//! Three stateful components over one injected [`KvStore`] handle — the
//! account directory, the event catalog and the registration ledger — plus
//! the pure authorization policy they consult before every mutation.

mod catalog;
mod directory;
mod error;
mod ledger;
mod password;
pub mod policy;
mod types;

pub use catalog::EventCatalog;
pub use directory::{AccountDirectory, SeedAdmin};
pub use error::{Error, Result};
pub use ledger::RegistrationLedger;
pub use types::*;
