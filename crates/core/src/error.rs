use gatherly_store::StoreError;
use thiserror::Error;

/// Domain errors for the data/authorization layer.
///
/// Every operation returns one of these; the presentation layer maps each
/// kind to a user-visible notification. No failure is fatal to the process
/// and the store stays usable after any single failed operation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing or malformed input: {0}")]
    InvalidInput(String),

    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not allowed for this role")]
    Forbidden,

    #[error("No record with the given id")]
    NotFound,

    #[error("Password hashing failed")]
    Hashing(String),

    #[error("Store failure")]
    Store(#[source] StoreError),
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        // A document that decodes but does not match its schema is rejected
        // as bad input rather than trusted; everything else is a platform
        // failure.
        match err {
            StoreError::Schema { key, .. } => {
                Error::InvalidInput(format!("stored collection '{key}' is malformed"))
            }
            other => Error::Store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
