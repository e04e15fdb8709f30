use thiserror::Error;

/// Failures at the persistence boundary.
///
/// `Schema` is kept distinct from `Corrupt` so callers can tell "the
/// document is not JSON at all" apart from "the JSON does not match the
/// expected record shape" and map the latter to their own input error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O failure on key '{key}'")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stored document for key '{key}' is not valid JSON")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored document for key '{key}' does not match the expected schema")]
    Schema {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
