//! Well-known store keys. Three authoritative collections plus the session
//! record and the legacy registered-users list kept for the admin view.

pub const ACCOUNTS: &str = "accounts";
pub const EVENTS: &str = "events";
pub const REGISTRATIONS: &str = "registrations";
pub const SESSION: &str = "session";
pub const REGISTERED_USERS: &str = "registered_users";
