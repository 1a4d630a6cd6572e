pub mod file;
#[allow(clippy::module_inception)]
pub mod store;

pub use file::FileStore;
pub use store::{InMemoryStore, KvStore, StoreError, StoreResult};

/// Key holding the identified user's display name.
pub const USER_NAME_KEY: &str = "userName";
/// Key holding the identified user's email.
pub const USER_EMAIL_KEY: &str = "userEmail";
/// Key holding the JSON-encoded tool registry.
pub const TOOLS_KEY: &str = "tools";
