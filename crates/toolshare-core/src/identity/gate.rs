use tracing::{error, info, warn};

use crate::model::User;
use crate::outcome::Outcome;
use crate::store::{KvStore, USER_EMAIL_KEY, USER_NAME_KEY};

/// Holds the session identity and decides whether the rest of the
/// interface is unlocked.
///
/// The gate opens at most once per session; there is no way to close it.
#[derive(Debug, Default)]
pub struct IdentityGate {
    user: Option<User>,
}

impl IdentityGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the gate from a previous session. Opens only when both the
    /// stored name and email are present and non-empty.
    pub fn restore<S: KvStore + ?Sized>(store: &S) -> Self {
        let read = |key: &str| match store.get(key) {
            Ok(v) => v.filter(|s| !s.is_empty()),
            Err(e) => {
                warn!("Failed to read {} from store: {}", key, e);
                None
            }
        };
        let user = match (read(USER_NAME_KEY), read(USER_EMAIL_KEY)) {
            (Some(name), Some(email)) => Some(User { name, email }),
            _ => None,
        };
        if let Some(ref u) = user {
            info!(user = %u.name, "identity restored");
        }
        Self { user }
    }

    /// Identify the session user. Both fields must be non-empty after
    /// trimming; the values are stored exactly as given.
    pub fn identify<S: KvStore + ?Sized>(&mut self, name: &str, email: &str, store: &S) -> Outcome {
        if self.user.is_some() {
            return Outcome::RejectedAlreadyIdentified;
        }
        if name.trim().is_empty() || email.trim().is_empty() {
            return Outcome::RejectedEmptyField;
        }

        // A failed write keeps the session usable; it just won't be restored.
        if let Err(e) = store
            .set(USER_NAME_KEY, name)
            .and_then(|_| store.set(USER_EMAIL_KEY, email))
        {
            error!("Failed to persist identity: {}", e);
        }

        info!(user = %name, "identified");
        self.user = Some(User::new(name, email));
        Outcome::Accepted
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn identify_opens_gate_and_persists_values_unchanged() {
        let store = InMemoryStore::new();
        let mut gate = IdentityGate::new();
        assert!(!gate.is_open());

        let outcome = gate.identify(" Noor ", "noor@example.nl", &store);
        assert_eq!(outcome, Outcome::Accepted);
        assert!(gate.is_open());
        assert_eq!(gate.user().unwrap().name, " Noor ");
        assert_eq!(store.get(USER_NAME_KEY).unwrap().as_deref(), Some(" Noor "));
        assert_eq!(
            store.get(USER_EMAIL_KEY).unwrap().as_deref(),
            Some("noor@example.nl")
        );
    }

    #[test]
    fn empty_or_whitespace_fields_keep_gate_closed() {
        let store = InMemoryStore::new();
        let mut gate = IdentityGate::new();

        for (name, email) in [("", "a@b.nl"), ("Piet", ""), ("   ", "a@b.nl"), ("Piet", "\t ")] {
            assert_eq!(
                gate.identify(name, email, &store),
                Outcome::RejectedEmptyField
            );
            assert!(!gate.is_open());
        }
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn gate_opens_exactly_once() {
        let store = InMemoryStore::new();
        let mut gate = IdentityGate::new();
        assert!(gate.identify("Eva", "eva@example.nl", &store).is_accepted());

        assert_eq!(
            gate.identify("Daan", "daan@example.nl", &store),
            Outcome::RejectedAlreadyIdentified
        );
        assert_eq!(gate.user().unwrap().name, "Eva");
        assert_eq!(store.get(USER_NAME_KEY).unwrap().as_deref(), Some("Eva"));
    }

    #[test]
    fn restore_requires_both_values() {
        let store = InMemoryStore::new();
        store.set(USER_NAME_KEY, "Mila").unwrap();
        assert!(!IdentityGate::restore(&store).is_open());

        store.set(USER_EMAIL_KEY, "").unwrap();
        assert!(!IdentityGate::restore(&store).is_open());

        store.set(USER_EMAIL_KEY, "mila@example.nl").unwrap();
        let gate = IdentityGate::restore(&store);
        assert_eq!(gate.user(), Some(&User::new("Mila", "mila@example.nl")));
    }
}
