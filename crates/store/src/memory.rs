//! In-memory credential store backed by an `arc-swap` slot.

use arc_swap::ArcSwapOption;
use std::sync::Arc;
use veriwork_types::{Credential, TokenStore};

/// The session-scoped [`TokenStore`]: one credential slot, replaced
/// atomically on renewal and emptied on logout or irrecoverable auth failure.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: ArcSwapOption<Credential>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn current(&self) -> Option<Credential> {
        self.slot.load_full().map(|c| (*c).clone())
    }

    fn set(&self, credential: Credential) {
        self.slot.store(Some(Arc::new(credential)));
    }

    fn clear(&self) {
        self.slot.store(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryTokenStore::new();
        assert!(store.current().is_none());
    }

    #[test]
    fn test_set_and_current() {
        let store = MemoryTokenStore::new();
        store.set(Credential::new("tok", 42));
        let held = store.current().unwrap();
        assert_eq!(held.value, "tok");
        assert_eq!(held.expires_at, 42);
    }

    #[test]
    fn test_overwrite() {
        let store = MemoryTokenStore::new();
        store.set(Credential::new("first", 1));
        store.set(Credential::new("second", 2));
        assert_eq!(store.current().unwrap().value, "second");
    }

    #[test]
    fn test_clear() {
        let store = MemoryTokenStore::new();
        store.set(Credential::new("tok", 42));
        store.clear();
        assert!(store.current().is_none());
    }
}
