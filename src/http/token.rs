//! Token storage abstraction.
//!
//! The client reads and writes session tokens through a key-value store it
//! does not own, so applications can back it with whatever persistence they
//! already have (browser storage, keychain, a config file). An in-memory
//! implementation ships for tests and short-lived tools.

use std::collections::HashMap;
use std::sync::RwLock;

/// Storage key for the access token.
pub const API_TOKEN_KEY: &str = "api_token";
/// Storage key for the refresh token.
pub const API_REFRESH_TOKEN_KEY: &str = "api_refresh_token";

/// Key-value storage for session tokens.
///
/// Reads happen on every request; writes only on refresh success and login,
/// and `clear` only on session termination.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear(&self);
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }

    fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_and_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.get(API_TOKEN_KEY).is_none());

        store.set(API_TOKEN_KEY, "access");
        store.set(API_REFRESH_TOKEN_KEY, "refresh");
        assert_eq!(store.get(API_TOKEN_KEY).as_deref(), Some("access"));

        store.remove(API_TOKEN_KEY);
        assert!(store.get(API_TOKEN_KEY).is_none());
        assert_eq!(store.get(API_REFRESH_TOKEN_KEY).as_deref(), Some("refresh"));

        store.clear();
        assert!(store.get(API_REFRESH_TOKEN_KEY).is_none());
    }
}
