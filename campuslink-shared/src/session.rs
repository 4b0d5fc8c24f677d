/// Current-session token store
///
/// The external auth provider issues opaque bearer tokens; this store is the
/// single place the rest of the system reads them from. The API client reads
/// the token when building a request, the session manager writes it on
/// sign-in and clears it on sign-out.
///
/// The store is interior-mutable and cheaply cloneable so it can be shared
/// between the client and every controller without threading `&mut` through
/// the call graph.
///
/// # Example
///
/// ```
/// use campuslink_shared::session::SessionStore;
///
/// let store = SessionStore::new();
/// assert!(store.token().is_none());
///
/// store.set("eyJ...".to_string());
/// assert_eq!(store.token().as_deref(), Some("eyJ..."));
///
/// store.clear();
/// assert!(!store.is_authenticated());
/// ```

use std::sync::{Arc, RwLock};

/// Shared holder for the current bearer token
///
/// `None` means no session: requests proceed unauthenticated and the server
/// is responsible for rejecting them.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    /// Creates an empty (signed-out) store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a token (tests, tooling)
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(token.into());
        store
    }

    /// Returns a copy of the current token, if any
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    /// Whether a session is currently present
    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("session lock poisoned").is_some()
    }

    /// Replaces the current token
    pub fn set(&self, token: String) {
        *self.token.write().expect("session lock poisoned") = Some(token);
    }

    /// Clears the session (sign-out)
    pub fn clear(&self) {
        *self.token.write().expect("session lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());

        store.set("token-a".to_string());
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("token-a"));

        store.set("token-b".to_string());
        assert_eq!(store.token().as_deref(), Some("token-b"));

        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_session_store_clones_share_state() {
        let store = SessionStore::new();
        let clone = store.clone();

        store.set("shared".to_string());
        assert_eq!(clone.token().as_deref(), Some("shared"));
    }
}
