/// Session manager
///
/// Owns the session lifecycle: a token arrives from the external auth
/// provider at sign-in, the role is resolved immediately after, and
/// sign-out tears both down. Constructed once at startup and injected into
/// whatever composes the controllers.

use std::sync::Arc;

use campuslink_client::ApiClient;
use campuslink_shared::models::profile::Profile;
use campuslink_shared::session::SessionStore;

use crate::error::AppResult;
use crate::roles::RoleResolver;

/// Session lifecycle service
pub struct SessionManager {
    store: SessionStore,
    roles: Arc<RoleResolver>,
}

impl SessionManager {
    /// Builds the manager over the shared store and resolver
    pub fn new(store: SessionStore, roles: Arc<RoleResolver>) -> Self {
        Self { store, roles }
    }

    /// The shared session store
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// The role resolver bound to this session
    pub fn roles(&self) -> &Arc<RoleResolver> {
        &self.roles
    }

    /// Installs a token and resolves the role for it
    ///
    /// Role resolution failure leaves the token installed (the session
    /// exists) but the role cleared - role-gated UI stays locked until a
    /// refresh succeeds.
    pub async fn sign_in(&self, token: String) -> AppResult<Profile> {
        self.store.set(token);
        self.roles.resolve().await
    }

    /// Clears the token and all resolved role state
    pub fn sign_out(&self) {
        self.store.clear();
        self.roles.clear();
        tracing::info!("session cleared");
    }
}

/// Convenience constructor wiring store → client → resolver → manager
pub fn build_session(api: ApiClient) -> (SessionManager, Arc<RoleResolver>) {
    let store = api.session().clone();
    let roles = Arc::new(RoleResolver::new(api));
    let manager = SessionManager::new(store, roles.clone());
    (manager, roles)
}
