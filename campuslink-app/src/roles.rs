/// Role resolution
///
/// The application role gates which screens and actions a user sees. It is
/// resolved once per session change from `/api/users/me` and re-resolved
/// explicitly after role-changing actions ("Become an Admin").
///
/// A profile response without a `role` field is a **hard failure**: the role
/// is cleared and the error surfaced, never defaulted - a transient profile
/// glitch therefore locks role-gated UI until a refresh, by design of the
/// source system.

use std::sync::Mutex;

use campuslink_client::{users, ApiClient};
use campuslink_shared::models::profile::Profile;
use campuslink_shared::roles::Role;

use crate::error::AppResult;

/// Resolved role state
#[derive(Debug, Clone, Default)]
pub struct RoleState {
    /// The resolved role, `None` until resolution succeeds
    pub role: Option<Role>,

    /// The full profile from the last successful resolution
    pub profile: Option<Profile>,

    /// Surfaced resolution error, if the last attempt failed
    pub error: Option<String>,
}

/// Resolves and caches the current user's role
pub struct RoleResolver {
    api: ApiClient,
    state: Mutex<RoleState>,
}

impl RoleResolver {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Mutex::new(RoleState::default()),
        }
    }

    /// Snapshot of the current role state
    pub fn state(&self) -> RoleState {
        self.state.lock().expect("role lock poisoned").clone()
    }

    /// The resolved role, if any
    pub fn role(&self) -> Option<Role> {
        self.state.lock().expect("role lock poisoned").role
    }

    /// Fetches `/users/me` and stores the result
    ///
    /// On failure (including a profile without a role, which fails to
    /// decode) the role is cleared and the error stored.
    pub async fn resolve(&self) -> AppResult<Profile> {
        match users::fetch_me(&self.api).await {
            Ok(profile) => {
                let mut state = self.state.lock().expect("role lock poisoned");
                state.role = Some(profile.role);
                state.profile = Some(profile.clone());
                state.error = None;
                tracing::info!(role = %profile.role, "role resolved");
                Ok(profile)
            }
            Err(err) => {
                let message = err.user_message();
                let mut state = self.state.lock().expect("role lock poisoned");
                state.role = None;
                state.profile = None;
                state.error = Some(message);
                tracing::warn!("role resolution failed: {err}");
                Err(err.into())
            }
        }
    }

    /// Explicit re-fetch after a role-changing action
    pub async fn refresh_role(&self) -> AppResult<Profile> {
        self.resolve().await
    }

    /// Clears all resolved state (sign-out)
    pub fn clear(&self) {
        *self.state.lock().expect("role lock poisoned") = RoleState::default();
    }
}
