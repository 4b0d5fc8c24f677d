/// Profile workflow
///
/// Loads the caller's profile, applies field updates, and drives the
/// role-change flows ("Become an Admin" / "Back to Student"). Role-changing
/// actions are followed by an explicit role refresh so gated UI picks the
/// new role up without a full reload.

use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;

use campuslink_client::users::{self, UpdateProfileRequest};
use campuslink_client::ApiClient;
use campuslink_shared::models::profile::Profile;

use crate::error::AppResult;
use crate::roles::RoleResolver;
use crate::section::Section;

/// Screen state for the profile view
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    /// The caller's profile
    pub me: Section<Profile>,
}

/// Controller for the profile screen
pub struct ProfileController {
    api: ApiClient,
    roles: Arc<RoleResolver>,
    cancel: CancellationToken,
    state: Mutex<ProfileState>,
}

impl ProfileController {
    pub fn new(api: ApiClient, roles: Arc<RoleResolver>) -> Self {
        Self {
            api,
            roles,
            cancel: CancellationToken::new(),
            state: Mutex::new(ProfileState::default()),
        }
    }

    /// Snapshot of the current screen state
    pub fn state(&self) -> ProfileState {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// Tears the screen down; pending loads will not write state
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    /// Loads the caller's profile
    pub async fn load(&self) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.me = Section::Loading;
        }

        let me = users::fetch_me(&self.api).await;

        if self.cancel.is_cancelled() {
            return;
        }

        self.state.lock().expect("state lock poisoned").me = Section::from_result(me);
    }

    /// Applies a partial profile update, then reloads
    pub async fn update_profile(&self, payload: UpdateProfileRequest) -> AppResult<()> {
        users::update_profile(&self.api, &payload).await?;
        self.load().await;
        Ok(())
    }

    /// Requests the admin role, then refreshes the resolved role
    pub async fn become_admin(&self) -> AppResult<()> {
        users::request_admin(&self.api).await?;
        self.roles.refresh_role().await?;
        self.load().await;
        Ok(())
    }

    /// Requests the student role, then refreshes the resolved role
    pub async fn become_student(&self) -> AppResult<()> {
        users::request_student(&self.api).await?;
        self.roles.refresh_role().await?;
        self.load().await;
        Ok(())
    }
}
