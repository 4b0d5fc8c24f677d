/// Organizer/admin event management dashboard
///
/// Tabbed controller giving an organizer or admin full control over one
/// event's team formation and content:
///
/// - **overview**: registration summary including pending join requests
/// - **teams**: approve / reject / lock individual teams
/// - **participants**: move solo participants into existing teams
/// - **resources** / **faq**: content CRUD with required-field validation
///
/// Tabs are pure client-side view state - switching tabs never refetches
/// already-loaded data. Team status transitions follow the
/// `pending → approved | rejected`, `approved → locked` table; availability
/// of each action is **status-driven**, so a locked team never offers Lock
/// again regardless of what requests are in flight.
///
/// Per-row mutations are guarded by an [`ActionTracker`]: a second action
/// on a row whose id is already in flight is rejected before any request.
/// Two different admins racing on the same team remain last-write-wins at
/// the server - no version field is sent.

use std::sync::Mutex;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use validator::Validate;

use campuslink_client::events::{self, AdminSummary, FaqPayload, ResourcePayload};
use campuslink_client::ApiClient;
use campuslink_shared::models::faq::Faq;
use campuslink_shared::models::resource::Resource;
use campuslink_shared::models::team::{SoloParticipant, Team, TeamStatus};

use crate::error::{AppError, AppResult};
use crate::section::{ActionTracker, Section};

/// Dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Teams,
    Participants,
    Resources,
    Faq,
}

/// Screen state for the admin dashboard
#[derive(Debug, Clone, Default)]
pub struct EventAdminState {
    /// Active tab (view state only)
    pub tab: AdminTab,

    /// Registration summary with join requests
    pub summary: Section<AdminSummary>,

    /// Teams with admin actions
    pub teams: Section<Vec<Team>>,

    /// Solo participant pool
    pub participants: Section<Vec<SoloParticipant>>,

    /// Event resources
    pub resources: Section<Vec<Resource>>,

    /// FAQ entries
    pub faqs: Section<Vec<Faq>>,

    /// Whether the bulk formation lock is in flight
    pub lock_in_flight: bool,
}

/// Controller for one event's admin dashboard
pub struct EventAdminController {
    api: ApiClient,
    event_id: Uuid,
    cancel: CancellationToken,
    state: Mutex<EventAdminState>,
    team_actions: ActionTracker,
    participant_moves: ActionTracker,
}

impl EventAdminController {
    /// Creates a controller for the given event
    pub fn new(api: ApiClient, event_id: Uuid) -> Self {
        Self {
            api,
            event_id,
            cancel: CancellationToken::new(),
            state: Mutex::new(EventAdminState::default()),
            team_actions: ActionTracker::new(),
            participant_moves: ActionTracker::new(),
        }
    }

    /// The event this dashboard manages
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    /// Snapshot of the current screen state
    pub fn state(&self) -> EventAdminState {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// Tears the dashboard down; pending loads will not write state
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    // --- tabs and loading -------------------------------------------------

    /// Switches the active tab (view state only, no refetch)
    pub fn set_tab(&self, tab: AdminTab) {
        self.state.lock().expect("state lock poisoned").tab = tab;
    }

    /// Loads the summary, team, and participant sections concurrently
    pub async fn load(&self) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.summary = Section::Loading;
            state.teams = Section::Loading;
            state.participants = Section::Loading;
        }

        let (summary, teams, participants) = tokio::join!(
            events::admin_fetch_summary(&self.api, self.event_id),
            events::admin_fetch_teams(&self.api, self.event_id),
            events::admin_fetch_participants(&self.api, self.event_id),
        );

        if self.cancel.is_cancelled() {
            return;
        }

        let mut state = self.state.lock().expect("state lock poisoned");
        state.summary = Section::from_result(summary);
        state.teams = Section::from_result(teams);
        state.participants = Section::from_result(participants);
    }

    /// Loads the active tab's data if it has never loaded
    ///
    /// Content tabs (resources, FAQ) load lazily on first visit; revisiting
    /// a tab whose section is already loaded issues no request.
    pub async fn ensure_tab_data(&self) {
        let (tab, resources_idle, faqs_idle) = {
            let state = self.state.lock().expect("state lock poisoned");
            (
                state.tab,
                state.resources.is_idle(),
                state.faqs.is_idle(),
            )
        };

        match tab {
            AdminTab::Resources if resources_idle => self.reload_resources().await,
            AdminTab::Faq if faqs_idle => self.reload_faqs().await,
            _ => {}
        }
    }

    /// Reloads the team list
    pub async fn reload_teams(&self) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.teams = Section::Loading;
        }
        let teams = events::admin_fetch_teams(&self.api, self.event_id).await;
        if self.cancel.is_cancelled() {
            return;
        }
        self.state.lock().expect("state lock poisoned").teams = Section::from_result(teams);
    }

    /// Reloads the solo participant pool
    pub async fn reload_participants(&self) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.participants = Section::Loading;
        }
        let participants = events::admin_fetch_participants(&self.api, self.event_id).await;
        if self.cancel.is_cancelled() {
            return;
        }
        self.state.lock().expect("state lock poisoned").participants =
            Section::from_result(participants);
    }

    /// Reloads the resource list
    pub async fn reload_resources(&self) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.resources = Section::Loading;
        }
        let resources = events::fetch_resources(&self.api, self.event_id).await;
        if self.cancel.is_cancelled() {
            return;
        }
        self.state.lock().expect("state lock poisoned").resources =
            Section::from_result(resources);
    }

    /// Reloads the FAQ list
    pub async fn reload_faqs(&self) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.faqs = Section::Loading;
        }
        let faqs = events::fetch_faqs(&self.api, self.event_id).await;
        if self.cancel.is_cancelled() {
            return;
        }
        self.state.lock().expect("state lock poisoned").faqs = Section::from_result(faqs);
    }

    // --- team review ------------------------------------------------------

    /// Whether the Lock action is offered for a team (status-driven)
    pub fn can_lock(&self, team_id: Uuid) -> bool {
        let state = self.state.lock().expect("state lock poisoned");
        state
            .teams
            .data()
            .and_then(|teams| teams.iter().find(|t| t.id == team_id))
            .map(Team::can_lock)
            .unwrap_or(false)
    }

    /// Whether approve/reject are offered for a team (status-driven)
    pub fn can_review(&self, team_id: Uuid) -> bool {
        let state = self.state.lock().expect("state lock poisoned");
        state
            .teams
            .data()
            .and_then(|teams| teams.iter().find(|t| t.id == team_id))
            .map(Team::can_review)
            .unwrap_or(false)
    }

    /// Whether a mutation for this team row is in flight
    pub fn is_team_action_in_flight(&self, team_id: Uuid) -> bool {
        self.team_actions.is_in_flight(team_id)
    }

    /// Sets a team's status - the shared mutator behind approve, reject,
    /// and lock
    ///
    /// The target must be a loaded team and the transition must be legal
    /// per the status table; both checks happen before any request. The row
    /// is guarded against concurrent submission, and the team list reloads
    /// after success.
    pub async fn update_team_status(&self, team_id: Uuid, status: TeamStatus) -> AppResult<()> {
        let current = {
            let state = self.state.lock().expect("state lock poisoned");
            state
                .teams
                .data()
                .and_then(|teams| teams.iter().find(|t| t.id == team_id))
                .map(|t| t.status)
        };

        let Some(current) = current else {
            return Err(AppError::validation("team", "Unknown team"));
        };
        if !current.can_transition_to(status) {
            return Err(AppError::validation(
                "status",
                format!(
                    "Cannot move a {} team to {}",
                    current.as_str(),
                    status.as_str()
                ),
            ));
        }

        let _guard = self
            .team_actions
            .try_begin(team_id)
            .ok_or(AppError::Busy { id: team_id })?;

        events::admin_update_team_status(&self.api, self.event_id, team_id, status).await?;

        tracing::info!(
            event_id = %self.event_id,
            team_id = %team_id,
            status = status.as_str(),
            "team status updated"
        );

        self.reload_teams().await;
        Ok(())
    }

    /// Approves a team
    pub async fn approve_team(&self, team_id: Uuid) -> AppResult<()> {
        self.update_team_status(team_id, TeamStatus::Approved).await
    }

    /// Rejects a team
    pub async fn reject_team(&self, team_id: Uuid) -> AppResult<()> {
        self.update_team_status(team_id, TeamStatus::Rejected).await
    }

    /// Locks a team
    pub async fn lock_team(&self, team_id: Uuid) -> AppResult<()> {
        self.update_team_status(team_id, TeamStatus::Locked).await
    }

    // --- solo participants ------------------------------------------------

    /// Whether a move for this participant row is in flight
    pub fn is_move_in_flight(&self, participant_id: Uuid) -> bool {
        self.participant_moves.is_in_flight(participant_id)
    }

    /// Moves a solo participant into an existing team
    ///
    /// A target team must be selected before the move is enabled. On
    /// success both the participant pool and the team list reload (the
    /// team's member count changed).
    pub async fn move_solo_participant(
        &self,
        participant_id: Uuid,
        target_team_id: Option<Uuid>,
    ) -> AppResult<()> {
        let Some(target_team_id) = target_team_id else {
            return Err(AppError::validation(
                "team",
                "Select a team to move the participant into",
            ));
        };

        let _guard = self
            .participant_moves
            .try_begin(participant_id)
            .ok_or(AppError::Busy { id: participant_id })?;

        events::admin_move_solo_participant(&self.api, self.event_id, participant_id, target_team_id)
            .await?;

        tracing::info!(
            event_id = %self.event_id,
            participant_id = %participant_id,
            team_id = %target_team_id,
            "solo participant moved"
        );

        tokio::join!(self.reload_participants(), self.reload_teams());
        Ok(())
    }

    // --- bulk lock --------------------------------------------------------

    /// Freezes team formation for the whole event
    ///
    /// Carries its own in-flight flag; a second call while pending is
    /// rejected. The team list reloads after success.
    pub async fn lock_team_formation(&self) -> AppResult<()> {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            if state.lock_in_flight {
                return Err(AppError::Busy { id: self.event_id });
            }
            state.lock_in_flight = true;
        }

        let result = events::admin_lock_team_formation(&self.api, self.event_id).await;

        self.state.lock().expect("state lock poisoned").lock_in_flight = false;

        result?;
        tracing::info!(event_id = %self.event_id, "team formation locked");
        self.reload_teams().await;
        Ok(())
    }

    // --- resources --------------------------------------------------------

    /// Creates a resource; title and a well-formed URL are required
    pub async fn create_resource(&self, payload: ResourcePayload) -> AppResult<()> {
        validate_resource(&payload)?;
        events::admin_create_resource(&self.api, self.event_id, &payload).await?;
        self.reload_resources().await;
        Ok(())
    }

    /// Updates a resource
    pub async fn update_resource(&self, resource_id: Uuid, payload: ResourcePayload) -> AppResult<()> {
        validate_resource(&payload)?;
        events::admin_update_resource(&self.api, self.event_id, resource_id, &payload).await?;
        self.reload_resources().await;
        Ok(())
    }

    /// Deletes a resource
    pub async fn delete_resource(&self, resource_id: Uuid) -> AppResult<()> {
        events::admin_delete_resource(&self.api, self.event_id, resource_id).await?;
        self.reload_resources().await;
        Ok(())
    }

    // --- FAQ ----------------------------------------------------------------

    /// Creates an FAQ entry; question and answer are required
    pub async fn create_faq(&self, payload: FaqPayload) -> AppResult<()> {
        payload
            .validate()
            .map_err(AppError::from_validation_errors)?;
        events::admin_create_faq(&self.api, self.event_id, &payload).await?;
        self.reload_faqs().await;
        Ok(())
    }

    /// Updates an FAQ entry
    pub async fn update_faq(&self, faq_id: Uuid, payload: FaqPayload) -> AppResult<()> {
        payload
            .validate()
            .map_err(AppError::from_validation_errors)?;
        events::admin_update_faq(&self.api, self.event_id, faq_id, &payload).await?;
        self.reload_faqs().await;
        Ok(())
    }

    /// Deletes an FAQ entry
    pub async fn delete_faq(&self, faq_id: Uuid) -> AppResult<()> {
        events::admin_delete_faq(&self.api, self.event_id, faq_id).await?;
        self.reload_faqs().await;
        Ok(())
    }
}

fn validate_resource(payload: &ResourcePayload) -> AppResult<()> {
    payload
        .validate()
        .map_err(AppError::from_validation_errors)?;
    url::Url::parse(&payload.url)
        .map_err(|_| AppError::validation("url", "Enter a valid URL"))?;
    Ok(())
}
