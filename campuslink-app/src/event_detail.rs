/// Student-facing event detail workflow
///
/// One controller per open event screen. On load it fetches the event
/// detail, timeline, teams, resources, and FAQ concurrently, each into its
/// own [`Section`] - a failing fetch scopes its error to that section only.
/// A student can then create a team (becoming its leader), request to join
/// an existing team, or apply solo; every mutation reloads the affected
/// collection rather than patching local state.
///
/// Role gating: only `student` sees the team actions; management roles are
/// pointed at the admin dashboard instead (see [`team_actions_visible`]).
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use campuslink_app::event_detail::EventDetailController;
/// use campuslink_client::ApiClient;
/// use campuslink_client::transport::HttpTransport;
/// use campuslink_shared::session::SessionStore;
/// use uuid::Uuid;
///
/// # async fn example(event_id: Uuid) -> campuslink_app::AppResult<()> {
/// let transport = HttpTransport::new(
///     "https://api.campuslink.app",
///     std::time::Duration::from_secs(15),
/// ).expect("http client");
/// let api = ApiClient::new(Arc::new(transport), SessionStore::new());
///
/// let screen = EventDetailController::new(api, event_id);
/// screen.load().await;
/// screen.create_team("Night Shift", "rust, design", Some(4)).await?;
/// # Ok(())
/// # }
/// ```

use std::sync::Mutex;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use validator::Validate;

use campuslink_client::events::{self, CreateTeamRequest, SoloApplication};
use campuslink_client::ApiClient;
use campuslink_shared::models::event::{Event, TimelineEntry};
use campuslink_shared::models::faq::Faq;
use campuslink_shared::models::resource::Resource;
use campuslink_shared::models::team::{parse_skills, Team};
use campuslink_shared::roles::Role;

use crate::error::{AppError, AppResult};
use crate::section::{ActionTracker, Section};

/// Whether the team action panel is shown for a role
///
/// `None` (role unresolved) hides the actions as well.
pub fn team_actions_visible(role: Option<Role>) -> bool {
    role.map(|r| r.can_form_teams()).unwrap_or(false)
}

/// Screen state for the event detail view
#[derive(Debug, Clone, Default)]
pub struct EventDetailState {
    /// The event itself
    pub detail: Section<Event>,

    /// Timeline entries
    pub timeline: Section<Vec<TimelineEntry>>,

    /// Teams open for browsing/joining
    pub teams: Section<Vec<Team>>,

    /// Shared resources
    pub resources: Section<Vec<Resource>>,

    /// FAQ entries
    pub faqs: Section<Vec<Faq>>,

    /// Whether the create-team modal is open
    pub team_modal_open: bool,

    /// Confirmation banner after a successful action
    pub confirmation: Option<String>,

    /// Whether a solo application is in flight
    pub solo_in_flight: bool,
}

/// Controller for one event detail screen
pub struct EventDetailController {
    api: ApiClient,
    event_id: Uuid,
    cancel: CancellationToken,
    state: Mutex<EventDetailState>,
    join_actions: ActionTracker,
}

impl EventDetailController {
    /// Creates a controller for the given event
    pub fn new(api: ApiClient, event_id: Uuid) -> Self {
        Self {
            api,
            event_id,
            cancel: CancellationToken::new(),
            state: Mutex::new(EventDetailState::default()),
            join_actions: ActionTracker::new(),
        }
    }

    /// The event this controller is bound to
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    /// Snapshot of the current screen state
    pub fn state(&self) -> EventDetailState {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// Tears the screen down; pending loads will not write state
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    /// Loads every section concurrently
    ///
    /// Section failures are independent: the teams list failing does not
    /// block the timeline, and each section offers its own retry by calling
    /// this (or the per-section reload) again.
    pub async fn load(&self) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.detail = Section::Loading;
            state.timeline = Section::Loading;
            state.teams = Section::Loading;
            state.resources = Section::Loading;
            state.faqs = Section::Loading;
        }

        let (detail, timeline, teams, resources, faqs) = tokio::join!(
            events::fetch_event_detail(&self.api, self.event_id),
            events::fetch_timeline(&self.api, self.event_id),
            events::fetch_teams(&self.api, self.event_id),
            events::fetch_resources(&self.api, self.event_id),
            events::fetch_faqs(&self.api, self.event_id),
        );

        if self.cancel.is_cancelled() {
            return;
        }

        let mut state = self.state.lock().expect("state lock poisoned");
        state.detail = Section::from_result(detail);
        state.timeline = Section::from_result(timeline);
        state.teams = Section::from_result(teams);
        state.resources = Section::from_result(resources);
        state.faqs = Section::from_result(faqs);
    }

    /// Reloads the team list only
    pub async fn reload_teams(&self) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.teams = Section::Loading;
        }

        let teams = events::fetch_teams(&self.api, self.event_id).await;

        if self.cancel.is_cancelled() {
            return;
        }

        let mut state = self.state.lock().expect("state lock poisoned");
        state.teams = Section::from_result(teams);
    }

    /// Opens the create-team modal
    pub fn open_team_modal(&self) {
        self.state.lock().expect("state lock poisoned").team_modal_open = true;
    }

    /// Closes the create-team modal
    pub fn close_team_modal(&self) {
        self.state.lock().expect("state lock poisoned").team_modal_open = false;
    }

    /// Creates a team from the modal inputs
    ///
    /// The trimmed name must be non-empty - an empty name fails validation
    /// before any request is issued. `required_skills` is a comma-separated
    /// string, parsed into a trimmed, empty-filtered, deduplicated list.
    /// On success the modal closes and the team list reloads; the creator
    /// becomes leader server-side.
    pub async fn create_team(
        &self,
        name: &str,
        skills_csv: &str,
        max_size: Option<u32>,
    ) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("name", "Team name is required"));
        }

        let payload = CreateTeamRequest {
            name: name.to_string(),
            required_skills: parse_skills(skills_csv),
            max_size,
        };
        payload
            .validate()
            .map_err(AppError::from_validation_errors)?;

        events::create_event_team(&self.api, self.event_id, &payload).await?;

        tracing::info!(event_id = %self.event_id, team_name = %payload.name, "team created");

        self.close_team_modal();
        self.reload_teams().await;
        Ok(())
    }

    /// Requests to join an existing team
    ///
    /// The target must be a team from the loaded list; fullness and locking
    /// are enforced server-side and a server rejection is surfaced without
    /// mutating the local team list. On success a confirmation banner is
    /// set and the team list reloads - the join request stays pending until
    /// an admin/leader acts on it, so membership is never assumed.
    pub async fn request_to_join_team(&self, team_id: Uuid) -> AppResult<()> {
        let known = {
            let state = self.state.lock().expect("state lock poisoned");
            state
                .teams
                .data()
                .map(|teams| teams.iter().any(|t| t.id == team_id))
                .unwrap_or(false)
        };
        if !known {
            return Err(AppError::validation("team", "Unknown team"));
        }

        let _guard = self
            .join_actions
            .try_begin(team_id)
            .ok_or(AppError::Busy { id: team_id })?;

        events::request_to_join_team(&self.api, self.event_id, team_id).await?;

        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.confirmation =
                Some("Join request sent. You'll be added once the team approves it.".to_string());
        }
        self.reload_teams().await;
        Ok(())
    }

    /// Whether a join request for this team is in flight
    pub fn is_join_in_flight(&self, team_id: Uuid) -> bool {
        self.join_actions.is_in_flight(team_id)
    }

    /// Registers the caller as a solo participant
    ///
    /// Not idempotent: a second submission creates a second registration
    /// unless the server rejects duplicates.
    pub async fn apply_solo(&self, payload: SoloApplication) -> AppResult<()> {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            if state.solo_in_flight {
                return Err(AppError::Busy { id: self.event_id });
            }
            state.solo_in_flight = true;
        }

        let result = events::apply_solo_to_event(&self.api, self.event_id, &payload).await;

        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.solo_in_flight = false;
            if result.is_ok() {
                state.confirmation = Some("You're registered as a solo participant.".to_string());
            }
        }

        result.map_err(Into::into)
    }

    /// Clears the confirmation banner
    pub fn dismiss_confirmation(&self) {
        self.state.lock().expect("state lock poisoned").confirmation = None;
    }
}
