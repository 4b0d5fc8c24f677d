/// Hire board workflow: internship search, applications, startup registry
///
/// The search box is debounced (~300ms): rapid keystrokes coalesce into a
/// single fetch and a superseded wait never issues its request. Applying
/// and review actions are guarded per entity id; apply raises toasts via
/// the notification center.
///
/// Posting jobs requires an approved startup; the registration flow here
/// also enforces the reapply window a rejection carries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use validator::Validate;

use campuslink_client::hire::{self, CreateJobRequest};
use campuslink_client::startups::{self, RegisterStartupRequest};
use campuslink_client::{internships, ApiClient};
use campuslink_shared::models::job::{Application, ApplicationStatus, Job};
use campuslink_shared::models::startup::Startup;

use crate::debounce::Debouncer;
use crate::error::{AppError, AppResult};
use crate::notify::NotificationCenter;
use crate::section::{ActionTracker, Section};

/// Screen state for the hire board
#[derive(Debug, Clone, Default)]
pub struct HireState {
    /// Internship listings under the current search
    pub listings: Section<Vec<Job>>,

    /// Current search text
    pub query: String,

    /// The caller's own applications
    pub my_applications: Section<Vec<Application>>,

    /// The caller's startup, if any
    pub my_startup: Section<Option<Startup>>,

    /// Applications per job, for posting owners
    pub applications_by_job: HashMap<Uuid, Section<Vec<Application>>>,
}

/// Controller for the hire board
pub struct HireController {
    api: ApiClient,
    notify: Arc<NotificationCenter>,
    cancel: CancellationToken,
    state: Mutex<HireState>,
    search_debounce: Debouncer,
    apply_actions: ActionTracker,
    review_actions: ActionTracker,
}

impl HireController {
    pub fn new(api: ApiClient, notify: Arc<NotificationCenter>) -> Self {
        Self {
            api,
            notify,
            cancel: CancellationToken::new(),
            state: Mutex::new(HireState::default()),
            search_debounce: Debouncer::default(),
            apply_actions: ActionTracker::new(),
            review_actions: ActionTracker::new(),
        }
    }

    /// Snapshot of the current screen state
    pub fn state(&self) -> HireState {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// Tears the screen down; pending loads will not write state
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    /// Loads the listing and the caller's startup/applications
    pub async fn load(&self) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.listings = Section::Loading;
            state.my_startup = Section::Loading;
            state.my_applications = Section::Loading;
        }

        let (listings, startup, applications) = tokio::join!(
            internships::search_internships(&self.api, None, &[]),
            startups::my_startup(&self.api),
            internships::my_applications(&self.api),
        );

        if self.cancel.is_cancelled() {
            return;
        }

        let mut state = self.state.lock().expect("state lock poisoned");
        state.listings = Section::from_result(listings);
        state.my_startup = Section::from_result(startup);
        state.my_applications = Section::from_result(applications);
    }

    /// Debounced search over internships
    ///
    /// Each keystroke calls this; only the latest caller survives the
    /// debounce interval and issues a request.
    pub async fn search(&self, query: &str) -> AppResult<()> {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.query = query.to_string();
        }

        if !self.search_debounce.wait().await {
            // Superseded by a newer keystroke
            return Ok(());
        }
        if self.cancel.is_cancelled() {
            return Ok(());
        }

        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.listings = Section::Loading;
        }

        let q = if query.trim().is_empty() {
            None
        } else {
            Some(query.trim())
        };
        let listings = internships::search_internships(&self.api, q, &[]).await;

        if self.cancel.is_cancelled() {
            return Ok(());
        }

        self.state.lock().expect("state lock poisoned").listings =
            Section::from_result(listings);
        Ok(())
    }

    /// Whether an application for this listing is in flight
    pub fn is_apply_in_flight(&self, internship_id: Uuid) -> bool {
        self.apply_actions.is_in_flight(internship_id)
    }

    /// Applies to an internship
    ///
    /// The application starts at `Applied`; the caller's application list
    /// reloads on success and a toast is raised.
    pub async fn apply(&self, internship_id: Uuid) -> AppResult<()> {
        let _guard = self
            .apply_actions
            .try_begin(internship_id)
            .ok_or(AppError::Busy { id: internship_id })?;

        match internships::apply_to_internship(&self.api, internship_id).await {
            Ok(()) => {
                self.notify.success("Application submitted");
            }
            Err(err) => {
                self.notify.error(err.user_message());
                return Err(err.into());
            }
        }

        let applications = internships::my_applications(&self.api).await;
        if self.cancel.is_cancelled() {
            return Ok(());
        }
        self.state
            .lock()
            .expect("state lock poisoned")
            .my_applications = Section::from_result(applications);
        Ok(())
    }

    /// Registers (or re-registers) the caller's startup
    ///
    /// Blocked client-side while a registration is pending or approved,
    /// and during the reapply window after a rejection.
    pub async fn register_startup(&self, payload: RegisterStartupRequest) -> AppResult<()> {
        payload
            .validate()
            .map_err(AppError::from_validation_errors)?;

        let existing = {
            let state = self.state.lock().expect("state lock poisoned");
            state.my_startup.data().cloned().flatten()
        };
        if let Some(startup) = existing {
            match startup.status {
                campuslink_shared::models::startup::StartupStatus::Pending => {
                    return Err(AppError::validation(
                        "startup",
                        "Your startup is already under review",
                    ));
                }
                campuslink_shared::models::startup::StartupStatus::Approved => {
                    return Err(AppError::validation(
                        "startup",
                        "You already have an approved startup",
                    ));
                }
                campuslink_shared::models::startup::StartupStatus::Rejected => {
                    if !startup.can_reapply_at(Utc::now()) {
                        return Err(AppError::validation(
                            "startup",
                            "You can reapply once the waiting period ends",
                        ));
                    }
                }
            }
        }

        let startup = startups::register_startup(&self.api, &payload).await?;

        if self.cancel.is_cancelled() {
            return Ok(());
        }
        self.state.lock().expect("state lock poisoned").my_startup =
            Section::Ready(Some(startup));
        Ok(())
    }

    /// Creates a job posting; requires an approved startup
    pub async fn create_job(&self, payload: CreateJobRequest) -> AppResult<()> {
        payload
            .validate()
            .map_err(AppError::from_validation_errors)?;

        let approved = {
            let state = self.state.lock().expect("state lock poisoned");
            state
                .my_startup
                .data()
                .and_then(|s| s.as_ref())
                .map(Startup::can_post_jobs)
                .unwrap_or(false)
        };
        if !approved {
            return Err(AppError::validation(
                "startup",
                "Only approved startups can post jobs",
            ));
        }

        hire::create_job(&self.api, &payload).await?;
        Ok(())
    }

    /// Loads applications to one job (posting owner)
    pub async fn load_applications(&self, job_id: Uuid) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.applications_by_job.insert(job_id, Section::Loading);
        }

        let result = hire::list_applications(&self.api, job_id).await;

        if self.cancel.is_cancelled() {
            return;
        }

        self.state
            .lock()
            .expect("state lock poisoned")
            .applications_by_job
            .insert(job_id, Section::from_result(result));
    }

    /// Moves an application to a new review status and reloads that job's
    /// application list
    pub async fn update_application_status(
        &self,
        job_id: Uuid,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> AppResult<()> {
        let _guard = self
            .review_actions
            .try_begin(application_id)
            .ok_or(AppError::Busy { id: application_id })?;

        hire::update_application_status(&self.api, application_id, status).await?;
        self.load_applications(job_id).await;
        Ok(())
    }
}
