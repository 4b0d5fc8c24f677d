/// Integration tests for the feed, hire, and session workflows
///
/// Covers like toggling (last resolved response wins), toast raising on the
/// like/collaborate/apply flows, role resolution hard failures, debounced
/// internship search, and the startup reapply window.

mod common;

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use campuslink_app::feed::FeedController;
use campuslink_app::hire::HireController;
use campuslink_app::notify::{NotificationCenter, ToastKind};
use campuslink_app::roles::RoleResolver;
use campuslink_app::session;
use campuslink_app::AppError;
use campuslink_client::startups::RegisterStartupRequest;
use campuslink_shared::roles::Role;
use common::TestContext;

fn feed_controller(ctx: &TestContext) -> (FeedController, Arc<NotificationCenter>) {
    let notify = Arc::new(NotificationCenter::new());
    (FeedController::new(ctx.api.clone(), notify.clone()), notify)
}

fn hire_controller(ctx: &TestContext) -> (HireController, Arc<NotificationCenter>) {
    let notify = Arc::new(NotificationCenter::new());
    (HireController::new(ctx.api.clone(), notify.clone()), notify)
}

#[tokio::test]
async fn test_rapid_like_toggles_last_response_wins() {
    let ctx = TestContext::new();
    let post_id = Uuid::new_v4();
    ctx.mock.push_json(json!([common::post_json(post_id, 11, false)]));

    let (feed, _notify) = feed_controller(&ctx);
    feed.load(vec![]).await;

    // Two toggles in quick succession; no sequencing is applied, so the
    // displayed state must equal whichever response resolved last
    ctx.mock.push_json(json!({"like_count": 12, "is_liked": true}));
    ctx.mock.push_json(json!({"like_count": 11, "is_liked": false}));

    feed.toggle_like(post_id).await.unwrap();
    feed.toggle_like(post_id).await.unwrap();

    let state = feed.state();
    let post = &state.posts.data().unwrap()[0];
    assert_eq!(post.like_count, 11);
    assert!(!post.liked_by_me);
}

#[tokio::test]
async fn test_like_failure_raises_error_toast() {
    let ctx = TestContext::new();
    let post_id = Uuid::new_v4();
    ctx.mock.push_json(json!([common::post_json(post_id, 3, false)]));

    let (feed, notify) = feed_controller(&ctx);
    feed.load(vec![]).await;

    ctx.mock
        .push_status(429, br#"{"message":"Slow down"}"#.to_vec());
    feed.toggle_like(post_id).await.unwrap_err();

    let toasts = notify.active();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts[0].message, "Slow down");

    // The post keeps its last known like state
    assert_eq!(feed.state().posts.data().unwrap()[0].like_count, 3);
}

#[tokio::test]
async fn test_collaboration_request_raises_success_toast() {
    let ctx = TestContext::new();
    ctx.mock.push_json(json!({}));

    let (feed, notify) = feed_controller(&ctx);
    feed.request_collaboration(Uuid::new_v4()).await.unwrap();

    let toasts = notify.active();
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].message, "Collaboration request sent");
}

#[tokio::test]
async fn test_create_post_reloads_feed() {
    let ctx = TestContext::new();
    let post_id = Uuid::new_v4();
    // Creation response, then the reloaded feed containing the new post
    ctx.mock.push_json(common::post_json(post_id, 0, false));
    ctx.mock.push_json(json!([common::post_json(post_id, 0, false)]));

    let (feed, _notify) = feed_controller(&ctx);
    feed.create_post(campuslink_client::feed::CreatePostRequest {
        title: "Mess-menu tracker".to_string(),
        description: "Scrapes the mess menu into a widget".to_string(),
        post_type: campuslink_shared::models::post::PostType::Project,
        stage: None,
        required_skills: vec!["flutter".to_string()],
    })
    .await
    .unwrap();

    assert_eq!(feed.state().posts.data().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_comment_reloads_that_posts_comments() {
    let ctx = TestContext::new();
    let post_id = Uuid::new_v4();
    ctx.mock.push_json(json!({
        "id": Uuid::new_v4(),
        "post_id": post_id,
        "author_id": Uuid::new_v4(),
        "author_name": "Priya",
        "body": "Love this",
        "created_at": "2025-01-04T12:00:00Z"
    }));
    ctx.mock.push_json(json!([{
        "id": Uuid::new_v4(),
        "post_id": post_id,
        "author_id": Uuid::new_v4(),
        "author_name": "Priya",
        "body": "Love this",
        "created_at": "2025-01-04T12:00:00Z"
    }]));

    let (feed, _notify) = feed_controller(&ctx);
    feed.add_comment(post_id, " Love this ").await.unwrap();

    let state = feed.state();
    let comments = state.comments.get(&post_id).unwrap().data().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].body, "Love this");

    // The issued comment body was trimmed
    let add_request = &ctx.mock.requests()[0];
    assert_eq!(add_request.body, Some(json!({"body": "Love this"})));
}

#[tokio::test]
async fn test_empty_comment_issues_no_request() {
    let ctx = TestContext::new();
    let (feed, _notify) = feed_controller(&ctx);

    let err = feed.add_comment(Uuid::new_v4(), "   ").await.unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
    assert_eq!(ctx.mock.request_count(), 0);
}

#[tokio::test]
async fn test_role_resolution_missing_role_is_hard_failure() {
    let ctx = TestContext::new();
    // /users/me answers without a role field
    ctx.mock.push_json(json!({
        "id": Uuid::new_v4(),
        "email": "priya@college.edu",
        "name": "Priya"
    }));

    let resolver = RoleResolver::new(ctx.api.clone());
    resolver.resolve().await.unwrap_err();

    let state = resolver.state();
    assert!(state.role.is_none(), "no safe default role");
    assert!(state.error.is_some(), "error surfaced");

    // An explicit refresh after the glitch recovers
    ctx.mock.push_json(common::profile_json("student"));
    resolver.refresh_role().await.unwrap();
    assert_eq!(resolver.role(), Some(Role::Student));
}

#[tokio::test]
async fn test_session_sign_in_resolves_role_and_sign_out_clears() {
    let ctx = TestContext::new();
    ctx.mock.push_json(common::profile_json("organizer"));

    let (manager, roles) = session::build_session(ctx.api.clone());

    let profile = manager.sign_in("fresh-token".to_string()).await.unwrap();
    assert_eq!(profile.role, Role::Organizer);
    assert_eq!(roles.role(), Some(Role::Organizer));
    assert_eq!(
        ctx.mock.last_request().unwrap().bearer.as_deref(),
        Some("fresh-token"),
        "resolution used the new token"
    );

    manager.sign_out();
    assert!(manager.store().token().is_none());
    assert!(roles.role().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_debounced_search_coalesces_keystrokes() {
    let ctx = TestContext::new();
    ctx.mock.push_json(json!([]));

    let (hire, _notify) = hire_controller(&ctx);
    let hire = Arc::new(hire);

    // First keystroke starts waiting out the debounce interval
    let first = {
        let hire = hire.clone();
        tokio::spawn(async move { hire.search("ru").await })
    };
    tokio::task::yield_now().await;

    // Second keystroke supersedes it before the interval elapses
    hire.search("rust").await.unwrap();
    first.await.unwrap().unwrap();

    let searches: Vec<_> = ctx
        .mock
        .requests()
        .into_iter()
        .filter(|r| r.path == "/api/internships")
        .collect();
    assert_eq!(searches.len(), 1, "rapid keystrokes coalesce to one fetch");
    assert_eq!(
        searches[0].query,
        vec![("q".to_string(), "rust".to_string())]
    );
}

#[tokio::test]
async fn test_apply_toasts_and_reloads_applications() {
    let ctx = TestContext::new();
    let internship_id = Uuid::new_v4();

    ctx.mock.push_json(json!({}));
    ctx.mock
        .push_json(json!([common::application_json(internship_id, "Applied")]));

    let (hire, notify) = hire_controller(&ctx);
    hire.apply(internship_id).await.unwrap();

    assert_eq!(notify.active()[0].message, "Application submitted");
    let state = hire.state();
    let applications = state.my_applications.data().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].status.as_str(), "Applied");
}

#[tokio::test]
async fn test_startup_reapply_window_blocks_early_reregistration() {
    let ctx = TestContext::new();
    // listings, my_startup (rejected, window far in the future), applications
    ctx.mock.push_json(json!([]));
    ctx.mock
        .push_json(common::startup_json("REJECTED", Some("2099-01-01T00:00:00Z")));
    ctx.mock.push_json(json!([]));

    let (hire, _notify) = hire_controller(&ctx);
    hire.load().await;
    let requests = ctx.mock.request_count();

    let err = hire
        .register_startup(RegisterStartupRequest {
            name: "MessMate".to_string(),
            problem: "Campus food discovery".to_string(),
            domain: "foodtech".to_string(),
            stage: "MVP".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation { .. }));
    assert_eq!(ctx.mock.request_count(), requests, "no request issued");
}

#[tokio::test]
async fn test_startup_reapply_allowed_after_window() {
    let ctx = TestContext::new();
    ctx.mock.push_json(json!([]));
    ctx.mock
        .push_json(common::startup_json("REJECTED", Some("2020-01-01T00:00:00Z")));
    ctx.mock.push_json(json!([]));

    let (hire, _notify) = hire_controller(&ctx);
    hire.load().await;

    ctx.mock.push_json(common::startup_json("PENDING", None));
    hire.register_startup(RegisterStartupRequest {
        name: "MessMate".to_string(),
        problem: "Campus food discovery".to_string(),
        domain: "foodtech".to_string(),
        stage: "MVP".to_string(),
    })
    .await
    .unwrap();

    let state = hire.state();
    let startup = state.my_startup.data().unwrap().as_ref().unwrap();
    assert_eq!(startup.status.as_str(), "PENDING");
}

#[tokio::test]
async fn test_application_review_reloads_job_applications() {
    let ctx = TestContext::new();
    let job_id = Uuid::new_v4();

    ctx.mock
        .push_json(json!([common::application_json(job_id, "Applied")]));

    let (hire, _notify) = hire_controller(&ctx);
    hire.load_applications(job_id).await;

    // Shortlist succeeds; the job's application list reloads
    ctx.mock.push_json(json!({}));
    ctx.mock
        .push_json(json!([common::application_json(job_id, "Shortlisted")]));

    let state = hire.state();
    let application_id = state.applications_by_job[&job_id].data().unwrap()[0].id;
    hire.update_application_status(
        job_id,
        application_id,
        campuslink_shared::models::job::ApplicationStatus::Shortlisted,
    )
    .await
    .unwrap();

    let state = hire.state();
    assert_eq!(
        state.applications_by_job[&job_id].data().unwrap()[0]
            .status
            .as_str(),
        "Shortlisted"
    );
}

#[tokio::test]
async fn test_become_admin_refreshes_role_and_profile() {
    let ctx = TestContext::new();
    // request-admin, role refresh, profile reload
    ctx.mock.push_json(json!({}));
    ctx.mock.push_json(common::profile_json("admin"));
    ctx.mock.push_json(common::profile_json("admin"));

    let resolver = Arc::new(campuslink_app::roles::RoleResolver::new(ctx.api.clone()));
    let profile = campuslink_app::profile::ProfileController::new(ctx.api.clone(), resolver.clone());

    profile.become_admin().await.unwrap();

    assert_eq!(resolver.role(), Some(Role::Admin));
    assert_eq!(
        profile.state().me.data().unwrap().role,
        Role::Admin,
        "profile reloaded with the new role"
    );
}

#[tokio::test]
async fn test_job_posting_requires_approved_startup() {
    let ctx = TestContext::new();
    ctx.mock.push_json(json!([]));
    ctx.mock.push_json(common::startup_json("PENDING", None));
    ctx.mock.push_json(json!([]));

    let (hire, _notify) = hire_controller(&ctx);
    hire.load().await;

    let err = hire
        .create_job(campuslink_client::hire::CreateJobRequest {
            role_title: "Backend Intern".to_string(),
            description: "APIs".to_string(),
            job_type: "Internship".to_string(),
            location: None,
            stipend: None,
            duration: None,
            application_deadline: None,
            external_link: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation { .. }));
}
