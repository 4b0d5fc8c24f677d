/// Home feed workflow
///
/// Posts load into a single section; comments load per-post. Mutations
/// reload the affected collection except likes, which patch the one post
/// in place from the server's returned like state - two rapid toggles are
/// not sequenced, so the last resolved response wins, exactly like the
/// source system.
///
/// Like, collaborate, and apply flows are the only places that raise
/// toasts; everything else surfaces errors in its own section.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;
use uuid::Uuid;
use validator::Validate;

use campuslink_client::feed::{self, CreatePostRequest};
use campuslink_client::{comments, likes, ApiClient};
use campuslink_shared::models::comment::Comment;
use campuslink_shared::models::post::{Post, PostType};

use crate::error::{AppError, AppResult};
use crate::notify::NotificationCenter;
use crate::section::Section;

/// Screen state for the feed
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    /// The post list, under the current filter
    pub posts: Section<Vec<Post>>,

    /// Active post-type filter (empty = all)
    pub filter: Vec<PostType>,

    /// Comments per expanded post
    pub comments: HashMap<Uuid, Section<Vec<Comment>>>,
}

/// Controller for the home feed
pub struct FeedController {
    api: ApiClient,
    notify: Arc<NotificationCenter>,
    cancel: CancellationToken,
    state: Mutex<FeedState>,
}

impl FeedController {
    pub fn new(api: ApiClient, notify: Arc<NotificationCenter>) -> Self {
        Self {
            api,
            notify,
            cancel: CancellationToken::new(),
            state: Mutex::new(FeedState::default()),
        }
    }

    /// Snapshot of the current screen state
    pub fn state(&self) -> FeedState {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// Tears the screen down; pending loads will not write state
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    /// Loads the feed under the given post-type filter
    pub async fn load(&self, filter: Vec<PostType>) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.posts = Section::Loading;
            state.filter = filter.clone();
        }

        let posts = feed::list_posts(&self.api, &filter).await;

        if self.cancel.is_cancelled() {
            return;
        }

        self.state.lock().expect("state lock poisoned").posts = Section::from_result(posts);
    }

    /// Reloads the feed under the current filter
    pub async fn reload(&self) {
        let filter = {
            self.state
                .lock()
                .expect("state lock poisoned")
                .filter
                .clone()
        };
        self.load(filter).await;
    }

    /// Creates a post and reloads the feed
    pub async fn create_post(&self, payload: CreatePostRequest) -> AppResult<()> {
        payload
            .validate()
            .map_err(AppError::from_validation_errors)?;

        feed::create_post(&self.api, &payload).await?;
        self.reload().await;
        Ok(())
    }

    /// Deletes a post (ownership enforced server-side) and reloads
    pub async fn delete_post(&self, post_id: Uuid) -> AppResult<()> {
        feed::delete_post(&self.api, post_id).await?;
        self.reload().await;
        Ok(())
    }

    /// Toggles the current user's like on a post
    ///
    /// The post is patched in place from the server's returned like state.
    /// Calls are not sequenced: whichever response resolves last determines
    /// the displayed count and liked flag.
    pub async fn toggle_like(&self, post_id: Uuid) -> AppResult<()> {
        match likes::toggle_like(&self.api, post_id).await {
            Ok(info) => {
                let mut state = self.state.lock().expect("state lock poisoned");
                if let Section::Ready(posts) = &mut state.posts {
                    if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
                        post.like_count = info.like_count;
                        post.liked_by_me = info.is_liked;
                    }
                }
                Ok(())
            }
            Err(err) => {
                self.notify.error(err.user_message());
                Err(err.into())
            }
        }
    }

    /// Requests to collaborate on a post
    pub async fn request_collaboration(&self, post_id: Uuid) -> AppResult<()> {
        match feed::request_collaboration(&self.api, post_id).await {
            Ok(()) => {
                self.notify.success("Collaboration request sent");
                Ok(())
            }
            Err(err) => {
                self.notify.error(err.user_message());
                Err(err.into())
            }
        }
    }

    /// Loads the comments for a post into its own slot
    pub async fn load_comments(&self, post_id: Uuid) {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            state.comments.insert(post_id, Section::Loading);
        }

        let result = comments::list_comments(&self.api, post_id).await;

        if self.cancel.is_cancelled() {
            return;
        }

        self.state
            .lock()
            .expect("state lock poisoned")
            .comments
            .insert(post_id, Section::from_result(result));
    }

    /// Adds a comment and reloads that post's comment list
    pub async fn add_comment(&self, post_id: Uuid, body: &str) -> AppResult<()> {
        let body = body.trim();
        if body.is_empty() {
            return Err(AppError::validation("comment", "Comment cannot be empty"));
        }

        comments::add_comment(&self.api, post_id, body).await?;
        self.load_comments(post_id).await;
        Ok(())
    }
}
