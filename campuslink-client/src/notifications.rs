/// Notification endpoints (read surface only - delivery is external)
///
/// # Endpoints
///
/// - `GET /api/notifications/me` - the caller's stored notifications

use campuslink_shared::models::notification::Notification;

use crate::client::{ApiClient, Query};
use crate::error::ApiResult;

/// Lists the caller's notifications
pub async fn my_notifications(api: &ApiClient) -> ApiResult<Vec<Notification>> {
    api.get_list("/api/notifications/me", Query::new()).await
}
