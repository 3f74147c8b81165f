//! Activity hooks shared by handlers in other modules. Public traffic
//! lands in the activity log, admin requests refresh their session.

use actix_web::{http::header, HttpRequest};
use tracing::warn;

use crate::modules::accounts::application::domain::entities::ActivityAction;
use crate::modules::accounts::application::ports::outgoing::tracking_repository::RecordActivityData;
use crate::modules::accounts::application::AccountsUseCases;

/// Session key header set by the admin frontend on authenticated calls.
pub const SESSION_KEY_HEADER: &str = "X-Session-Key";

fn header_string(req: &HttpRequest, name: header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Records an anonymous activity entry for a public request. Failures
/// are logged, never surfaced to the caller.
pub async fn record_public(
    accounts: &AccountsUseCases,
    req: &HttpRequest,
    action: ActivityAction,
    description: String,
) {
    let data = RecordActivityData {
        user_id: None,
        action,
        description: Some(description),
        metadata: serde_json::json!({}),
        ip_address: req
            .connection_info()
            .realip_remote_addr()
            .map(str::to_string),
        user_agent: header_string(req, header::USER_AGENT),
        referer: header_string(req, header::REFERER),
    };
    if let Err(e) = accounts.record_activity.execute(data).await {
        warn!("Failed to record activity: {:?}", e);
    }
}

/// Bumps the session's last-activity timestamp when the request carries
/// a session key. Requests without one pass through untouched.
pub async fn touch_session(accounts: &AccountsUseCases, req: &HttpRequest) {
    let key = req
        .headers()
        .get(SESSION_KEY_HEADER)
        .and_then(|v| v.to_str().ok());
    if let Some(key) = key {
        if let Err(e) = accounts.touch_session.execute(key).await {
            warn!("Failed to refresh session {}: {:?}", key, e);
        }
    }
}
