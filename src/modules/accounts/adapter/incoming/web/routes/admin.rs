use actix_web::{get, put, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::accounts::adapter::incoming::web::activity;
use crate::modules::accounts::application::ports::outgoing::profile_repository::UpdateProfileData;
use crate::modules::accounts::application::use_cases::manage_profile::ManageProfileError;
use crate::modules::accounts::application::use_cases::track_activity::TrackActivityError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ProfileRequest {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub profile_image: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub experience_years: Option<i16>,
    pub email_notifications: Option<bool>,
    pub activity_alerts: Option<bool>,
}

#[derive(Deserialize)]
pub struct ActivityQuery {
    pub limit: Option<u64>,
}

fn profile_error_response(err: ManageProfileError) -> actix_web::HttpResponse {
    match err {
        ManageProfileError::NotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "profile does not exist")
        }
        ManageProfileError::NegativeExperience => {
            ApiResponse::bad_request("NEGATIVE_EXPERIENCE", "experience_years must be >= 0")
        }
        ManageProfileError::RepositoryError(msg) => {
            error!("Profile operation failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/profile/{user_id}")]
pub async fn get_profile_handler(
    req: HttpRequest,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    activity::touch_session(&data.accounts, &req).await;
    match data.accounts.get_profile.execute(path.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(err) => profile_error_response(err),
    }
}

#[put("/api/admin/profile/{user_id}")]
pub async fn update_profile_handler(
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<ProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    activity::touch_session(&data.accounts, &req).await;
    let payload = body.into_inner();
    let update = UpdateProfileData {
        bio: payload.bio,
        location: payload.location,
        website: payload.website,
        profile_image: payload.profile_image,
        github_url: payload.github_url,
        linkedin_url: payload.linkedin_url,
        twitter_url: payload.twitter_url,
        job_title: payload.job_title,
        company: payload.company,
        experience_years: payload.experience_years,
        email_notifications: payload.email_notifications,
        activity_alerts: payload.activity_alerts,
    };

    match data
        .accounts
        .update_profile
        .execute(path.into_inner(), update)
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(err) => profile_error_response(err),
    }
}

#[get("/api/admin/activity")]
pub async fn get_recent_activity_handler(
    req: HttpRequest,
    query: web::Query<ActivityQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    activity::touch_session(&data.accounts, &req).await;
    match data.accounts.recent_activity.execute(query.limit).await {
        Ok(activities) => ApiResponse::success(activities),
        Err(TrackActivityError::SessionNotFound) => ApiResponse::success(Vec::<()>::new()),
        Err(TrackActivityError::RepositoryError(msg)) => {
            error!("Failed to list activity: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/sessions/{user_id}")]
pub async fn get_sessions_handler(
    req: HttpRequest,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    activity::touch_session(&data.accounts, &req).await;
    match data.accounts.list_sessions.execute(path.into_inner()).await {
        Ok(sessions) => ApiResponse::success(sessions),
        Err(TrackActivityError::SessionNotFound) => ApiResponse::success(Vec::<()>::new()),
        Err(TrackActivityError::RepositoryError(msg)) => {
            error!("Failed to list sessions: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
