use actix_web::{http::header, post, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::accounts::application::use_cases::login_user::{LoginError, LoginInput};
use crate::modules::accounts::application::use_cases::logout_user::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LogoutRequest {
    pub session_key: String,
}

fn client_ip(req: &HttpRequest) -> Option<String> {
    req.connection_info()
        .realip_remote_addr()
        .map(|ip| ip.to_string())
}

fn client_user_agent(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

#[post("/api/auth/login")]
pub async fn login_handler(
    req: HttpRequest,
    body: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = body.into_inner();
    let input = LoginInput {
        username: payload.username,
        password: payload.password,
        ip_address: client_ip(&req),
        user_agent: client_user_agent(&req),
    };

    match data.accounts.login.execute(input).await {
        Ok(session) => ApiResponse::created(session),
        Err(LoginError::InvalidCredentials) => {
            ApiResponse::bad_request("INVALID_CREDENTIALS", "username or password is wrong")
        }
        Err(LoginError::RepositoryError(msg)) => {
            error!("Login failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/auth/logout")]
pub async fn logout_handler(
    body: web::Json<LogoutRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .accounts
        .logout
        .execute(&body.into_inner().session_key)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(LogoutError::SessionNotFound) => {
            ApiResponse::not_found("SESSION_NOT_FOUND", "session does not exist")
        }
        Err(LogoutError::RepositoryError(msg)) => {
            error!("Logout failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
