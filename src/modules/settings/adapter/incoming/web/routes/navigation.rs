use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::settings::application::ports::outgoing::{
    CreateNavigationData, UpdateNavigationData,
};
use crate::modules::settings::application::use_cases::delete_navigation::DeleteNavigationError;
use crate::modules::settings::application::use_cases::list_navigation::ListNavigationError;
use crate::modules::settings::application::use_cases::save_navigation::SaveNavigationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct NavigationItemRequest {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_external: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct PatchNavigationRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
    pub is_external: Option<bool>,
}

fn default_true() -> bool {
    true
}

fn save_error_response(err: SaveNavigationError) -> actix_web::HttpResponse {
    match err {
        SaveNavigationError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "menu title must not be blank")
        }
        SaveNavigationError::EmptyUrl => {
            ApiResponse::bad_request("EMPTY_URL", "menu url must not be blank")
        }
        SaveNavigationError::NotFound => {
            ApiResponse::not_found("NAVIGATION_NOT_FOUND", "navigation item does not exist")
        }
        SaveNavigationError::RepositoryError(msg) => {
            error!("Navigation save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Public menu: active items only, in display order.
#[utoipa::path(
    get,
    path = "/api/navigation",
    tag = "settings",
    responses((status = 200, description = "Active navigation items"))
)]
#[get("/api/navigation")]
pub async fn get_navigation_handler(data: web::Data<AppState>) -> impl Responder {
    match data.settings.list_navigation.execute(true).await {
        Ok(items) => ApiResponse::success(items),
        Err(ListNavigationError::RepositoryError(msg)) => {
            error!("Failed to list navigation: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/navigation")]
pub async fn get_admin_navigation_handler(data: web::Data<AppState>) -> impl Responder {
    match data.settings.list_navigation.execute(false).await {
        Ok(items) => ApiResponse::success(items),
        Err(ListNavigationError::RepositoryError(msg)) => {
            error!("Failed to list navigation: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/navigation")]
pub async fn create_navigation_handler(
    body: web::Json<NavigationItemRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let create = CreateNavigationData {
        title: req.title,
        url: req.url,
        icon: req.icon,
        order: req.order,
        is_active: req.is_active,
        is_external: req.is_external,
    };

    match data.settings.create_navigation.execute(create).await {
        Ok(item) => ApiResponse::created(item),
        Err(err) => save_error_response(err),
    }
}

#[put("/api/admin/navigation/{id}")]
pub async fn update_navigation_handler(
    path: web::Path<Uuid>,
    body: web::Json<PatchNavigationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let update = UpdateNavigationData {
        title: req.title,
        url: req.url,
        icon: req.icon,
        order: req.order,
        is_active: req.is_active,
        is_external: req.is_external,
    };

    match data
        .settings
        .update_navigation
        .execute(path.into_inner(), update)
        .await
    {
        Ok(item) => ApiResponse::success(item),
        Err(err) => save_error_response(err),
    }
}

#[delete("/api/admin/navigation/{id}")]
pub async fn delete_navigation_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .settings
        .delete_navigation
        .execute(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteNavigationError::NotFound) => {
            ApiResponse::not_found("NAVIGATION_NOT_FOUND", "navigation item does not exist")
        }
        Err(DeleteNavigationError::RepositoryError(msg)) => {
            error!("Navigation delete failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/navigation/{id}/toggle")]
pub async fn toggle_navigation_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .settings
        .toggle_navigation
        .execute(path.into_inner())
        .await
    {
        Ok(is_active) => ApiResponse::success(json!({ "is_active": is_active })),
        Err(DeleteNavigationError::NotFound) => {
            ApiResponse::not_found("NAVIGATION_NOT_FOUND", "navigation item does not exist")
        }
        Err(DeleteNavigationError::RepositoryError(msg)) => {
            error!("Navigation toggle failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
