use actix_web::{delete, get, post, put, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::service::application::ports::outgoing::{
    CreateServiceData, UpdateServiceData,
};
use crate::modules::service::application::use_cases::list_services::ListServicesError;
use crate::modules::service::application::use_cases::save_service::SaveServiceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ServiceRequest {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub delivery_time: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub process_steps: Vec<String>,
    pub starting_price: Option<Decimal>,
    #[serde(default)]
    pub price_unit: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub order: i32,
}

#[derive(Deserialize, ToSchema)]
pub struct PatchServiceRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub icon: Option<String>,
    pub delivery_time: Option<String>,
    pub features: Option<Vec<String>>,
    pub process_steps: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable_decimal")]
    pub starting_price: Option<Option<Decimal>>,
    pub price_unit: Option<String>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub order: Option<i32>,
}

fn default_true() -> bool {
    true
}

fn nullable_decimal<'de, D>(deserializer: D) -> Result<Option<Option<Decimal>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer).map(Some)
}

fn save_error_response(err: SaveServiceError) -> actix_web::HttpResponse {
    match err {
        SaveServiceError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "name must not be blank")
        }
        SaveServiceError::NegativePrice => {
            ApiResponse::bad_request("NEGATIVE_PRICE", "starting price must not be negative")
        }
        SaveServiceError::SlugTaken => {
            ApiResponse::conflict("SERVICE_SLUG_TAKEN", "a service with this slug already exists")
        }
        SaveServiceError::NotFound => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "service does not exist")
        }
        SaveServiceError::RepositoryError(msg) => {
            error!("Service save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Active services in display order.
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "service",
    responses((status = 200, description = "Active services in display order"))
)]
#[get("/api/services")]
pub async fn get_services_handler(data: web::Data<AppState>) -> impl Responder {
    match data.service.list_services.execute(true).await {
        Ok(items) => ApiResponse::success(items),
        Err(ListServicesError::RepositoryError(msg)) => {
            error!("Failed to list services: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/services/featured",
    tag = "service",
    responses((status = 200, description = "Active featured services"))
)]
#[get("/api/services/featured")]
pub async fn get_featured_services_handler(data: web::Data<AppState>) -> impl Responder {
    match data.service.featured_services.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(ListServicesError::RepositoryError(msg)) => {
            error!("Failed to list featured services: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/services")]
pub async fn get_admin_services_handler(data: web::Data<AppState>) -> impl Responder {
    match data.service.list_services.execute(false).await {
        Ok(items) => ApiResponse::success(items),
        Err(ListServicesError::RepositoryError(msg)) => {
            error!("Failed to list services: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/services")]
pub async fn create_service_handler(
    body: web::Json<ServiceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let create = CreateServiceData {
        name: req.name,
        slug: req.slug,
        description: req.description,
        short_description: req.short_description,
        icon: req.icon,
        delivery_time: req.delivery_time,
        features: req.features,
        process_steps: req.process_steps,
        starting_price: req.starting_price,
        price_unit: req.price_unit,
        is_active: req.is_active,
        is_featured: req.is_featured,
        order: req.order,
    };

    match data.service.create_service.execute(create).await {
        Ok(item) => ApiResponse::created(item),
        Err(err) => save_error_response(err),
    }
}

#[put("/api/admin/services/{id}")]
pub async fn update_service_handler(
    path: web::Path<Uuid>,
    body: web::Json<PatchServiceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let update = UpdateServiceData {
        name: req.name,
        slug: req.slug,
        description: req.description,
        short_description: req.short_description,
        icon: req.icon,
        delivery_time: req.delivery_time,
        features: req.features,
        process_steps: req.process_steps,
        starting_price: req.starting_price,
        price_unit: req.price_unit,
        is_active: req.is_active,
        is_featured: req.is_featured,
        order: req.order,
    };

    match data
        .service
        .update_service
        .execute(path.into_inner(), update)
        .await
    {
        Ok(item) => ApiResponse::success(item),
        Err(err) => save_error_response(err),
    }
}

#[delete("/api/admin/services/{id}")]
pub async fn delete_service_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.service.delete_service.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(SaveServiceError::NotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "service does not exist")
        }
        Err(err) => {
            error!("Service delete failed: {:?}", err);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn creates_service_with_derived_slug() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(create_service_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/services")
            .set_json(json!({
                "name": "Backend Development",
                "features": ["REST APIs", "Data modelling"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["slug"], "backend-development");
        assert_eq!(body["data"]["is_active"], true);
    }

    #[actix_web::test]
    async fn create_rejects_negative_price() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(create_service_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/services")
            .set_json(json!({"name": "Consulting", "starting_price": "-50"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NEGATIVE_PRICE");
    }
}
