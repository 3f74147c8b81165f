use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::UpdateCategoryData;
use crate::modules::portfolio::application::use_cases::list_categories::ListCategoriesError;
use crate::modules::portfolio::application::use_cases::save_category::{
    CreateCategoryInput, SaveCategoryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Deserialize, ToSchema)]
pub struct PatchCategoryRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

fn save_error_response(err: SaveCategoryError) -> actix_web::HttpResponse {
    match err {
        SaveCategoryError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "category name must not be blank")
        }
        SaveCategoryError::InvalidColor(value) => ApiResponse::bad_request(
            "INVALID_COLOR",
            &format!("'{value}' is not a #rrggbb color"),
        ),
        SaveCategoryError::NameTaken => ApiResponse::conflict(
            "CATEGORY_NAME_TAKEN",
            "a category with this name or slug already exists",
        ),
        SaveCategoryError::NotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "category does not exist")
        }
        SaveCategoryError::RepositoryError(msg) => {
            error!("Category save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "portfolio",
    responses((status = 200, description = "All project categories"))
)]
#[get("/api/categories")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.list_categories.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(ListCategoriesError::RepositoryError(msg)) => {
            error!("Failed to list categories: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/categories")]
pub async fn create_category_handler(
    body: web::Json<CategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let input = CreateCategoryInput {
        name: req.name,
        slug: req.slug,
        description: req.description,
        color: req.color,
        icon: req.icon,
    };

    match data.portfolio.create_category.execute(input).await {
        Ok(category) => ApiResponse::created(category),
        Err(err) => save_error_response(err),
    }
}

#[put("/api/admin/categories/{id}")]
pub async fn update_category_handler(
    path: web::Path<Uuid>,
    body: web::Json<PatchCategoryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let update = UpdateCategoryData {
        name: req.name,
        slug: req.slug,
        description: req.description,
        color: req.color,
        icon: req.icon,
    };

    match data
        .portfolio
        .update_category
        .execute(path.into_inner(), update)
        .await
    {
        Ok(category) => ApiResponse::success(category),
        Err(err) => save_error_response(err),
    }
}

#[delete("/api/admin/categories/{id}")]
pub async fn delete_category_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .portfolio
        .delete_category
        .execute(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(SaveCategoryError::NotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "category does not exist")
        }
        Err(err) => {
            error!("Category delete failed: {:?}", err);
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
    async fn create_category_derives_slug() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(create_category_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/categories")
            .set_json(json!({"name": "Machine Learning"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["slug"], "machine-learning");
    }

    #[actix_web::test]
    async fn create_category_rejects_bad_color() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(create_category_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/categories")
            .set_json(json!({"name": "Web", "color": "red"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_COLOR");
    }
}
