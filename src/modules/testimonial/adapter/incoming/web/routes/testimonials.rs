use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::testimonial::application::ports::outgoing::{
    CreateTestimonialData, UpdateTestimonialData,
};
use crate::modules::testimonial::application::use_cases::list_testimonials::ListTestimonialsError;
use crate::modules::testimonial::application::use_cases::save_testimonial::SaveTestimonialError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct TestimonialRequest {
    pub client_name: String,
    #[serde(default)]
    pub client_position: String,
    #[serde(default)]
    pub client_company: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub client_photo: String,
    pub content: String,
    #[serde(default = "default_rating")]
    pub rating: i16,
    pub project_id: Option<Uuid>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_approved: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct PatchTestimonialRequest {
    pub client_name: Option<String>,
    pub client_position: Option<String>,
    pub client_company: Option<String>,
    pub client_email: Option<String>,
    pub client_photo: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i16>,
    #[serde(default, deserialize_with = "nullable_uuid")]
    pub project_id: Option<Option<Uuid>>,
    pub is_featured: Option<bool>,
    pub is_approved: Option<bool>,
}

fn default_rating() -> i16 {
    5
}

fn nullable_uuid<'de, D>(deserializer: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Uuid>::deserialize(deserializer).map(Some)
}

fn save_error_response(err: SaveTestimonialError) -> actix_web::HttpResponse {
    match err {
        SaveTestimonialError::EmptyClientName => {
            ApiResponse::bad_request("EMPTY_CLIENT_NAME", "client name must not be blank")
        }
        SaveTestimonialError::EmptyContent => {
            ApiResponse::bad_request("EMPTY_CONTENT", "content must not be blank")
        }
        SaveTestimonialError::InvalidRating => {
            ApiResponse::bad_request("INVALID_RATING", "rating must be between 1 and 5")
        }
        SaveTestimonialError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "client email is not a valid address")
        }
        SaveTestimonialError::MissingReference(what) => {
            ApiResponse::bad_request("MISSING_REFERENCE", &format!("{what} does not exist"))
        }
        SaveTestimonialError::NotFound => {
            ApiResponse::not_found("TESTIMONIAL_NOT_FOUND", "testimonial does not exist")
        }
        SaveTestimonialError::RepositoryError(msg) => {
            error!("Testimonial save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Approved testimonials, featured first.
#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = "testimonial",
    responses((status = 200, description = "Approved testimonials, featured first"))
)]
#[get("/api/testimonials")]
pub async fn get_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    match data.testimonial.list_testimonials.execute(true).await {
        Ok(items) => ApiResponse::success(items),
        Err(ListTestimonialsError::RepositoryError(msg)) => {
            error!("Failed to list testimonials: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/testimonials")]
pub async fn get_admin_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    match data.testimonial.list_testimonials.execute(false).await {
        Ok(items) => ApiResponse::success(items),
        Err(ListTestimonialsError::RepositoryError(msg)) => {
            error!("Failed to list testimonials: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/testimonials")]
pub async fn create_testimonial_handler(
    body: web::Json<TestimonialRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let create = CreateTestimonialData {
        client_name: req.client_name,
        client_position: req.client_position,
        client_company: req.client_company,
        client_email: req.client_email,
        client_photo: req.client_photo,
        content: req.content,
        rating: req.rating,
        project_id: req.project_id,
        is_featured: req.is_featured,
        is_approved: req.is_approved,
    };

    match data.testimonial.create_testimonial.execute(create).await {
        Ok(item) => ApiResponse::created(item),
        Err(err) => save_error_response(err),
    }
}

#[put("/api/admin/testimonials/{id}")]
pub async fn update_testimonial_handler(
    path: web::Path<Uuid>,
    body: web::Json<PatchTestimonialRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let update = UpdateTestimonialData {
        client_name: req.client_name,
        client_position: req.client_position,
        client_company: req.client_company,
        client_email: req.client_email,
        client_photo: req.client_photo,
        content: req.content,
        rating: req.rating,
        project_id: req.project_id,
        is_featured: req.is_featured,
        is_approved: req.is_approved,
    };

    match data
        .testimonial
        .update_testimonial
        .execute(path.into_inner(), update)
        .await
    {
        Ok(item) => ApiResponse::success(item),
        Err(err) => save_error_response(err),
    }
}

#[delete("/api/admin/testimonials/{id}")]
pub async fn delete_testimonial_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .testimonial
        .delete_testimonial
        .execute(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(SaveTestimonialError::NotFound) => {
            ApiResponse::not_found("TESTIMONIAL_NOT_FOUND", "testimonial does not exist")
        }
        Err(err) => {
            error!("Testimonial delete failed: {:?}", err);
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
    async fn creates_testimonial() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(create_testimonial_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/testimonials")
            .set_json(json!({
                "client_name": "Ana Silva",
                "content": "Delivered ahead of schedule.",
                "rating": 5
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["client_name"], "Ana Silva");
        assert_eq!(body["data"]["rating"], 5);
    }

    #[actix_web::test]
    async fn create_rejects_bad_rating() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(create_testimonial_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/testimonials")
            .set_json(json!({
                "client_name": "Ana",
                "content": "x",
                "rating": 11
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_RATING");
    }
}
