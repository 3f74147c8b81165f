use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::journey::application::ports::outgoing::{CreateFaqData, UpdateFaqData};
use crate::modules::journey::application::use_cases::list_faqs::ListFaqsError;
use crate::modules::journey::application::use_cases::save_faq::SaveFaqError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct FaqRequest {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct PatchFaqRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

fn save_error_response(err: SaveFaqError) -> actix_web::HttpResponse {
    match err {
        SaveFaqError::EmptyQuestion => {
            ApiResponse::bad_request("EMPTY_QUESTION", "question must not be blank")
        }
        SaveFaqError::EmptyAnswer => {
            ApiResponse::bad_request("EMPTY_ANSWER", "answer must not be blank")
        }
        SaveFaqError::NotFound => ApiResponse::not_found("FAQ_NOT_FOUND", "faq does not exist"),
        SaveFaqError::RepositoryError(msg) => {
            error!("Faq save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/faqs",
    tag = "journey",
    responses((status = 200, description = "Active FAQ items in display order"))
)]
#[get("/api/faqs")]
pub async fn get_faqs_handler(data: web::Data<AppState>) -> impl Responder {
    match data.journey.list_faqs.execute(true).await {
        Ok(items) => ApiResponse::success(items),
        Err(ListFaqsError::RepositoryError(msg)) => {
            error!("Failed to list faqs: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/faqs")]
pub async fn get_admin_faqs_handler(data: web::Data<AppState>) -> impl Responder {
    match data.journey.list_faqs.execute(false).await {
        Ok(items) => ApiResponse::success(items),
        Err(ListFaqsError::RepositoryError(msg)) => {
            error!("Failed to list faqs: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/faqs")]
pub async fn create_faq_handler(
    body: web::Json<FaqRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let create = CreateFaqData {
        question: req.question,
        answer: req.answer,
        order: req.order,
        is_active: req.is_active,
    };

    match data.journey.create_faq.execute(create).await {
        Ok(item) => ApiResponse::created(item),
        Err(err) => save_error_response(err),
    }
}

#[put("/api/admin/faqs/{id}")]
pub async fn update_faq_handler(
    path: web::Path<Uuid>,
    body: web::Json<PatchFaqRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let update = UpdateFaqData {
        question: req.question,
        answer: req.answer,
        order: req.order,
        is_active: req.is_active,
    };

    match data
        .journey
        .update_faq
        .execute(path.into_inner(), update)
        .await
    {
        Ok(item) => ApiResponse::success(item),
        Err(err) => save_error_response(err),
    }
}

#[delete("/api/admin/faqs/{id}")]
pub async fn delete_faq_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.journey.delete_faq.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(SaveFaqError::NotFound) => {
            ApiResponse::not_found("FAQ_NOT_FOUND", "faq does not exist")
        }
        Err(err) => {
            error!("Faq delete failed: {:?}", err);
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
    async fn creates_faq_item() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(create_faq_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/faqs")
            .set_json(json!({
                "question": "What is your stack?",
                "answer": "Mostly Rust and Postgres."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["question"], "What is your stack?");
    }

    #[actix_web::test]
    async fn create_rejects_blank_question() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(create_faq_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/faqs")
            .set_json(json!({"question": " ", "answer": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EMPTY_QUESTION");
    }
}
