use actix_web::{delete, get, http::header, post, put, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::accounts::adapter::incoming::web::activity;
use crate::modules::accounts::application::domain::entities::ActivityAction;
use crate::modules::contact::application::domain::entities::MessageStatus;
use crate::modules::contact::application::ports::outgoing::CreateMessageData;
use crate::modules::contact::application::use_cases::manage_messages::ManageMessagesError;
use crate::modules::contact::application::use_cases::submit_message::SubmitMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    pub service_interest_id: Option<Uuid>,
}

#[derive(Deserialize, ToSchema)]
pub struct StatusRequest {
    pub status: MessageStatus,
}

#[derive(Deserialize)]
pub struct MessageQuery {
    pub status: Option<String>,
}

fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

fn client_user_agent(req: &HttpRequest) -> String {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Public contact submission. Captures the caller's IP and User-Agent.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message accepted"),
        (status = 400, description = "Validation failure"),
        (status = 403, description = "Contact form disabled")
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: HttpRequest,
    body: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ip_address = client_ip(&req);
    let user_agent = client_user_agent(&req);
    let payload = body.into_inner();

    let create = CreateMessageData {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        company: payload.company,
        subject: payload.subject,
        message: payload.message,
        service_interest_id: payload.service_interest_id,
        ip_address,
        user_agent,
    };

    match data.contact.submit_message.execute(create).await {
        Ok(message) => {
            activity::record_public(
                &data.accounts,
                &req,
                ActivityAction::ContactForm,
                format!("Contact message from {}", message.email),
            )
            .await;
            ApiResponse::created(message)
        }
        Err(SubmitMessageError::ContactFormDisabled) => {
            ApiResponse::forbidden("CONTACT_FORM_DISABLED", "the contact form is disabled")
        }
        Err(SubmitMessageError::EmptyName) => {
            ApiResponse::bad_request("EMPTY_NAME", "name must not be blank")
        }
        Err(SubmitMessageError::EmptyMessage) => {
            ApiResponse::bad_request("EMPTY_MESSAGE", "message must not be blank")
        }
        Err(SubmitMessageError::InvalidEmail) => {
            ApiResponse::bad_request("INVALID_EMAIL", "email is not a valid address")
        }
        Err(SubmitMessageError::MissingReference(what)) => {
            ApiResponse::bad_request("MISSING_REFERENCE", &format!("{what} does not exist"))
        }
        Err(SubmitMessageError::RepositoryError(msg)) => {
            error!("Contact submission failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/contact-messages")]
pub async fn get_messages_handler(
    query: web::Query<MessageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let status = match query.status.as_deref() {
        None | Some("") | Some("all") => None,
        Some(raw) => match MessageStatus::parse(raw) {
            Some(s) => Some(s),
            None => {
                return ApiResponse::bad_request("INVALID_STATUS", "unknown message status");
            }
        },
    };

    match data.contact.list_messages.execute(status).await {
        Ok(messages) => ApiResponse::success(messages),
        Err(ManageMessagesError::NotFound) => ApiResponse::success(Vec::<()>::new()),
        Err(ManageMessagesError::RepositoryError(msg)) => {
            error!("Failed to list contact messages: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/contact-messages/{id}")]
pub async fn get_message_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.get_message.execute(path.into_inner()).await {
        Ok(message) => ApiResponse::success(message),
        Err(ManageMessagesError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "contact message does not exist")
        }
        Err(ManageMessagesError::RepositoryError(msg)) => {
            error!("Failed to fetch contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/contact-messages/{id}/status")]
pub async fn update_message_status_handler(
    path: web::Path<Uuid>,
    body: web::Json<StatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .contact
        .update_message_status
        .execute(path.into_inner(), body.into_inner().status)
        .await
    {
        Ok(message) => ApiResponse::success(message),
        Err(ManageMessagesError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "contact message does not exist")
        }
        Err(ManageMessagesError::RepositoryError(msg)) => {
            error!("Failed to update contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/contact-messages/{id}")]
pub async fn delete_message_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.delete_message.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(ManageMessagesError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "contact message does not exist")
        }
        Err(ManageMessagesError::RepositoryError(msg)) => {
            error!("Failed to delete contact message: {}", msg);
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
    async fn accepts_submission_and_captures_user_agent() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(submit_contact_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .insert_header((header::USER_AGENT, "integration-test/1.0"))
            .set_json(json!({
                "name": "Jordan Reyes",
                "email": "jordan@example.com",
                "message": "Let's build something."
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "new");
        assert_eq!(body["data"]["user_agent"], "integration-test/1.0");
    }

    #[actix_web::test]
    async fn rejects_malformed_email() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(submit_contact_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({"name": "A", "email": "nope", "message": "hi"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_EMAIL");
    }

    #[actix_web::test]
    async fn rejects_unknown_status_filter() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(get_messages_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/contact-messages?status=bogus")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
