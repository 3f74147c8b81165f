use actix_web::{delete, get, post, put, web, Responder};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::journey::application::domain::entities::{EntryType, JourneyEntry};
use crate::modules::journey::application::ports::outgoing::{
    CreateJourneyData, JourneyFilter, UpdateJourneyData,
};
use crate::modules::journey::application::use_cases::delete_journey::DeleteJourneyError;
use crate::modules::journey::application::use_cases::list_journey::ListJourneyError;
use crate::modules::journey::application::use_cases::save_journey::SaveJourneyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Timeline entry as served to clients, with the derived duration label.
#[derive(Serialize, ToSchema)]
pub struct JourneyEntryDto {
    pub id: Uuid,
    pub entry_type: EntryType,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub duration: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<JourneyEntry> for JourneyEntryDto {
    fn from(entry: JourneyEntry) -> Self {
        let duration = entry.duration();
        Self {
            id: entry.id,
            entry_type: entry.entry_type,
            title: entry.title,
            organization: entry.organization,
            location: entry.location,
            start_date: entry.start_date,
            end_date: entry.end_date,
            is_current: entry.is_current,
            duration,
            description: entry.description,
            achievements: entry.achievements,
            technologies: entry.technologies,
            is_active: entry.is_active,
            order: entry.order,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

#[derive(Deserialize)]
pub struct JourneyQuery {
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct JourneyEntryRequest {
    pub entry_type: EntryType,
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

#[derive(Deserialize, ToSchema)]
pub struct PatchJourneyEntryRequest {
    pub entry_type: Option<EntryType>,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable_date")]
    pub end_date: Option<Option<NaiveDate>>,
    pub is_current: Option<bool>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

fn default_true() -> bool {
    true
}

/// Distinguishes an absent `end_date` (leave as is) from an explicit
/// `null` (clear it).
fn nullable_date<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}

fn save_error_response(err: SaveJourneyError) -> actix_web::HttpResponse {
    match err {
        SaveJourneyError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "entry title must not be blank")
        }
        SaveJourneyError::EmptyOrganization => {
            ApiResponse::bad_request("EMPTY_ORGANIZATION", "organization must not be blank")
        }
        SaveJourneyError::EndBeforeStart => {
            ApiResponse::bad_request("END_BEFORE_START", "end date precedes start date")
        }
        SaveJourneyError::NotFound => {
            ApiResponse::not_found("JOURNEY_NOT_FOUND", "journey entry does not exist")
        }
        SaveJourneyError::RepositoryError(msg) => {
            error!("Journey save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

async fn list_entries(
    data: &web::Data<AppState>,
    query: &JourneyQuery,
    only_active: bool,
) -> actix_web::HttpResponse {
    let entry_type = match query.entry_type.as_deref() {
        None | Some("") | Some("all") => None,
        Some(raw) => match EntryType::parse(raw) {
            Some(t) => Some(t),
            None => {
                return ApiResponse::bad_request(
                    "INVALID_ENTRY_TYPE",
                    "type must be one of work, education, certification, achievement",
                );
            }
        },
    };

    match data
        .journey
        .list_journey
        .execute(JourneyFilter {
            entry_type,
            only_active,
        })
        .await
    {
        Ok(entries) => ApiResponse::success(
            entries
                .into_iter()
                .map(JourneyEntryDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListJourneyError::RepositoryError(msg)) => {
            error!("Failed to list journey entries: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Public timeline: newest first, active entries only.
#[utoipa::path(
    get,
    path = "/api/journey",
    tag = "journey",
    params(("type" = Option<String>, Query, description = "Filter by entry type")),
    responses((status = 200, description = "Journey entries, newest first"))
)]
#[get("/api/journey")]
pub async fn get_journey_handler(
    query: web::Query<JourneyQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list_entries(&data, &query, true).await
}

#[get("/api/admin/journey")]
pub async fn get_admin_journey_handler(
    query: web::Query<JourneyQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    list_entries(&data, &query, false).await
}

#[post("/api/admin/journey")]
pub async fn create_journey_handler(
    body: web::Json<JourneyEntryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let create = CreateJourneyData {
        entry_type: req.entry_type,
        title: req.title,
        organization: req.organization,
        location: req.location,
        start_date: req.start_date,
        end_date: req.end_date,
        is_current: req.is_current,
        description: req.description,
        achievements: req.achievements,
        technologies: req.technologies,
        is_active: req.is_active,
        order: req.order,
    };

    match data.journey.create_journey.execute(create).await {
        Ok(entry) => ApiResponse::created(JourneyEntryDto::from(entry)),
        Err(err) => save_error_response(err),
    }
}

#[put("/api/admin/journey/{id}")]
pub async fn update_journey_handler(
    path: web::Path<Uuid>,
    body: web::Json<PatchJourneyEntryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let update = UpdateJourneyData {
        entry_type: req.entry_type,
        title: req.title,
        organization: req.organization,
        location: req.location,
        start_date: req.start_date,
        end_date: req.end_date,
        is_current: req.is_current,
        description: req.description,
        achievements: req.achievements,
        technologies: req.technologies,
        is_active: req.is_active,
        order: req.order,
    };

    match data
        .journey
        .update_journey
        .execute(path.into_inner(), update)
        .await
    {
        Ok(entry) => ApiResponse::success(JourneyEntryDto::from(entry)),
        Err(err) => save_error_response(err),
    }
}

#[delete("/api/admin/journey/{id}")]
pub async fn delete_journey_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .journey
        .delete_journey
        .execute(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteJourneyError::NotFound) => {
            ApiResponse::not_found("JOURNEY_NOT_FOUND", "journey entry does not exist")
        }
        Err(DeleteJourneyError::RepositoryError(msg)) => {
            error!("Journey delete failed: {}", msg);
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
    async fn rejects_unknown_entry_type_filter() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(get_journey_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/journey?type=hobby")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_ENTRY_TYPE");
    }

    #[actix_web::test]
    async fn created_entry_carries_duration_label() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(create_journey_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/journey")
            .set_json(json!({
                "entry_type": "work",
                "title": "Platform Engineer",
                "organization": "Acme",
                "start_date": "2020-01-01",
                "end_date": "2021-01-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["duration"], "1 year");
    }

    #[actix_web::test]
    async fn create_rejects_inverted_dates() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(create_journey_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/journey")
            .set_json(json!({
                "entry_type": "education",
                "title": "BSc",
                "organization": "University",
                "start_date": "2020-01-01",
                "end_date": "2016-01-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "END_BEFORE_START");
    }
}
