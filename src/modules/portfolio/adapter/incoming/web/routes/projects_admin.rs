use actix_web::{delete, get, post, put, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::projects_public::{parse_filter, to_dtos, ProjectDto, ProjectQuery};
use crate::modules::portfolio::application::domain::entities::{ProjectStatus, ProjectType};
use crate::modules::portfolio::application::ports::outgoing::{
    CreateProjectData, UpdateProjectData,
};
use crate::modules::portfolio::application::use_cases::list_projects::ListProjectsError;
use crate::modules::portfolio::application::use_cases::save_project::SaveProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ProjectRequest {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detailed_description: String,
    pub project_type: ProjectType,
    #[serde(default = "default_status")]
    pub status: ProjectStatus,
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub technology_ids: Vec<Uuid>,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub documentation_url: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub client: String,
    #[serde(default = "default_team_size")]
    pub team_size: i16,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub challenges: String,
    #[serde(default)]
    pub solutions: String,
    #[serde(default)]
    pub results: String,
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct PatchProjectRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub project_type: Option<ProjectType>,
    pub status: Option<ProjectStatus>,
    #[serde(default, deserialize_with = "nullable_uuid")]
    pub category_id: Option<Option<Uuid>>,
    pub technology_ids: Option<Vec<Uuid>>,
    pub featured_image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub documentation_url: Option<String>,
    #[serde(default, deserialize_with = "nullable_date")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "nullable_date")]
    pub end_date: Option<Option<NaiveDate>>,
    pub client: Option<String>,
    pub team_size: Option<i16>,
    pub key_features: Option<Vec<String>>,
    pub challenges: Option<String>,
    pub solutions: Option<String>,
    pub results: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_featured: Option<bool>,
}

fn default_status() -> ProjectStatus {
    ProjectStatus::Draft
}

fn default_team_size() -> i16 {
    1
}

fn nullable_uuid<'de, D>(deserializer: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Uuid>::deserialize(deserializer).map(Some)
}

fn nullable_date<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}

fn save_error_response(err: SaveProjectError) -> actix_web::HttpResponse {
    match err {
        SaveProjectError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "project title must not be blank")
        }
        SaveProjectError::EndBeforeStart => {
            ApiResponse::bad_request("END_BEFORE_START", "end date precedes start date")
        }
        SaveProjectError::InvalidTeamSize(value) => ApiResponse::bad_request(
            "INVALID_TEAM_SIZE",
            &format!("team size {value} must be at least 1"),
        ),
        SaveProjectError::SlugTaken => {
            ApiResponse::conflict("PROJECT_SLUG_TAKEN", "a project with this slug already exists")
        }
        SaveProjectError::MissingReference(what) => {
            ApiResponse::bad_request("MISSING_REFERENCE", &format!("{what} does not exist"))
        }
        SaveProjectError::NotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "project does not exist")
        }
        SaveProjectError::RepositoryError(msg) => {
            error!("Project save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/projects")]
pub async fn get_admin_projects_handler(
    query: web::Query<ProjectQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match parse_filter(&query) {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match data.portfolio.list_projects.execute(filter).await {
        Ok(projects) => ApiResponse::success(to_dtos(projects)),
        Err(ListProjectsError::RepositoryError(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    body: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let create = CreateProjectData {
        title: req.title,
        slug: req.slug,
        description: req.description,
        detailed_description: req.detailed_description,
        project_type: req.project_type,
        status: req.status,
        category_id: req.category_id,
        technology_ids: req.technology_ids,
        featured_image: req.featured_image,
        gallery: req.gallery,
        live_url: req.live_url,
        github_url: req.github_url,
        documentation_url: req.documentation_url,
        start_date: req.start_date,
        end_date: req.end_date,
        client: req.client,
        team_size: req.team_size,
        key_features: req.key_features,
        challenges: req.challenges,
        solutions: req.solutions,
        results: req.results,
        meta_title: req.meta_title,
        meta_description: req.meta_description,
        is_featured: req.is_featured,
    };

    match data.portfolio.create_project.execute(create).await {
        Ok(project) => ApiResponse::created(ProjectDto::from(project)),
        Err(err) => save_error_response(err),
    }
}

#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    path: web::Path<Uuid>,
    body: web::Json<PatchProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let update = UpdateProjectData {
        title: req.title,
        slug: req.slug,
        description: req.description,
        detailed_description: req.detailed_description,
        project_type: req.project_type,
        status: req.status,
        category_id: req.category_id,
        technology_ids: req.technology_ids,
        featured_image: req.featured_image,
        gallery: req.gallery,
        live_url: req.live_url,
        github_url: req.github_url,
        documentation_url: req.documentation_url,
        start_date: req.start_date,
        end_date: req.end_date,
        client: req.client,
        team_size: req.team_size,
        key_features: req.key_features,
        challenges: req.challenges,
        solutions: req.solutions,
        results: req.results,
        meta_title: req.meta_title,
        meta_description: req.meta_description,
        is_featured: req.is_featured,
    };

    match data
        .portfolio
        .update_project
        .execute(path.into_inner(), update)
        .await
    {
        Ok(project) => ApiResponse::success(ProjectDto::from(project)),
        Err(err) => save_error_response(err),
    }
}

#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .portfolio
        .delete_project
        .execute(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(SaveProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "project does not exist")
        }
        Err(err) => {
            error!("Project delete failed: {:?}", err);
            ApiResponse::internal_error()
        }
    }
}
