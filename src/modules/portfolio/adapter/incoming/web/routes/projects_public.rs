use actix_web::{get, web, HttpRequest, Responder};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::{
    CategoryRef, Project, ProjectStatus, ProjectType, TechnologyRef,
};
use crate::modules::portfolio::application::ports::outgoing::ProjectFilter;
use crate::modules::portfolio::application::use_cases::get_public_project::GetProjectError;
use crate::modules::accounts::adapter::incoming::web::activity;
use crate::modules::accounts::application::domain::entities::ActivityAction;
use crate::modules::portfolio::application::use_cases::list_projects::ListProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Project as served to clients, with `duration_months` derived.
#[derive(Serialize, ToSchema)]
pub struct ProjectDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub detailed_description: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub category: Option<CategoryRef>,
    pub technologies: Vec<TechnologyRef>,
    pub featured_image: String,
    pub gallery: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub documentation_url: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub duration_months: Option<i32>,
    pub client: String,
    pub team_size: i16,
    pub key_features: Vec<String>,
    pub challenges: String,
    pub solutions: String,
    pub results: String,
    pub meta_title: String,
    pub meta_description: String,
    pub is_featured: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        let duration_months = project.duration_months();
        Self {
            id: project.id,
            title: project.title,
            slug: project.slug,
            description: project.description,
            detailed_description: project.detailed_description,
            project_type: project.project_type,
            status: project.status,
            category: project.category,
            technologies: project.technologies,
            featured_image: project.featured_image,
            gallery: project.gallery,
            live_url: project.live_url,
            github_url: project.github_url,
            documentation_url: project.documentation_url,
            start_date: project.start_date,
            end_date: project.end_date,
            duration_months,
            client: project.client,
            team_size: project.team_size,
            key_features: project.key_features,
            challenges: project.challenges,
            solutions: project.solutions,
            results: project.results,
            meta_title: project.meta_title,
            meta_description: project.meta_description,
            is_featured: project.is_featured,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

pub fn to_dtos(projects: Vec<Project>) -> Vec<ProjectDto> {
    projects.into_iter().map(ProjectDto::from).collect()
}

#[derive(Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
    pub technology: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
}

pub fn parse_filter(query: &ProjectQuery) -> Result<ProjectFilter, actix_web::HttpResponse> {
    let project_type = match query.project_type.as_deref() {
        None | Some("") | Some("all") => None,
        Some(raw) => match ProjectType::parse(raw) {
            Some(t) => Some(t),
            None => {
                return Err(ApiResponse::bad_request(
                    "INVALID_PROJECT_TYPE",
                    "unknown project type",
                ));
            }
        },
    };

    Ok(ProjectFilter {
        category_slug: query.category.clone().filter(|s| !s.is_empty()),
        technology_slug: query.technology.clone().filter(|s| !s.is_empty()),
        project_type,
        statuses: None,
    })
}

/// Published and featured projects, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "portfolio",
    params(
        ("category" = Option<String>, Query, description = "Category slug"),
        ("technology" = Option<String>, Query, description = "Technology slug"),
        ("type" = Option<String>, Query, description = "Project type")
    ),
    responses((status = 200, description = "Visible projects, newest first"))
)]
#[get("/api/projects")]
pub async fn get_public_projects_handler(
    query: web::Query<ProjectQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match parse_filter(&query) {
        Ok(f) => f,
        Err(resp) => return resp,
    };

    match data.portfolio.list_public_projects.execute(filter).await {
        Ok(projects) => ApiResponse::success(to_dtos(projects)),
        Err(ListProjectsError::RepositoryError(msg)) => {
            error!("Failed to list public projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "portfolio",
    responses((status = 200, description = "Six most recent featured projects"))
)]
#[get("/api/projects/featured")]
pub async fn get_featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_featured_projects.execute().await {
        Ok(projects) => ApiResponse::success(to_dtos(projects)),
        Err(GetProjectError::NotFound) => ApiResponse::success(Vec::<ProjectDto>::new()),
        Err(GetProjectError::RepositoryError(msg)) => {
            error!("Failed to list featured projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    tag = "portfolio",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project detail"),
        (status = 404, description = "Unknown or hidden project")
    )
)]
#[get("/api/projects/{slug}")]
pub async fn get_public_project_handler(
    req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();
    match data.portfolio.get_public_project.execute(&slug).await {
        Ok(project) => {
            activity::record_public(
                &data.accounts,
                &req,
                ActivityAction::ProjectView,
                format!("Viewed project {slug}"),
            )
            .await;
            ApiResponse::success(ProjectDto::from(project))
        }
        Err(GetProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "project does not exist")
        }
        Err(GetProjectError::RepositoryError(msg)) => {
            error!("Failed to fetch project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
