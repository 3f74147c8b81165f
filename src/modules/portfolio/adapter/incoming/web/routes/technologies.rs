use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::UpdateTechnologyData;
use crate::modules::portfolio::application::use_cases::list_technologies::ListTechnologiesError;
use crate::modules::portfolio::application::use_cases::save_technology::{
    CreateTechnologyInput, SaveTechnologyError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct TechnologyRequest {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub proficiency: i16,
    #[serde(default)]
    pub years_experience: i16,
}

#[derive(Deserialize, ToSchema)]
pub struct PatchTechnologyRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub website_url: Option<String>,
    pub proficiency: Option<i16>,
    pub years_experience: Option<i16>,
}

fn save_error_response(err: SaveTechnologyError) -> actix_web::HttpResponse {
    match err {
        SaveTechnologyError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "technology name must not be blank")
        }
        SaveTechnologyError::InvalidProficiency(value) => ApiResponse::bad_request(
            "INVALID_PROFICIENCY",
            &format!("proficiency {value} is outside 0..=100"),
        ),
        SaveTechnologyError::NameTaken => ApiResponse::conflict(
            "TECHNOLOGY_NAME_TAKEN",
            "a technology with this name or slug already exists",
        ),
        SaveTechnologyError::NotFound => {
            ApiResponse::not_found("TECHNOLOGY_NOT_FOUND", "technology does not exist")
        }
        SaveTechnologyError::RepositoryError(msg) => {
            error!("Technology save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/technologies",
    tag = "portfolio",
    responses((status = 200, description = "All technologies, strongest first"))
)]
#[get("/api/technologies")]
pub async fn get_technologies_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.list_technologies.execute().await {
        Ok(technologies) => ApiResponse::success(technologies),
        Err(ListTechnologiesError::RepositoryError(msg)) => {
            error!("Failed to list technologies: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Proficiency 70 and up, top ten.
#[utoipa::path(
    get,
    path = "/api/technologies/top-skills",
    tag = "portfolio",
    responses((status = 200, description = "Strongest technologies"))
)]
#[get("/api/technologies/top-skills")]
pub async fn get_top_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.top_skills.execute().await {
        Ok(technologies) => ApiResponse::success(technologies),
        Err(ListTechnologiesError::RepositoryError(msg)) => {
            error!("Failed to list top skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/technologies")]
pub async fn create_technology_handler(
    body: web::Json<TechnologyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let input = CreateTechnologyInput {
        name: req.name,
        slug: req.slug,
        description: req.description,
        icon: req.icon,
        website_url: req.website_url,
        proficiency: req.proficiency,
        years_experience: req.years_experience,
    };

    match data.portfolio.create_technology.execute(input).await {
        Ok(technology) => ApiResponse::created(technology),
        Err(err) => save_error_response(err),
    }
}

#[put("/api/admin/technologies/{id}")]
pub async fn update_technology_handler(
    path: web::Path<Uuid>,
    body: web::Json<PatchTechnologyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let update = UpdateTechnologyData {
        name: req.name,
        slug: req.slug,
        description: req.description,
        icon: req.icon,
        website_url: req.website_url,
        proficiency: req.proficiency,
        years_experience: req.years_experience,
    };

    match data
        .portfolio
        .update_technology
        .execute(path.into_inner(), update)
        .await
    {
        Ok(technology) => ApiResponse::success(technology),
        Err(err) => save_error_response(err),
    }
}

#[delete("/api/admin/technologies/{id}")]
pub async fn delete_technology_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .portfolio
        .delete_technology
        .execute(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(SaveTechnologyError::NotFound) => {
            ApiResponse::not_found("TECHNOLOGY_NOT_FOUND", "technology does not exist")
        }
        Err(err) => {
            error!("Technology delete failed: {:?}", err);
            ApiResponse::internal_error()
        }
    }
}
