use actix_web::{get, http::header, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::accounts::adapter::incoming::web::activity;
use crate::modules::accounts::application::domain::entities::ActivityAction;
use crate::modules::resume::application::domain::entities::{CvFormat, CvSection};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct CvQuery {
    pub format: Option<String>,
    /// Comma separated section names. Unknown names are ignored.
    pub sections: Option<String>,
}

fn parse_sections(raw: Option<&str>) -> Vec<CvSection> {
    raw.map(|value| {
        value
            .split(',')
            .filter_map(CvSection::parse)
            .collect::<Vec<_>>()
    })
    .unwrap_or_default()
}

/// Downloads the owner's curriculum as a PDF attachment. When no PDF
/// renderer is installed the response is a printable HTML page served
/// inline, so the browser renders it and its print button works.
#[utoipa::path(
    get,
    path = "/api/cv/download",
    tag = "cv",
    params(
        ("format" = Option<String>, Query, description = "modern | classic | minimal"),
        ("sections" = Option<String>, Query, description = "Comma separated section names")
    ),
    responses(
        (status = 200, description = "PDF document or printable HTML fallback")
    )
)]
#[get("/api/cv/download")]
pub async fn download_cv_handler(
    req: HttpRequest,
    query: web::Query<CvQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let format = CvFormat::parse_or_default(query.format.as_deref().unwrap_or(""));
    let sections = parse_sections(query.sections.as_deref());

    match data.resume.generate_cv.execute(format, sections).await {
        Ok(doc) => {
            activity::record_public(
                &data.accounts,
                &req,
                ActivityAction::Download,
                format!("Downloaded {}", doc.filename),
            )
            .await;

            let mut response = HttpResponse::Ok();
            response.insert_header((header::CONTENT_TYPE, doc.content_type));
            // The HTML fallback must render in the browser, not save to disk.
            if doc.content_type.starts_with("application/pdf") {
                response.insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", doc.filename),
                ));
            }
            response.body(doc.bytes)
        }
        Err(e) => {
            error!("CV generation failed: {:?}", e);
            ApiResponse::internal_error()
        }
    }
}
