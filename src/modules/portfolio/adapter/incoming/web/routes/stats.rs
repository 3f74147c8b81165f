use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::portfolio::application::use_cases::get_stats::GetStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "portfolio",
    responses((status = 200, description = "Aggregate content counts"))
)]
#[get("/api/stats")]
pub async fn get_stats_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(GetStatsError::RepositoryError(msg)) => {
            error!("Failed to compute stats: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
