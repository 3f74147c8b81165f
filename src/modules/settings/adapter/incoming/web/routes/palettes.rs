use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::settings::application::domain::entities::PaletteColors;
use crate::modules::settings::application::ports::outgoing::UpdatePaletteData;
use crate::modules::settings::application::use_cases::list_palettes::ListPalettesError;
use crate::modules::settings::application::use_cases::save_palette::{
    CreatePaletteInput, SavePaletteError,
};
use crate::modules::settings::application::use_cases::set_default_palette::SetDefaultPaletteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, Clone, ToSchema)]
pub struct PaletteColorsDto {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl From<PaletteColorsDto> for PaletteColors {
    fn from(dto: PaletteColorsDto) -> Self {
        Self {
            primary: dto.primary,
            secondary: dto.secondary,
            accent: dto.accent,
            background: dto.background,
            text: dto.text,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreatePaletteRequest {
    pub name: String,
    pub light: PaletteColorsDto,
    pub dark: PaletteColorsDto,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct PatchPaletteRequest {
    pub name: Option<String>,
    pub light: Option<PaletteColorsDto>,
    pub dark: Option<PaletteColorsDto>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}

fn save_error_response(err: SavePaletteError) -> actix_web::HttpResponse {
    match err {
        SavePaletteError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "palette name must not be blank")
        }
        SavePaletteError::InvalidColor(value) => ApiResponse::bad_request(
            "INVALID_COLOR",
            &format!("'{value}' is not a #rrggbb color"),
        ),
        SavePaletteError::NameTaken => {
            ApiResponse::conflict("PALETTE_NAME_TAKEN", "a palette with this name already exists")
        }
        SavePaletteError::NotFound => {
            ApiResponse::not_found("PALETTE_NOT_FOUND", "palette does not exist")
        }
        SavePaletteError::RepositoryError(msg) => {
            error!("Palette save failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Palettes are public so the frontend can offer theme previews.
#[utoipa::path(
    get,
    path = "/api/palettes",
    tag = "settings",
    responses((status = 200, description = "All color palettes"))
)]
#[get("/api/palettes")]
pub async fn get_palettes_handler(data: web::Data<AppState>) -> impl Responder {
    match data.settings.list_palettes.execute().await {
        Ok(palettes) => ApiResponse::success(palettes),
        Err(ListPalettesError::RepositoryError(msg)) => {
            error!("Failed to list palettes: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/palettes")]
pub async fn create_palette_handler(
    body: web::Json<CreatePaletteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let input = CreatePaletteInput {
        name: req.name,
        light: req.light.into(),
        dark: req.dark.into(),
        is_active: req.is_active,
        is_default: req.is_default,
    };

    match data.settings.create_palette.execute(input).await {
        Ok(palette) => ApiResponse::created(palette),
        Err(err) => save_error_response(err),
    }
}

#[put("/api/admin/palettes/{id}")]
pub async fn update_palette_handler(
    path: web::Path<Uuid>,
    body: web::Json<PatchPaletteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = body.into_inner();
    let update = UpdatePaletteData {
        name: req.name,
        light: req.light.map(Into::into),
        dark: req.dark.map(Into::into),
        is_active: req.is_active,
    };

    match data
        .settings
        .update_palette
        .execute(path.into_inner(), update)
        .await
    {
        Ok(palette) => ApiResponse::success(palette),
        Err(err) => save_error_response(err),
    }
}

#[delete("/api/admin/palettes/{id}")]
pub async fn delete_palette_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .settings
        .delete_palette
        .execute(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(SetDefaultPaletteError::NotFound) => {
            ApiResponse::not_found("PALETTE_NOT_FOUND", "palette does not exist")
        }
        Err(err) => {
            error!("Palette delete failed: {:?}", err);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/palettes/{id}/set-default")]
pub async fn set_default_palette_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .settings
        .set_default_palette
        .execute(path.into_inner())
        .await
    {
        Ok(palette) => ApiResponse::success(palette),
        Err(SetDefaultPaletteError::NotFound) => {
            ApiResponse::not_found("PALETTE_NOT_FOUND", "palette does not exist")
        }
        Err(SetDefaultPaletteError::Inactive) => {
            ApiResponse::bad_request("PALETTE_INACTIVE", "an inactive palette cannot be default")
        }
        Err(SetDefaultPaletteError::RepositoryError(msg)) => {
            error!("Palette set-default failed: {}", msg);
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

    fn colors() -> Value {
        json!({
            "primary": "#6366f1",
            "secondary": "#8b5cf6",
            "accent": "#06b6d4",
            "background": "#f8fafc",
            "text": "#1e293b"
        })
    }

    #[actix_web::test]
    async fn create_palette_derives_slug() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new().app_data(state).service(create_palette_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/palettes")
            .set_json(json!({
                "name": "Forest Modern",
                "light": colors(),
                "dark": colors()
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["slug"], "forest-modern");
    }

    #[actix_web::test]
    async fn create_palette_rejects_bad_color() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new().app_data(state).service(create_palette_handler),
        )
        .await;

        let mut bad = colors();
        bad["accent"] = json!("blue");
        let req = test::TestRequest::post()
            .uri("/api/admin/palettes")
            .set_json(json!({"name": "Broken", "light": bad, "dark": colors()}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_COLOR");
    }
}
