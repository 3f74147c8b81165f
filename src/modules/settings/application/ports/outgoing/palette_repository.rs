use crate::modules::settings::application::domain::entities::{ColorPalette, PaletteColors};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PaletteRepositoryError {
    #[error("palette not found")]
    NotFound,
    #[error("palette name or slug already taken")]
    NameTaken,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreatePaletteData {
    pub name: String,
    pub slug: String,
    pub light: PaletteColors,
    pub dark: PaletteColors,
    pub is_active: bool,
    pub is_default: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePaletteData {
    pub name: Option<String>,
    pub light: Option<PaletteColors>,
    pub dark: Option<PaletteColors>,
    pub is_active: Option<bool>,
}

#[async_trait]
pub trait PaletteRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ColorPalette>, PaletteRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ColorPalette>, PaletteRepositoryError>;

    /// When `data.is_default` is set the previous default must be cleared in
    /// the same transaction; at most one default row may exist afterwards.
    async fn create(&self, data: CreatePaletteData)
        -> Result<ColorPalette, PaletteRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdatePaletteData,
    ) -> Result<ColorPalette, PaletteRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), PaletteRepositoryError>;

    /// Atomically clears the current default and marks `id` as default.
    async fn set_default(&self, id: Uuid) -> Result<ColorPalette, PaletteRepositoryError>;
}
