use crate::modules::settings::application::domain::entities::ColorPalette;
use crate::modules::settings::application::ports::outgoing::{
    PaletteRepository, PaletteRepositoryError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ListPalettesError {
    RepositoryError(String),
}

#[async_trait]
pub trait IListPalettesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ColorPalette>, ListPalettesError>;
}

pub struct ListPalettesUseCase<R: PaletteRepository> {
    repository: R,
}

impl<R: PaletteRepository> ListPalettesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: PaletteRepository> IListPalettesUseCase for ListPalettesUseCase<R> {
    async fn execute(&self) -> Result<Vec<ColorPalette>, ListPalettesError> {
        self.repository.list().await.map_err(|e| match e {
            PaletteRepositoryError::DatabaseError(msg) => ListPalettesError::RepositoryError(msg),
            other => ListPalettesError::RepositoryError(other.to_string()),
        })
    }
}
