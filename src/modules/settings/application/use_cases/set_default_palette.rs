use crate::modules::settings::application::domain::entities::ColorPalette;
use crate::modules::settings::application::ports::outgoing::{
    PaletteRepository, PaletteRepositoryError,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SetDefaultPaletteError {
    NotFound,
    Inactive,
    RepositoryError(String),
}

/// Marks one palette as the site default. The repository clears the previous
/// default in the same transaction, so at most one default exists afterwards.
#[async_trait]
pub trait ISetDefaultPaletteUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ColorPalette, SetDefaultPaletteError>;
}

#[async_trait]
pub trait IDeletePaletteUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), SetDefaultPaletteError>;
}

pub struct PaletteAdminUseCase<R: PaletteRepository> {
    repository: R,
}

impl<R: PaletteRepository> PaletteAdminUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: PaletteRepositoryError) -> SetDefaultPaletteError {
    match e {
        PaletteRepositoryError::NotFound => SetDefaultPaletteError::NotFound,
        other => SetDefaultPaletteError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R: PaletteRepository> ISetDefaultPaletteUseCase for PaletteAdminUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<ColorPalette, SetDefaultPaletteError> {
        let palette = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .ok_or(SetDefaultPaletteError::NotFound)?;

        if !palette.is_active {
            return Err(SetDefaultPaletteError::Inactive);
        }

        self.repository.set_default(id).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: PaletteRepository> IDeletePaletteUseCase for PaletteAdminUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), SetDefaultPaletteError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::settings::application::domain::entities::PaletteColors;
    use crate::modules::settings::application::ports::outgoing::{
        CreatePaletteData, UpdatePaletteData,
    };
    use chrono::Utc;
    use std::sync::Mutex;

    struct MockPaletteRepository {
        palette: Option<ColorPalette>,
        default_cleared: Mutex<bool>,
    }

    fn palette(id: Uuid, is_active: bool) -> ColorPalette {
        let colors = PaletteColors {
            primary: "#6366f1".into(),
            secondary: "#8b5cf6".into(),
            accent: "#06b6d4".into(),
            background: "#f8fafc".into(),
            text: "#1e293b".into(),
        };
        ColorPalette {
            id,
            name: "Palette".into(),
            slug: "palette".into(),
            light: colors.clone(),
            dark: colors,
            is_active,
            is_default: false,
            created_at: Utc::now().fixed_offset(),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[async_trait]
    impl PaletteRepository for MockPaletteRepository {
        async fn list(&self) -> Result<Vec<ColorPalette>, PaletteRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(
            &self,
            id: Uuid,
        ) -> Result<Option<ColorPalette>, PaletteRepositoryError> {
            Ok(self.palette.clone().filter(|p| p.id == id))
        }

        async fn create(
            &self,
            _data: CreatePaletteData,
        ) -> Result<ColorPalette, PaletteRepositoryError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: UpdatePaletteData,
        ) -> Result<ColorPalette, PaletteRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, id: Uuid) -> Result<(), PaletteRepositoryError> {
            match &self.palette {
                Some(p) if p.id == id => Ok(()),
                _ => Err(PaletteRepositoryError::NotFound),
            }
        }

        async fn set_default(&self, id: Uuid) -> Result<ColorPalette, PaletteRepositoryError> {
            *self.default_cleared.lock().unwrap() = true;
            let mut p = self.palette.clone().ok_or(PaletteRepositoryError::NotFound)?;
            p.id = id;
            p.is_default = true;
            Ok(p)
        }
    }

    #[tokio::test]
    async fn promotes_active_palette_to_default() {
        let id = Uuid::new_v4();
        let repo = MockPaletteRepository {
            palette: Some(palette(id, true)),
            default_cleared: Mutex::new(false),
        };
        let use_case = PaletteAdminUseCase::new(repo);

        let result = ISetDefaultPaletteUseCase::execute(&use_case, id).await.unwrap();
        assert!(result.is_default);
    }

    #[tokio::test]
    async fn refuses_inactive_palette() {
        let id = Uuid::new_v4();
        let repo = MockPaletteRepository {
            palette: Some(palette(id, false)),
            default_cleared: Mutex::new(false),
        };
        let use_case = PaletteAdminUseCase::new(repo);

        let result = ISetDefaultPaletteUseCase::execute(&use_case, id).await;
        assert!(matches!(result, Err(SetDefaultPaletteError::Inactive)));
    }

    #[tokio::test]
    async fn unknown_palette_is_not_found() {
        let repo = MockPaletteRepository {
            palette: None,
            default_cleared: Mutex::new(false),
        };
        let use_case = PaletteAdminUseCase::new(repo);

        let result = ISetDefaultPaletteUseCase::execute(&use_case, Uuid::new_v4()).await;
        assert!(matches!(result, Err(SetDefaultPaletteError::NotFound)));
    }

    #[tokio::test]
    async fn delete_unknown_palette_is_not_found() {
        let repo = MockPaletteRepository {
            palette: None,
            default_cleared: Mutex::new(false),
        };
        let use_case = PaletteAdminUseCase::new(repo);

        let result = IDeletePaletteUseCase::execute(&use_case, Uuid::new_v4()).await;
        assert!(matches!(result, Err(SetDefaultPaletteError::NotFound)));
    }
}
