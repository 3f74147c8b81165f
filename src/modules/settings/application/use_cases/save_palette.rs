use crate::modules::settings::application::domain::entities::{ColorPalette, PaletteColors};
use crate::modules::settings::application::ports::outgoing::{
    CreatePaletteData, PaletteRepository, PaletteRepositoryError, UpdatePaletteData,
};
use crate::shared::text::{is_hex_color, slugify};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SavePaletteError {
    EmptyName,
    InvalidColor(String),
    NameTaken,
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait ICreatePaletteUseCase: Send + Sync {
    async fn execute(&self, data: CreatePaletteInput) -> Result<ColorPalette, SavePaletteError>;
}

#[async_trait]
pub trait IUpdatePaletteUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdatePaletteData,
    ) -> Result<ColorPalette, SavePaletteError>;
}

/// Create input before slug derivation; the slug always comes from the name.
#[derive(Debug, Clone)]
pub struct CreatePaletteInput {
    pub name: String,
    pub light: PaletteColors,
    pub dark: PaletteColors,
    pub is_active: bool,
    pub is_default: bool,
}

pub struct SavePaletteUseCase<R: PaletteRepository> {
    repository: R,
}

impl<R: PaletteRepository> SavePaletteUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn check_colors(colors: &PaletteColors) -> Result<(), SavePaletteError> {
    for value in [
        &colors.primary,
        &colors.secondary,
        &colors.accent,
        &colors.background,
        &colors.text,
    ] {
        if !is_hex_color(value) {
            return Err(SavePaletteError::InvalidColor(value.clone()));
        }
    }
    Ok(())
}

fn map_repo_error(e: PaletteRepositoryError) -> SavePaletteError {
    match e {
        PaletteRepositoryError::NotFound => SavePaletteError::NotFound,
        PaletteRepositoryError::NameTaken => SavePaletteError::NameTaken,
        PaletteRepositoryError::DatabaseError(msg) => SavePaletteError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R: PaletteRepository> ICreatePaletteUseCase for SavePaletteUseCase<R> {
    async fn execute(&self, input: CreatePaletteInput) -> Result<ColorPalette, SavePaletteError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(SavePaletteError::EmptyName);
        }
        check_colors(&input.light)?;
        check_colors(&input.dark)?;

        let data = CreatePaletteData {
            slug: slugify(&name),
            name,
            light: input.light,
            dark: input.dark,
            is_active: input.is_active,
            is_default: input.is_default,
        };
        self.repository.create(data).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: PaletteRepository> IUpdatePaletteUseCase for SavePaletteUseCase<R> {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdatePaletteData,
    ) -> Result<ColorPalette, SavePaletteError> {
        if matches!(data.name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(SavePaletteError::EmptyName);
        }
        if let Some(colors) = &data.light {
            check_colors(colors)?;
        }
        if let Some(colors) = &data.dark {
            check_colors(colors)?;
        }
        self.repository
            .update(id, data)
            .await
            .map_err(map_repo_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    struct MockPaletteRepository {
        name_taken: bool,
    }

    fn colors(prefix: &str) -> PaletteColors {
        let _ = prefix;
        PaletteColors {
            primary: "#6366f1".into(),
            secondary: "#8b5cf6".into(),
            accent: "#06b6d4".into(),
            background: "#f8fafc".into(),
            text: "#1e293b".into(),
        }
    }

    #[async_trait]
    impl PaletteRepository for MockPaletteRepository {
        async fn list(&self) -> Result<Vec<ColorPalette>, PaletteRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(
            &self,
            _id: Uuid,
        ) -> Result<Option<ColorPalette>, PaletteRepositoryError> {
            unimplemented!()
        }

        async fn create(
            &self,
            data: CreatePaletteData,
        ) -> Result<ColorPalette, PaletteRepositoryError> {
            if self.name_taken {
                return Err(PaletteRepositoryError::NameTaken);
            }
            Ok(ColorPalette {
                id: Uuid::new_v4(),
                name: data.name,
                slug: data.slug,
                light: data.light,
                dark: data.dark,
                is_active: data.is_active,
                is_default: data.is_default,
                created_at: Utc::now().fixed_offset(),
                updated_at: Utc::now().fixed_offset(),
            })
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: UpdatePaletteData,
        ) -> Result<ColorPalette, PaletteRepositoryError> {
            Err(PaletteRepositoryError::NotFound)
        }

        async fn delete(&self, _id: Uuid) -> Result<(), PaletteRepositoryError> {
            unimplemented!()
        }

        async fn set_default(&self, _id: Uuid) -> Result<ColorPalette, PaletteRepositoryError> {
            unimplemented!()
        }
    }

    fn input(name: &str) -> CreatePaletteInput {
        CreatePaletteInput {
            name: name.to_string(),
            light: colors("light"),
            dark: colors("dark"),
            is_active: true,
            is_default: false,
        }
    }

    #[tokio::test]
    async fn creates_palette_with_derived_slug() {
        let use_case = SavePaletteUseCase::new(MockPaletteRepository { name_taken: false });
        let palette = ICreatePaletteUseCase::execute(&use_case, input("Ocean Deep"))
            .await
            .unwrap();
        assert_eq!(palette.slug, "ocean-deep");
    }

    #[tokio::test]
    async fn rejects_bad_hex_value() {
        let use_case = SavePaletteUseCase::new(MockPaletteRepository { name_taken: false });
        let mut bad = input("Broken");
        bad.light.accent = "#xyz".into();
        let result = ICreatePaletteUseCase::execute(&use_case, bad).await;
        assert!(matches!(result, Err(SavePaletteError::InvalidColor(v)) if v == "#xyz"));
    }

    #[tokio::test]
    async fn duplicate_name_surfaces_as_name_taken() {
        let use_case = SavePaletteUseCase::new(MockPaletteRepository { name_taken: true });
        let result = ICreatePaletteUseCase::execute(&use_case, input("Dup")).await;
        assert!(matches!(result, Err(SavePaletteError::NameTaken)));
    }

    #[tokio::test]
    async fn update_missing_palette_is_not_found() {
        let use_case = SavePaletteUseCase::new(MockPaletteRepository { name_taken: false });
        let result = IUpdatePaletteUseCase::execute(
            &use_case,
            Uuid::new_v4(),
            UpdatePaletteData {
                name: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(SavePaletteError::NotFound)));
    }
}
