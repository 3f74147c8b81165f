use crate::modules::portfolio::application::domain::entities::Category;
use crate::modules::portfolio::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CreateCategoryData, UpdateCategoryData,
};
use crate::shared::text::{is_hex_color, slugify};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SaveCategoryError {
    EmptyName,
    InvalidColor(String),
    NameTaken,
    NotFound,
    RepositoryError(String),
}

/// Category create payload before slug derivation.
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub color: String,
    pub icon: String,
}

#[async_trait]
pub trait ICreateCategoryUseCase: Send + Sync {
    async fn execute(&self, input: CreateCategoryInput) -> Result<Category, SaveCategoryError>;
}

#[async_trait]
pub trait IUpdateCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateCategoryData,
    ) -> Result<Category, SaveCategoryError>;
}

#[async_trait]
pub trait IDeleteCategoryUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), SaveCategoryError>;
}

pub struct SaveCategoryUseCase<R: CategoryRepository> {
    repository: R,
}

impl<R: CategoryRepository> SaveCategoryUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: CategoryRepositoryError) -> SaveCategoryError {
    match e {
        CategoryRepositoryError::NotFound => SaveCategoryError::NotFound,
        CategoryRepositoryError::NameTaken => SaveCategoryError::NameTaken,
        CategoryRepositoryError::DatabaseError(msg) => SaveCategoryError::RepositoryError(msg),
    }
}

fn check_color(color: &str) -> Result<(), SaveCategoryError> {
    if !color.is_empty() && !is_hex_color(color) {
        return Err(SaveCategoryError::InvalidColor(color.to_string()));
    }
    Ok(())
}

#[async_trait]
impl<R: CategoryRepository> ICreateCategoryUseCase for SaveCategoryUseCase<R> {
    async fn execute(&self, input: CreateCategoryInput) -> Result<Category, SaveCategoryError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(SaveCategoryError::EmptyName);
        }
        check_color(&input.color)?;

        let slug = if input.slug.trim().is_empty() {
            slugify(&name)
        } else {
            slugify(&input.slug)
        };

        self.repository
            .create(CreateCategoryData {
                name,
                slug,
                description: input.description,
                color: input.color,
                icon: input.icon,
            })
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: CategoryRepository> IUpdateCategoryUseCase for SaveCategoryUseCase<R> {
    async fn execute(
        &self,
        id: Uuid,
        mut data: UpdateCategoryData,
    ) -> Result<Category, SaveCategoryError> {
        if matches!(data.name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(SaveCategoryError::EmptyName);
        }
        if let Some(color) = data.color.as_deref() {
            check_color(color)?;
        }
        if let Some(slug) = data.slug.as_deref() {
            data.slug = Some(slugify(slug));
        }
        self.repository
            .update(id, data)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: CategoryRepository> IDeleteCategoryUseCase for SaveCategoryUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), SaveCategoryError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    struct MockCategoryRepository {
        taken: bool,
    }

    #[async_trait]
    impl CategoryRepository for MockCategoryRepository {
        async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
            unimplemented!()
        }

        async fn create(
            &self,
            data: CreateCategoryData,
        ) -> Result<Category, CategoryRepositoryError> {
            if self.taken {
                return Err(CategoryRepositoryError::NameTaken);
            }
            Ok(Category {
                id: Uuid::new_v4(),
                name: data.name,
                slug: data.slug,
                description: data.description,
                color: data.color,
                icon: data.icon,
                created_at: Utc::now().fixed_offset(),
                updated_at: Utc::now().fixed_offset(),
            })
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: UpdateCategoryData,
        ) -> Result<Category, CategoryRepositoryError> {
            Err(CategoryRepositoryError::NotFound)
        }

        async fn delete(&self, _id: Uuid) -> Result<(), CategoryRepositoryError> {
            Ok(())
        }
    }

    fn input(name: &str, slug: &str) -> CreateCategoryInput {
        CreateCategoryInput {
            name: name.to_string(),
            slug: slug.to_string(),
            description: String::new(),
            color: "#3b82f6".to_string(),
            icon: String::new(),
        }
    }

    #[tokio::test]
    async fn blank_slug_is_derived_from_name() {
        let use_case = SaveCategoryUseCase::new(MockCategoryRepository { taken: false });
        let category = ICreateCategoryUseCase::execute(&use_case, input("Web Development", ""))
            .await
            .unwrap();
        assert_eq!(category.slug, "web-development");
    }

    #[tokio::test]
    async fn explicit_slug_is_normalized() {
        let use_case = SaveCategoryUseCase::new(MockCategoryRepository { taken: false });
        let category = ICreateCategoryUseCase::execute(&use_case, input("APIs", "My APIs!"))
            .await
            .unwrap();
        assert_eq!(category.slug, "my-apis");
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict() {
        let use_case = SaveCategoryUseCase::new(MockCategoryRepository { taken: true });
        let result = ICreateCategoryUseCase::execute(&use_case, input("Web", "")).await;
        assert!(matches!(result, Err(SaveCategoryError::NameTaken)));
    }

    #[tokio::test]
    async fn rejects_malformed_color() {
        let use_case = SaveCategoryUseCase::new(MockCategoryRepository { taken: false });
        let mut bad = input("Web", "");
        bad.color = "blue".to_string();
        let result = ICreateCategoryUseCase::execute(&use_case, bad).await;
        assert!(matches!(result, Err(SaveCategoryError::InvalidColor(_))));
    }
}
