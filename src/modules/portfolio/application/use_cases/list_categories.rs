use crate::modules::portfolio::application::domain::entities::Category;
use crate::modules::portfolio::application::ports::outgoing::CategoryRepository;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ListCategoriesError {
    RepositoryError(String),
}

#[async_trait]
pub trait IListCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Category>, ListCategoriesError>;
}

pub struct ListCategoriesUseCase<R: CategoryRepository> {
    repository: R,
}

impl<R: CategoryRepository> ListCategoriesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CategoryRepository> IListCategoriesUseCase for ListCategoriesUseCase<R> {
    async fn execute(&self) -> Result<Vec<Category>, ListCategoriesError> {
        self.repository
            .list()
            .await
            .map_err(|e| ListCategoriesError::RepositoryError(e.to_string()))
    }
}
