use crate::modules::settings::application::ports::outgoing::{
    NavigationRepository, NavigationRepositoryError,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum DeleteNavigationError {
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteNavigationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteNavigationError>;
}

/// Also carries the toggle operation; both are single repository calls on the
/// same aggregate.
#[async_trait]
pub trait IToggleNavigationUseCase: Send + Sync {
    /// Returns the new `is_active` value.
    async fn execute(&self, id: Uuid) -> Result<bool, DeleteNavigationError>;
}

pub struct NavigationAdminUseCase<R: NavigationRepository> {
    repository: R,
}

impl<R: NavigationRepository> NavigationAdminUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: NavigationRepositoryError) -> DeleteNavigationError {
    match e {
        NavigationRepositoryError::NotFound => DeleteNavigationError::NotFound,
        NavigationRepositoryError::DatabaseError(msg) => {
            DeleteNavigationError::RepositoryError(msg)
        }
    }
}

#[async_trait]
impl<R: NavigationRepository> IDeleteNavigationUseCase for NavigationAdminUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteNavigationError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: NavigationRepository> IToggleNavigationUseCase for NavigationAdminUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<bool, DeleteNavigationError> {
        self.repository
            .toggle_active(id)
            .await
            .map_err(map_repo_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::settings::application::domain::entities::NavigationItem;
    use crate::modules::settings::application::ports::outgoing::{
        CreateNavigationData, UpdateNavigationData,
    };

    struct MockNavigationRepository {
        known_id: Uuid,
        currently_active: bool,
    }

    #[async_trait]
    impl NavigationRepository for MockNavigationRepository {
        async fn list(
            &self,
            _only_active: bool,
        ) -> Result<Vec<NavigationItem>, NavigationRepositoryError> {
            unimplemented!()
        }

        async fn create(
            &self,
            _data: CreateNavigationData,
        ) -> Result<NavigationItem, NavigationRepositoryError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: UpdateNavigationData,
        ) -> Result<NavigationItem, NavigationRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, id: Uuid) -> Result<(), NavigationRepositoryError> {
            if id == self.known_id {
                Ok(())
            } else {
                Err(NavigationRepositoryError::NotFound)
            }
        }

        async fn toggle_active(&self, id: Uuid) -> Result<bool, NavigationRepositoryError> {
            if id == self.known_id {
                Ok(!self.currently_active)
            } else {
                Err(NavigationRepositoryError::NotFound)
            }
        }
    }

    #[tokio::test]
    async fn deletes_known_item() {
        let id = Uuid::new_v4();
        let use_case = NavigationAdminUseCase::new(MockNavigationRepository {
            known_id: id,
            currently_active: true,
        });
        assert!(IDeleteNavigationUseCase::execute(&use_case, id).await.is_ok());
    }

    #[tokio::test]
    async fn delete_unknown_item_is_not_found() {
        let use_case = NavigationAdminUseCase::new(MockNavigationRepository {
            known_id: Uuid::new_v4(),
            currently_active: true,
        });
        let result = IDeleteNavigationUseCase::execute(&use_case, Uuid::new_v4()).await;
        assert!(matches!(result, Err(DeleteNavigationError::NotFound)));
    }

    #[tokio::test]
    async fn toggle_flips_active_flag() {
        let id = Uuid::new_v4();
        let use_case = NavigationAdminUseCase::new(MockNavigationRepository {
            known_id: id,
            currently_active: true,
        });
        let now_active = IToggleNavigationUseCase::execute(&use_case, id).await.unwrap();
        assert!(!now_active);
    }
}
