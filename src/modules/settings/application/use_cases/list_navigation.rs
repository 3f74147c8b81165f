use crate::modules::settings::application::domain::entities::NavigationItem;
use crate::modules::settings::application::ports::outgoing::{
    NavigationRepository, NavigationRepositoryError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ListNavigationError {
    RepositoryError(String),
}

#[async_trait]
pub trait IListNavigationUseCase: Send + Sync {
    /// `only_active = true` is the public menu; admins see everything.
    async fn execute(&self, only_active: bool)
        -> Result<Vec<NavigationItem>, ListNavigationError>;
}

pub struct ListNavigationUseCase<R: NavigationRepository> {
    repository: R,
}

impl<R: NavigationRepository> ListNavigationUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: NavigationRepository> IListNavigationUseCase for ListNavigationUseCase<R> {
    async fn execute(
        &self,
        only_active: bool,
    ) -> Result<Vec<NavigationItem>, ListNavigationError> {
        self.repository
            .list(only_active)
            .await
            .map_err(|e| match e {
                NavigationRepositoryError::DatabaseError(msg) => {
                    ListNavigationError::RepositoryError(msg)
                }
                NavigationRepositoryError::NotFound => {
                    ListNavigationError::RepositoryError("unexpected not-found".to_string())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::settings::application::ports::outgoing::{
        CreateNavigationData, UpdateNavigationData,
    };
    use chrono::Utc;
    use uuid::Uuid;

    struct MockNavigationRepository {
        items: Vec<NavigationItem>,
    }

    fn item(title: &str, active: bool) -> NavigationItem {
        NavigationItem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            url: format!("/{title}"),
            icon: String::new(),
            order: 0,
            is_active: active,
            is_external: false,
            created_at: Utc::now().fixed_offset(),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[async_trait]
    impl NavigationRepository for MockNavigationRepository {
        async fn list(
            &self,
            only_active: bool,
        ) -> Result<Vec<NavigationItem>, NavigationRepositoryError> {
            Ok(self
                .items
                .iter()
                .filter(|i| !only_active || i.is_active)
                .cloned()
                .collect())
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

        async fn delete(&self, _id: Uuid) -> Result<(), NavigationRepositoryError> {
            unimplemented!()
        }

        async fn toggle_active(&self, _id: Uuid) -> Result<bool, NavigationRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn public_listing_excludes_inactive_items() {
        let repo = MockNavigationRepository {
            items: vec![item("home", true), item("drafts", false)],
        };
        let use_case = ListNavigationUseCase::new(repo);

        let visible = use_case.execute(true).await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "home");
    }

    #[tokio::test]
    async fn admin_listing_includes_everything() {
        let repo = MockNavigationRepository {
            items: vec![item("home", true), item("drafts", false)],
        };
        let use_case = ListNavigationUseCase::new(repo);

        let all = use_case.execute(false).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
