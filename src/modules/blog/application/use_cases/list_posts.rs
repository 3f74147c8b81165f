use crate::modules::blog::application::domain::entities::{BlogPost, PostStatus};
use crate::modules::blog::application::ports::outgoing::{
    BlogRepository, BlogRepositoryError, PostFilter,
};
use async_trait::async_trait;

pub const RECENT_LIMIT: u64 = 5;

#[derive(Debug, Clone)]
pub enum ListPostsError {
    RepositoryError(String),
}

/// Admin listing, every status included.
#[async_trait]
pub trait IListPostsUseCase: Send + Sync {
    async fn execute(&self, filter: PostFilter) -> Result<Vec<BlogPost>, ListPostsError>;
}

/// Visitor listing, published and featured posts only.
#[async_trait]
pub trait IListPublicPostsUseCase: Send + Sync {
    async fn execute(&self, filter: PostFilter) -> Result<Vec<BlogPost>, ListPostsError>;
}

/// The five most recently published posts.
#[async_trait]
pub trait IRecentPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BlogPost>, ListPostsError>;
}

pub struct ListPostsUseCase<R: BlogRepository> {
    repository: R,
}

impl<R: BlogRepository> ListPostsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: BlogRepositoryError) -> ListPostsError {
    ListPostsError::RepositoryError(e.to_string())
}

fn public_statuses() -> Vec<PostStatus> {
    vec![PostStatus::Published, PostStatus::Featured]
}

#[async_trait]
impl<R: BlogRepository> IListPostsUseCase for ListPostsUseCase<R> {
    async fn execute(&self, mut filter: PostFilter) -> Result<Vec<BlogPost>, ListPostsError> {
        filter.statuses = None;
        self.repository.list(filter).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: BlogRepository> IListPublicPostsUseCase for ListPostsUseCase<R> {
    async fn execute(&self, mut filter: PostFilter) -> Result<Vec<BlogPost>, ListPostsError> {
        filter.statuses = Some(public_statuses());
        self.repository.list(filter).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: BlogRepository> IRecentPostsUseCase for ListPostsUseCase<R> {
    async fn execute(&self) -> Result<Vec<BlogPost>, ListPostsError> {
        self.repository
            .list(PostFilter {
                statuses: Some(public_statuses()),
                limit: Some(RECENT_LIMIT),
                ..Default::default()
            })
            .await
            .map_err(map_repo_error)
    }
}
