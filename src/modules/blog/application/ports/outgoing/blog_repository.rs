use crate::modules::blog::application::domain::entities::{BlogPost, PostStatus};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogRepositoryError {
    #[error("blog post not found")]
    NotFound,
    #[error("post slug already taken")]
    SlugTaken,
    #[error("referenced record not found: {0}")]
    MissingReference(String),
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub category_slug: Option<String>,
    pub tag: Option<String>,
    /// `None` on the admin surface.
    pub statuses: Option<Vec<PostStatus>>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub tags: String,
    pub status: PostStatus,
    pub featured_image: String,
    pub meta_title: String,
    pub meta_description: String,
    pub reading_time: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePostData {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<Option<Uuid>>,
    pub category_id: Option<Option<Uuid>>,
    pub tags: Option<String>,
    pub status: Option<PostStatus>,
    pub featured_image: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    /// Recomputed by the use case whenever `content` changes.
    pub reading_time: Option<i32>,
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Public listings order by `published_at` desc, admin by creation
    /// time desc.
    async fn list(&self, filter: PostFilter) -> Result<Vec<BlogPost>, BlogRepositoryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, BlogRepositoryError>;

    /// Atomic view-count bump, returns the new value.
    async fn increment_views(&self, id: Uuid) -> Result<i64, BlogRepositoryError>;

    /// Sets `published_at` only if it was never set.
    async fn create(&self, data: CreatePostData) -> Result<BlogPost, BlogRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdatePostData,
    ) -> Result<BlogPost, BlogRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), BlogRepositoryError>;
}
