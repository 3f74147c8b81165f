use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::blog::application::ports::outgoing::{BlogRepository, BlogRepositoryError};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum GetPostError {
    NotFound,
    RepositoryError(String),
}

/// Post detail by slug. Each successful read bumps the view counter.
#[async_trait]
pub trait IGetPublicPostUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<BlogPost, GetPostError>;
}

pub struct GetPublicPostUseCase<R: BlogRepository> {
    repository: R,
}

impl<R: BlogRepository> GetPublicPostUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: BlogRepository> IGetPublicPostUseCase for GetPublicPostUseCase<R> {
    async fn execute(&self, slug: &str) -> Result<BlogPost, GetPostError> {
        let mut post = self
            .repository
            .find_by_slug(slug)
            .await
            .map_err(|e| GetPostError::RepositoryError(e.to_string()))?
            .ok_or(GetPostError::NotFound)?;

        if !post.status.is_public() {
            return Err(GetPostError::NotFound);
        }

        post.views_count = self
            .repository
            .increment_views(post.id)
            .await
            .map_err(|e| match e {
                BlogRepositoryError::NotFound => GetPostError::NotFound,
                other => GetPostError::RepositoryError(other.to_string()),
            })?;

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::blog::application::domain::entities::PostStatus;
    use crate::modules::blog::application::ports::outgoing::{
        CreatePostData, PostFilter, UpdatePostData,
    };
    use chrono::Utc;
    use std::sync::atomic::{AtomicI64, Ordering};
    use uuid::Uuid;

    struct MockBlogRepository {
        status: PostStatus,
        views: AtomicI64,
    }

    fn post(status: PostStatus) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            title: "Async Rust".to_string(),
            slug: "async-rust".to_string(),
            excerpt: String::new(),
            content: String::new(),
            author_id: None,
            category: None,
            tags: String::new(),
            status,
            featured_image: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            views_count: 7,
            reading_time: 3,
            published_at: Some(Utc::now().fixed_offset()),
            created_at: Utc::now().fixed_offset(),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[async_trait]
    impl BlogRepository for MockBlogRepository {
        async fn list(&self, _filter: PostFilter) -> Result<Vec<BlogPost>, BlogRepositoryError> {
            unimplemented!()
        }

        async fn find_by_slug(
            &self,
            slug: &str,
        ) -> Result<Option<BlogPost>, BlogRepositoryError> {
            if slug == "async-rust" {
                Ok(Some(post(self.status)))
            } else {
                Ok(None)
            }
        }

        async fn increment_views(&self, _id: Uuid) -> Result<i64, BlogRepositoryError> {
            Ok(self.views.fetch_add(1, Ordering::SeqCst) + 1)
        }

        async fn create(&self, _data: CreatePostData) -> Result<BlogPost, BlogRepositoryError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: UpdatePostData,
        ) -> Result<BlogPost, BlogRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), BlogRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn detail_read_bumps_view_count() {
        let use_case = GetPublicPostUseCase::new(MockBlogRepository {
            status: PostStatus::Published,
            views: AtomicI64::new(7),
        });
        let post = use_case.execute("async-rust").await.unwrap();
        assert_eq!(post.views_count, 8);
    }

    #[tokio::test]
    async fn draft_post_reads_as_missing() {
        let use_case = GetPublicPostUseCase::new(MockBlogRepository {
            status: PostStatus::Draft,
            views: AtomicI64::new(0),
        });
        let result = use_case.execute("async-rust").await;
        assert!(matches!(result, Err(GetPostError::NotFound)));
        // No bump for hidden posts.
        assert_eq!(use_case.repository.views.load(Ordering::SeqCst), 0);
    }
}
