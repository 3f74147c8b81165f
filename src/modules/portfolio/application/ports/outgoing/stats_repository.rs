use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Counts that live outside the portfolio tables. Kept behind a port so
/// the stats use case does not reach into other modules' repositories.
#[async_trait]
pub trait StatsCountsRepository: Send + Sync {
    async fn published_post_count(&self) -> Result<i64, StatsRepositoryError>;

    async fn active_service_count(&self) -> Result<i64, StatsRepositoryError>;

    async fn technology_count(&self) -> Result<i64, StatsRepositoryError>;
}
