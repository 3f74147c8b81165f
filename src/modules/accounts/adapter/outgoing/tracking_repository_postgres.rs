use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::accounts::adapter::outgoing::sea_orm_entity::{
    login_attempts, user_activities, user_sessions,
};
use crate::modules::accounts::application::domain::entities::{
    ActivityAction, UserActivity, UserSession,
};
use crate::modules::accounts::application::ports::outgoing::tracking_repository::{
    CreateSessionData, LoginAttemptData, RecordActivityData, TrackingRepository,
    TrackingRepositoryError,
};

#[derive(Clone)]
pub struct TrackingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TrackingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> TrackingRepositoryError {
    TrackingRepositoryError::DatabaseError(e.to_string())
}

fn model_to_session(model: user_sessions::Model) -> UserSession {
    UserSession {
        id: model.id,
        user_id: model.user_id,
        session_key: model.session_key,
        ip_address: model.ip_address,
        user_agent: model.user_agent,
        is_active: model.is_active,
        created_at: model.created_at,
        last_activity: model.last_activity,
    }
}

fn model_to_activity(model: user_activities::Model) -> UserActivity {
    UserActivity {
        id: model.id,
        user_id: model.user_id,
        // Rows only ever hold wire names written by this adapter.
        action: ActivityAction::parse(&model.action).unwrap_or(ActivityAction::Search),
        description: model.description,
        ip_address: model.ip_address,
        user_agent: model.user_agent,
        referer: model.referer,
        metadata: model.metadata,
        created_at: model.created_at,
    }
}

#[async_trait]
impl TrackingRepository for TrackingRepositoryPostgres {
    async fn record_login_attempt(
        &self,
        data: LoginAttemptData,
    ) -> Result<(), TrackingRepositoryError> {
        let model = login_attempts::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            ip_address: Set(data.ip_address.unwrap_or_default()),
            user_agent: Set(data.user_agent.unwrap_or_default()),
            success: Set(data.success),
            created_at: Set(Utc::now().fixed_offset()),
        };
        model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(())
    }

    async fn create_session(
        &self,
        data: CreateSessionData,
    ) -> Result<UserSession, TrackingRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = user_sessions::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id),
            session_key: Set(data.session_key),
            ip_address: Set(data.ip_address.unwrap_or_default()),
            user_agent: Set(data.user_agent.unwrap_or_default()),
            is_active: Set(true),
            created_at: Set(now),
            last_activity: Set(now),
        };
        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_session(inserted))
    }

    async fn find_session(
        &self,
        session_key: &str,
    ) -> Result<Option<UserSession>, TrackingRepositoryError> {
        let model = user_sessions::Entity::find()
            .filter(user_sessions::Column::SessionKey.eq(session_key))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_session))
    }

    async fn touch_session(&self, session_key: &str) -> Result<(), TrackingRepositoryError> {
        let existing = user_sessions::Entity::find()
            .filter(user_sessions::Column::SessionKey.eq(session_key))
            .filter(user_sessions::Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TrackingRepositoryError::SessionNotFound)?;

        let mut model: user_sessions::ActiveModel = existing.into();
        model.last_activity = Set(Utc::now().fixed_offset());
        model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(())
    }

    async fn close_session(&self, session_key: &str) -> Result<(), TrackingRepositoryError> {
        let existing = user_sessions::Entity::find()
            .filter(user_sessions::Column::SessionKey.eq(session_key))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TrackingRepositoryError::SessionNotFound)?;

        let mut model: user_sessions::ActiveModel = existing.into();
        model.is_active = Set(false);
        model.last_activity = Set(Utc::now().fixed_offset());
        model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(())
    }

    async fn list_sessions(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UserSession>, TrackingRepositoryError> {
        let models = user_sessions::Entity::find()
            .filter(user_sessions::Column::UserId.eq(user_id))
            .order_by_desc(user_sessions::Column::LastActivity)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_session).collect())
    }

    async fn record_activity(
        &self,
        data: RecordActivityData,
    ) -> Result<(), TrackingRepositoryError> {
        let model = user_activities::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id),
            action: Set(data.action.as_str().to_string()),
            description: Set(data.description.unwrap_or_default()),
            ip_address: Set(data.ip_address.unwrap_or_default()),
            user_agent: Set(data.user_agent.unwrap_or_default()),
            referer: Set(data.referer.unwrap_or_default()),
            metadata: Set(data.metadata),
            created_at: Set(Utc::now().fixed_offset()),
        };
        model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(())
    }

    async fn recent_activity(
        &self,
        limit: u64,
    ) -> Result<Vec<UserActivity>, TrackingRepositoryError> {
        let models = user_activities::Entity::find()
            .order_by_desc(user_activities::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_activity).collect())
    }
}
