use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::accounts::adapter::outgoing::sea_orm_entity::user_profiles;
use crate::modules::accounts::application::domain::entities::UserProfile;
use crate::modules::accounts::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError, UpdateProfileData,
};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_or_insert(
        &self,
        user_id: Uuid,
    ) -> Result<user_profiles::Model, ProfileRepositoryError> {
        if let Some(model) = user_profiles::Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        {
            return Ok(model);
        }

        let now = Utc::now().fixed_offset();
        let blank = user_profiles::ActiveModel {
            user_id: Set(user_id),
            bio: Set(String::new()),
            location: Set(String::new()),
            website: Set(String::new()),
            profile_image: Set(String::new()),
            github_url: Set(String::new()),
            linkedin_url: Set(String::new()),
            twitter_url: Set(String::new()),
            job_title: Set(String::new()),
            company: Set(String::new()),
            experience_years: Set(0),
            email_notifications: Set(true),
            activity_alerts: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };
        blank.insert(&*self.db).await.map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

fn model_to_profile(model: user_profiles::Model) -> UserProfile {
    UserProfile {
        user_id: model.user_id,
        bio: model.bio,
        location: model.location,
        website: model.website,
        profile_image: model.profile_image,
        github_url: model.github_url,
        linkedin_url: model.linkedin_url,
        twitter_url: model.twitter_url,
        job_title: model.job_title,
        company: model.company,
        experience_years: model.experience_years,
        email_notifications: model.email_notifications,
        activity_alerts: model.activity_alerts,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn get_or_create(&self, user_id: Uuid) -> Result<UserProfile, ProfileRepositoryError> {
        let model = self.find_or_insert(user_id).await?;
        Ok(model_to_profile(model))
    }

    async fn update(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<UserProfile, ProfileRepositoryError> {
        let existing = self.find_or_insert(user_id).await?;
        let mut model: user_profiles::ActiveModel = existing.into();

        if let Some(bio) = data.bio {
            model.bio = Set(bio);
        }
        if let Some(location) = data.location {
            model.location = Set(location);
        }
        if let Some(website) = data.website {
            model.website = Set(website);
        }
        if let Some(profile_image) = data.profile_image {
            model.profile_image = Set(profile_image);
        }
        if let Some(github_url) = data.github_url {
            model.github_url = Set(github_url);
        }
        if let Some(linkedin_url) = data.linkedin_url {
            model.linkedin_url = Set(linkedin_url);
        }
        if let Some(twitter_url) = data.twitter_url {
            model.twitter_url = Set(twitter_url);
        }
        if let Some(job_title) = data.job_title {
            model.job_title = Set(job_title);
        }
        if let Some(company) = data.company {
            model.company = Set(company);
        }
        if let Some(experience_years) = data.experience_years {
            model.experience_years = Set(experience_years);
        }
        if let Some(email_notifications) = data.email_notifications {
            model.email_notifications = Set(email_notifications);
        }
        if let Some(activity_alerts) = data.activity_alerts {
            model.activity_alerts = Set(activity_alerts);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_profile(updated))
    }
}
