use crate::modules::accounts::application::domain::entities::{ActivityAction, UserProfile};
use crate::modules::accounts::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError, UpdateProfileData,
};
use crate::modules::accounts::application::ports::outgoing::tracking_repository::{
    RecordActivityData, TrackingRepository,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum ManageProfileError {
    NotFound,
    NegativeExperience,
    RepositoryError(String),
}

#[async_trait]
pub trait IGetProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, ManageProfileError>;
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<UserProfile, ManageProfileError>;
}

pub struct ManageProfileUseCase<P: ProfileRepository, T: TrackingRepository> {
    profiles: P,
    tracking: T,
}

impl<P: ProfileRepository, T: TrackingRepository> ManageProfileUseCase<P, T> {
    pub fn new(profiles: P, tracking: T) -> Self {
        Self { profiles, tracking }
    }
}

fn map_repo_error(e: ProfileRepositoryError) -> ManageProfileError {
    match e {
        ProfileRepositoryError::NotFound => ManageProfileError::NotFound,
        other => ManageProfileError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<P: ProfileRepository, T: TrackingRepository> IGetProfileUseCase
    for ManageProfileUseCase<P, T>
{
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, ManageProfileError> {
        self.profiles
            .get_or_create(user_id)
            .await
            .map_err(map_repo_error)
    }
}

#[async_trait]
impl<P: ProfileRepository, T: TrackingRepository> IUpdateProfileUseCase
    for ManageProfileUseCase<P, T>
{
    async fn execute(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<UserProfile, ManageProfileError> {
        if matches!(data.experience_years, Some(years) if years < 0) {
            return Err(ManageProfileError::NegativeExperience);
        }

        let profile = self
            .profiles
            .update(user_id, data)
            .await
            .map_err(map_repo_error)?;

        let result = self
            .tracking
            .record_activity(RecordActivityData {
                user_id: Some(user_id),
                action: ActivityAction::ProfileUpdate,
                description: Some("Profile updated".to_string()),
                metadata: serde_json::json!({}),
                ip_address: None,
                user_agent: None,
                referer: None,
            })
            .await;
        if let Err(e) = result {
            tracing::warn!("failed to record profile activity: {}", e);
        }

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::accounts::application::domain::entities::{UserActivity, UserSession};
    use crate::modules::accounts::application::ports::outgoing::tracking_repository::{
        CreateSessionData, LoginAttemptData, TrackingRepositoryError,
    };
    use chrono::Utc;
    use std::sync::Mutex;

    struct EchoProfiles;

    #[async_trait]
    impl ProfileRepository for EchoProfiles {
        async fn get_or_create(
            &self,
            user_id: Uuid,
        ) -> Result<UserProfile, ProfileRepositoryError> {
            Ok(blank_profile(user_id))
        }

        async fn update(
            &self,
            user_id: Uuid,
            data: UpdateProfileData,
        ) -> Result<UserProfile, ProfileRepositoryError> {
            let mut profile = blank_profile(user_id);
            if let Some(bio) = data.bio {
                profile.bio = bio;
            }
            if let Some(years) = data.experience_years {
                profile.experience_years = years;
            }
            Ok(profile)
        }
    }

    fn blank_profile(user_id: Uuid) -> UserProfile {
        let now = Utc::now().fixed_offset();
        UserProfile {
            user_id,
            bio: String::new(),
            location: String::new(),
            website: String::new(),
            profile_image: String::new(),
            github_url: String::new(),
            linkedin_url: String::new(),
            twitter_url: String::new(),
            job_title: String::new(),
            company: String::new(),
            experience_years: 0,
            email_notifications: true,
            activity_alerts: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[derive(Default)]
    struct RecordingTracker {
        activities: Mutex<Vec<RecordActivityData>>,
    }

    #[async_trait]
    impl TrackingRepository for RecordingTracker {
        async fn record_login_attempt(
            &self,
            _data: LoginAttemptData,
        ) -> Result<(), TrackingRepositoryError> {
            Ok(())
        }

        async fn create_session(
            &self,
            _data: CreateSessionData,
        ) -> Result<UserSession, TrackingRepositoryError> {
            Err(TrackingRepositoryError::DatabaseError("unused".to_string()))
        }

        async fn find_session(
            &self,
            _session_key: &str,
        ) -> Result<Option<UserSession>, TrackingRepositoryError> {
            Ok(None)
        }

        async fn touch_session(&self, _session_key: &str) -> Result<(), TrackingRepositoryError> {
            Ok(())
        }

        async fn close_session(&self, _session_key: &str) -> Result<(), TrackingRepositoryError> {
            Ok(())
        }

        async fn list_sessions(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<UserSession>, TrackingRepositoryError> {
            Ok(vec![])
        }

        async fn record_activity(
            &self,
            data: RecordActivityData,
        ) -> Result<(), TrackingRepositoryError> {
            self.activities.lock().unwrap().push(data);
            Ok(())
        }

        async fn recent_activity(
            &self,
            _limit: u64,
        ) -> Result<Vec<UserActivity>, TrackingRepositoryError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn update_applies_changes_and_records_activity() {
        let use_case = ManageProfileUseCase::new(EchoProfiles, RecordingTracker::default());
        let data = UpdateProfileData {
            bio: Some("Rust developer".to_string()),
            experience_years: Some(7),
            ..Default::default()
        };

        let profile = IUpdateProfileUseCase::execute(&use_case, Uuid::new_v4(), data)
            .await
            .unwrap();
        assert_eq!(profile.bio, "Rust developer");
        assert_eq!(profile.experience_years, 7);

        let activities = use_case.tracking.activities.lock().unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].action, ActivityAction::ProfileUpdate);
    }

    #[tokio::test]
    async fn negative_experience_is_rejected() {
        let use_case = ManageProfileUseCase::new(EchoProfiles, RecordingTracker::default());
        let data = UpdateProfileData {
            experience_years: Some(-1),
            ..Default::default()
        };

        let result = IUpdateProfileUseCase::execute(&use_case, Uuid::new_v4(), data).await;
        assert_eq!(result.unwrap_err(), ManageProfileError::NegativeExperience);
        assert!(use_case.tracking.activities.lock().unwrap().is_empty());
    }
}
