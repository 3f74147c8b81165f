use crate::modules::journey::application::domain::entities::JourneyEntry;
use crate::modules::journey::application::ports::outgoing::{
    CreateJourneyData, JourneyRepository, JourneyRepositoryError, UpdateJourneyData,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SaveJourneyError {
    EmptyTitle,
    EmptyOrganization,
    EndBeforeStart,
    NotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateJourneyUseCase: Send + Sync {
    async fn execute(&self, data: CreateJourneyData) -> Result<JourneyEntry, SaveJourneyError>;
}

#[async_trait]
pub trait IUpdateJourneyUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateJourneyData,
    ) -> Result<JourneyEntry, SaveJourneyError>;
}

pub struct SaveJourneyUseCase<R: JourneyRepository> {
    repository: R,
}

impl<R: JourneyRepository> SaveJourneyUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(e: JourneyRepositoryError) -> SaveJourneyError {
    match e {
        JourneyRepositoryError::NotFound => SaveJourneyError::NotFound,
        JourneyRepositoryError::DatabaseError(msg) => SaveJourneyError::RepositoryError(msg),
    }
}

fn check_span(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), SaveJourneyError> {
    if let Some(end) = end {
        if end < start {
            return Err(SaveJourneyError::EndBeforeStart);
        }
    }
    Ok(())
}

#[async_trait]
impl<R: JourneyRepository> ICreateJourneyUseCase for SaveJourneyUseCase<R> {
    async fn execute(&self, mut data: CreateJourneyData) -> Result<JourneyEntry, SaveJourneyError> {
        if data.title.trim().is_empty() {
            return Err(SaveJourneyError::EmptyTitle);
        }
        if data.organization.trim().is_empty() {
            return Err(SaveJourneyError::EmptyOrganization);
        }
        check_span(data.start_date, data.end_date)?;
        // A current entry has no fixed end date.
        if data.is_current {
            data.end_date = None;
        }
        self.repository.create(data).await.map_err(map_repo_error)
    }
}

#[async_trait]
impl<R: JourneyRepository> IUpdateJourneyUseCase for SaveJourneyUseCase<R> {
    async fn execute(
        &self,
        id: Uuid,
        mut data: UpdateJourneyData,
    ) -> Result<JourneyEntry, SaveJourneyError> {
        if matches!(data.title.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(SaveJourneyError::EmptyTitle);
        }
        if matches!(data.organization.as_deref(), Some(o) if o.trim().is_empty()) {
            return Err(SaveJourneyError::EmptyOrganization);
        }
        if let (Some(start), Some(Some(end))) = (data.start_date, data.end_date) {
            check_span(start, Some(end))?;
        }
        if data.is_current == Some(true) {
            data.end_date = Some(None);
        }
        self.repository
            .update(id, data)
            .await
            .map_err(map_repo_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::journey::application::domain::entities::EntryType;
    use crate::modules::journey::application::ports::outgoing::JourneyFilter;
    use chrono::Utc;

    struct MockJourneyRepository;

    #[async_trait]
    impl JourneyRepository for MockJourneyRepository {
        async fn list(
            &self,
            _filter: JourneyFilter,
        ) -> Result<Vec<JourneyEntry>, JourneyRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(
            &self,
            _id: Uuid,
        ) -> Result<Option<JourneyEntry>, JourneyRepositoryError> {
            unimplemented!()
        }

        async fn create(
            &self,
            data: CreateJourneyData,
        ) -> Result<JourneyEntry, JourneyRepositoryError> {
            Ok(JourneyEntry {
                id: Uuid::new_v4(),
                entry_type: data.entry_type,
                title: data.title,
                organization: data.organization,
                location: data.location,
                start_date: data.start_date,
                end_date: data.end_date,
                is_current: data.is_current,
                description: data.description,
                achievements: data.achievements,
                technologies: data.technologies,
                is_active: data.is_active,
                order: data.order,
                created_at: Utc::now().fixed_offset(),
                updated_at: Utc::now().fixed_offset(),
            })
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: UpdateJourneyData,
        ) -> Result<JourneyEntry, JourneyRepositoryError> {
            Err(JourneyRepositoryError::NotFound)
        }

        async fn delete(&self, _id: Uuid) -> Result<(), JourneyRepositoryError> {
            unimplemented!()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_data() -> CreateJourneyData {
        CreateJourneyData {
            entry_type: EntryType::Work,
            title: "Backend Engineer".to_string(),
            organization: "Acme".to_string(),
            location: "Berlin".to_string(),
            start_date: date(2020, 5, 1),
            end_date: Some(date(2022, 5, 1)),
            is_current: false,
            description: String::new(),
            achievements: vec!["Shipped v2".to_string()],
            technologies: vec!["Rust".to_string()],
            is_active: true,
            order: 0,
        }
    }

    #[tokio::test]
    async fn creates_entry() {
        let use_case = SaveJourneyUseCase::new(MockJourneyRepository);
        let entry = ICreateJourneyUseCase::execute(&use_case, create_data())
            .await
            .unwrap();
        assert_eq!(entry.title, "Backend Engineer");
        assert_eq!(entry.end_date, Some(date(2022, 5, 1)));
    }

    #[tokio::test]
    async fn current_entry_drops_end_date() {
        let use_case = SaveJourneyUseCase::new(MockJourneyRepository);
        let mut data = create_data();
        data.is_current = true;
        let entry = ICreateJourneyUseCase::execute(&use_case, data).await.unwrap();
        assert_eq!(entry.end_date, None);
    }

    #[tokio::test]
    async fn rejects_end_before_start() {
        let use_case = SaveJourneyUseCase::new(MockJourneyRepository);
        let mut data = create_data();
        data.end_date = Some(date(2019, 1, 1));
        let result = ICreateJourneyUseCase::execute(&use_case, data).await;
        assert!(matches!(result, Err(SaveJourneyError::EndBeforeStart)));
    }

    #[tokio::test]
    async fn rejects_blank_organization() {
        let use_case = SaveJourneyUseCase::new(MockJourneyRepository);
        let mut data = create_data();
        data.organization = " ".to_string();
        let result = ICreateJourneyUseCase::execute(&use_case, data).await;
        assert!(matches!(result, Err(SaveJourneyError::EmptyOrganization)));
    }

    #[tokio::test]
    async fn update_of_missing_entry_is_not_found() {
        let use_case = SaveJourneyUseCase::new(MockJourneyRepository);
        let result = IUpdateJourneyUseCase::execute(
            &use_case,
            Uuid::new_v4(),
            UpdateJourneyData {
                title: Some("New".into()),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(SaveJourneyError::NotFound)));
    }
}
