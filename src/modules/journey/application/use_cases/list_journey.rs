use crate::modules::journey::application::domain::entities::JourneyEntry;
use crate::modules::journey::application::ports::outgoing::{
    JourneyFilter, JourneyRepository, JourneyRepositoryError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum ListJourneyError {
    RepositoryError(String),
}

#[async_trait]
pub trait IListJourneyUseCase: Send + Sync {
    async fn execute(&self, filter: JourneyFilter) -> Result<Vec<JourneyEntry>, ListJourneyError>;
}

pub struct ListJourneyUseCase<R: JourneyRepository> {
    repository: R,
}

impl<R: JourneyRepository> ListJourneyUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: JourneyRepository> IListJourneyUseCase for ListJourneyUseCase<R> {
    async fn execute(&self, filter: JourneyFilter) -> Result<Vec<JourneyEntry>, ListJourneyError> {
        self.repository.list(filter).await.map_err(|e| match e {
            JourneyRepositoryError::NotFound => {
                ListJourneyError::RepositoryError("unexpected not-found on list".to_string())
            }
            JourneyRepositoryError::DatabaseError(msg) => ListJourneyError::RepositoryError(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::journey::application::domain::entities::EntryType;
    use crate::modules::journey::application::ports::outgoing::{
        CreateJourneyData, UpdateJourneyData,
    };
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    struct MockJourneyRepository {
        entries: Vec<JourneyEntry>,
    }

    #[async_trait]
    impl JourneyRepository for MockJourneyRepository {
        async fn list(
            &self,
            filter: JourneyFilter,
        ) -> Result<Vec<JourneyEntry>, JourneyRepositoryError> {
            Ok(self
                .entries
                .iter()
                .filter(|e| {
                    filter
                        .entry_type
                        .map(|t| e.entry_type == t)
                        .unwrap_or(true)
                        && (!filter.only_active || e.is_active)
                })
                .cloned()
                .collect())
        }

        async fn find_by_id(
            &self,
            _id: Uuid,
        ) -> Result<Option<JourneyEntry>, JourneyRepositoryError> {
            unimplemented!()
        }

        async fn create(
            &self,
            _data: CreateJourneyData,
        ) -> Result<JourneyEntry, JourneyRepositoryError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: UpdateJourneyData,
        ) -> Result<JourneyEntry, JourneyRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), JourneyRepositoryError> {
            unimplemented!()
        }
    }

    fn entry(entry_type: EntryType, is_active: bool) -> JourneyEntry {
        JourneyEntry {
            id: Uuid::new_v4(),
            entry_type,
            title: "Senior Engineer".to_string(),
            organization: "Acme".to_string(),
            location: "Remote".to_string(),
            start_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            end_date: None,
            is_current: true,
            description: String::new(),
            achievements: vec![],
            technologies: vec![],
            is_active,
            order: 0,
            created_at: Utc::now().fixed_offset(),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn filters_by_entry_type() {
        let use_case = ListJourneyUseCase::new(MockJourneyRepository {
            entries: vec![entry(EntryType::Work, true), entry(EntryType::Education, true)],
        });
        let result = use_case
            .execute(JourneyFilter {
                entry_type: Some(EntryType::Education),
                only_active: true,
            })
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].entry_type, EntryType::Education);
    }

    #[tokio::test]
    async fn active_filter_hides_disabled_entries() {
        let use_case = ListJourneyUseCase::new(MockJourneyRepository {
            entries: vec![entry(EntryType::Work, true), entry(EntryType::Work, false)],
        });
        let result = use_case
            .execute(JourneyFilter {
                entry_type: None,
                only_active: true,
            })
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
    }
}
