use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::outgoing::{
    ContactNotifier, ContactRepository, ContactRepositoryError, CreateMessageData,
};
use crate::modules::settings::application::use_cases::get_settings::IGetSettingsUseCase;
use async_trait::async_trait;
use email_address::EmailAddress;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum SubmitMessageError {
    ContactFormDisabled,
    EmptyName,
    EmptyMessage,
    InvalidEmail,
    MissingReference(String),
    RepositoryError(String),
}

#[async_trait]
pub trait ISubmitMessageUseCase: Send + Sync {
    async fn execute(&self, data: CreateMessageData)
        -> Result<ContactMessage, SubmitMessageError>;
}

pub struct SubmitMessageUseCase<R: ContactRepository> {
    repository: R,
    settings: Arc<dyn IGetSettingsUseCase>,
    notifier: Arc<dyn ContactNotifier>,
}

impl<R: ContactRepository> SubmitMessageUseCase<R> {
    pub fn new(
        repository: R,
        settings: Arc<dyn IGetSettingsUseCase>,
        notifier: Arc<dyn ContactNotifier>,
    ) -> Self {
        Self {
            repository,
            settings,
            notifier,
        }
    }
}

#[async_trait]
impl<R: ContactRepository> ISubmitMessageUseCase for SubmitMessageUseCase<R> {
    async fn execute(
        &self,
        mut data: CreateMessageData,
    ) -> Result<ContactMessage, SubmitMessageError> {
        let settings = self
            .settings
            .execute()
            .await
            .map_err(|e| SubmitMessageError::RepositoryError(format!("{e:?}")))?;
        if !settings.enable_contact_form {
            return Err(SubmitMessageError::ContactFormDisabled);
        }

        data.name = data.name.trim().to_string();
        if data.name.is_empty() {
            return Err(SubmitMessageError::EmptyName);
        }
        if data.message.trim().is_empty() {
            return Err(SubmitMessageError::EmptyMessage);
        }
        if EmailAddress::from_str(&data.email).is_err() {
            return Err(SubmitMessageError::InvalidEmail);
        }

        let saved = self.repository.create(data).await.map_err(|e| match e {
            ContactRepositoryError::MissingReference(what) => {
                SubmitMessageError::MissingReference(what)
            }
            other => SubmitMessageError::RepositoryError(other.to_string()),
        })?;

        // Email delivery never blocks or fails the submission.
        self.notifier.notify_submission(&saved);

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::domain::entities::MessageStatus;
    use crate::modules::settings::application::domain::entities::SiteSettings;
    use crate::modules::settings::application::use_cases::get_settings::GetSettingsError;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    struct MockContactRepository;

    #[async_trait]
    impl ContactRepository for MockContactRepository {
        async fn list(
            &self,
            _status: Option<MessageStatus>,
        ) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
            unimplemented!()
        }

        async fn find_by_id(
            &self,
            _id: Uuid,
        ) -> Result<Option<ContactMessage>, ContactRepositoryError> {
            unimplemented!()
        }

        async fn create(
            &self,
            data: CreateMessageData,
        ) -> Result<ContactMessage, ContactRepositoryError> {
            Ok(ContactMessage {
                id: Uuid::new_v4(),
                name: data.name,
                email: data.email,
                phone: data.phone,
                company: data.company,
                subject: data.subject,
                message: data.message,
                service_interest_id: data.service_interest_id,
                status: MessageStatus::New,
                ip_address: data.ip_address,
                user_agent: data.user_agent,
                created_at: Utc::now().fixed_offset(),
                updated_at: Utc::now().fixed_offset(),
            })
        }

        async fn update_status(
            &self,
            _id: Uuid,
            _status: MessageStatus,
        ) -> Result<ContactMessage, ContactRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), ContactRepositoryError> {
            Ok(())
        }
    }

    struct FixedSettings {
        enable_contact_form: bool,
    }

    #[async_trait]
    impl IGetSettingsUseCase for FixedSettings {
        async fn execute(&self) -> Result<SiteSettings, GetSettingsError> {
            let mut settings = SiteSettings::default();
            settings.enable_contact_form = self.enable_contact_form;
            Ok(settings)
        }
    }

    struct CountingNotifier(AtomicUsize);

    impl ContactNotifier for CountingNotifier {
        fn notify_submission(&self, _message: &ContactMessage) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn submit_data() -> CreateMessageData {
        CreateMessageData {
            name: "Jordan Reyes".to_string(),
            email: "jordan@example.com".to_string(),
            phone: String::new(),
            company: String::new(),
            subject: "Project inquiry".to_string(),
            message: "I'd like to talk about an API project.".to_string(),
            service_interest_id: None,
            ip_address: "203.0.113.9".to_string(),
            user_agent: "test-agent".to_string(),
        }
    }

    #[tokio::test]
    async fn persists_and_notifies() {
        let notifier = Arc::new(CountingNotifier(AtomicUsize::new(0)));
        let use_case = SubmitMessageUseCase::new(
            MockContactRepository,
            Arc::new(FixedSettings {
                enable_contact_form: true,
            }),
            notifier.clone(),
        );

        let saved = use_case.execute(submit_data()).await.unwrap();
        assert_eq!(saved.status, MessageStatus::New);
        assert_eq!(notifier.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rejects_when_form_disabled() {
        let notifier = Arc::new(CountingNotifier(AtomicUsize::new(0)));
        let use_case = SubmitMessageUseCase::new(
            MockContactRepository,
            Arc::new(FixedSettings {
                enable_contact_form: false,
            }),
            notifier.clone(),
        );

        let result = use_case.execute(submit_data()).await;
        assert!(matches!(
            result,
            Err(SubmitMessageError::ContactFormDisabled)
        ));
        assert_eq!(notifier.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        let use_case = SubmitMessageUseCase::new(
            MockContactRepository,
            Arc::new(FixedSettings {
                enable_contact_form: true,
            }),
            Arc::new(CountingNotifier(AtomicUsize::new(0))),
        );

        let mut data = submit_data();
        data.email = "nope".to_string();
        let result = use_case.execute(data).await;
        assert!(matches!(result, Err(SubmitMessageError::InvalidEmail)));
    }
}
