use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::modules::journey::application::domain::entities::EntryType;
use crate::modules::journey::application::ports::outgoing::JourneyFilter;
use crate::modules::journey::application::use_cases::list_journey::IListJourneyUseCase;
use crate::modules::resume::application::domain::entities::{
    AchievementEntry, CurriculumData, CvDocument, CvFormat, CvSection, EducationEntry,
    ExperienceEntry, SkillGroup, SocialLinks,
};
use crate::modules::resume::application::ports::outgoing::cv_notifier::CvNotifier;
use crate::modules::resume::application::ports::outgoing::pdf_engine::{
    PdfEngine, PdfEngineError,
};
use crate::modules::resume::application::services::{curriculum_html, example_content};
use crate::modules::settings::application::domain::entities::SiteSettings;
use crate::modules::settings::application::use_cases::get_settings::IGetSettingsUseCase;

#[derive(Debug, Clone)]
pub enum GenerateCvError {
    RepositoryError(String),
    RenderError(String),
}

#[async_trait]
pub trait IGenerateCvUseCase: Send + Sync {
    async fn execute(
        &self,
        format: CvFormat,
        sections: Vec<CvSection>,
    ) -> Result<CvDocument, GenerateCvError>;
}

pub struct GenerateCvUseCase {
    settings: Arc<dyn IGetSettingsUseCase>,
    journey: Arc<dyn IListJourneyUseCase>,
    pdf_engine: Arc<dyn PdfEngine>,
    notifier: Arc<dyn CvNotifier>,
}

impl GenerateCvUseCase {
    pub fn new(
        settings: Arc<dyn IGetSettingsUseCase>,
        journey: Arc<dyn IListJourneyUseCase>,
        pdf_engine: Arc<dyn PdfEngine>,
        notifier: Arc<dyn CvNotifier>,
    ) -> Self {
        Self {
            settings,
            journey,
            pdf_engine,
            notifier,
        }
    }

    /// Gathers site settings and the professional timeline into one
    /// curriculum. Missing data is never an error, every empty piece is
    /// substituted with built-in example content.
    pub async fn assemble(&self) -> Result<CurriculumData, GenerateCvError> {
        let settings = self
            .settings
            .execute()
            .await
            .map_err(|e| GenerateCvError::RepositoryError(format!("{e:?}")))?;

        let entries = self
            .journey
            .execute(JourneyFilter {
                entry_type: None,
                only_active: true,
            })
            .await
            .map_err(|e| GenerateCvError::RepositoryError(format!("{e:?}")))?;

        let mut experience: Vec<ExperienceEntry> = Vec::new();
        let mut education: Vec<EducationEntry> = Vec::new();
        let mut achievements: Vec<AchievementEntry> = Vec::new();

        for entry in &entries {
            match entry.entry_type {
                EntryType::Work => experience.push(ExperienceEntry {
                    title: entry.title.clone(),
                    company: entry.organization.clone(),
                    location: entry.location.clone(),
                    start_date: entry.start_date,
                    end_date: entry.end_date,
                    is_current: entry.is_current,
                    duration: entry.duration(),
                    description: entry.description.clone(),
                    achievements: entry.achievements.clone(),
                    technologies: entry.technologies.clone(),
                }),
                EntryType::Education => education.push(EducationEntry {
                    degree: entry.title.clone(),
                    institution: entry.organization.clone(),
                    location: entry.location.clone(),
                    start_date: entry.start_date,
                    end_date: entry.end_date,
                    description: entry.description.clone(),
                    achievements: entry.achievements.clone(),
                }),
                EntryType::Certification | EntryType::Achievement => {
                    achievements.push(AchievementEntry {
                        title: entry.title.clone(),
                        organization: entry.organization.clone(),
                        date: entry.start_date,
                        description: entry.description.clone(),
                    })
                }
            }
        }

        if experience.is_empty() {
            experience = example_content::experience();
        }
        if education.is_empty() {
            education = example_content::education();
        }
        if achievements.is_empty() {
            achievements = example_content::achievements();
        }

        let mut skills = group_skills(&settings);
        if skills.is_empty() {
            skills = example_content::skills();
        }

        Ok(CurriculumData {
            name: fallback(&settings.owner_name, "Professional Name"),
            title: fallback(&settings.owner_title, "Full Stack Developer"),
            email: fallback(&settings.email, "contact@example.com"),
            phone: fallback(&settings.phone, "+1 (555) 123-4567"),
            location: fallback(&settings.location, "City, State"),
            website: fallback(&settings.site_url, "www.example.com"),
            summary: if settings.owner_bio.trim().is_empty() {
                example_content::summary()
            } else {
                settings.owner_bio.clone()
            },
            social: SocialLinks {
                linkedin: settings.linkedin_url.clone(),
                github: settings.github_url.clone(),
                twitter: settings.twitter_url.clone(),
            },
            experience,
            education,
            skills,
            achievements,
        })
    }
}

fn fallback(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Groups `skills_expertise` records by category, keeping first-seen
/// category order.
fn group_skills(settings: &SiteSettings) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in &settings.skills_expertise {
        let category = if skill.category.trim().is_empty() {
            "other".to_string()
        } else {
            skill.category.clone()
        };
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(skill.name.clone()),
            None => groups.push(SkillGroup {
                category,
                skills: vec![skill.name.clone()],
            }),
        }
    }
    groups
}

fn pdf_filename(name: &str) -> String {
    format!(
        "{}_CV_{}.pdf",
        name.replace(' ', "_"),
        Utc::now().format("%Y%m%d")
    )
}

#[async_trait]
impl IGenerateCvUseCase for GenerateCvUseCase {
    async fn execute(
        &self,
        format: CvFormat,
        sections: Vec<CvSection>,
    ) -> Result<CvDocument, GenerateCvError> {
        let sections = if sections.is_empty() {
            CvSection::DEFAULT.to_vec()
        } else {
            sections
        };

        let data = self.assemble().await?;
        let html = curriculum_html::render(&data, format, &sections);

        let doc = match self.pdf_engine.render(&html).await {
            Ok(bytes) => CvDocument {
                bytes,
                content_type: "application/pdf",
                filename: pdf_filename(&data.name),
            },
            Err(PdfEngineError::Unavailable) => {
                tracing::warn!("no PDF renderer installed, serving printable HTML");
                let page = curriculum_html::print_fallback(&html, &data.name);
                CvDocument {
                    bytes: page.into_bytes(),
                    content_type: "text/html; charset=utf-8",
                    filename: format!("{}_CV.html", data.name.replace(' ', "_")),
                }
            }
            Err(PdfEngineError::RenderFailed(msg)) => {
                return Err(GenerateCvError::RenderError(msg))
            }
        };

        self.notifier.notify_generated(&doc.filename);
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::journey::application::domain::entities::JourneyEntry;
    use crate::modules::journey::application::use_cases::list_journey::ListJourneyError;
    use crate::modules::settings::application::domain::entities::SkillExpertise;
    use crate::modules::resume::application::ports::outgoing::cv_notifier::NullCvNotifier;
    use crate::modules::settings::application::use_cases::get_settings::GetSettingsError;
    use chrono::NaiveDate;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct FixedSettings(SiteSettings);

    #[async_trait]
    impl IGetSettingsUseCase for FixedSettings {
        async fn execute(&self) -> Result<SiteSettings, GetSettingsError> {
            Ok(self.0.clone())
        }
    }

    struct FixedJourney(Vec<JourneyEntry>);

    #[async_trait]
    impl IListJourneyUseCase for FixedJourney {
        async fn execute(
            &self,
            _filter: JourneyFilter,
        ) -> Result<Vec<JourneyEntry>, ListJourneyError> {
            Ok(self.0.clone())
        }
    }

    struct NoEngine;

    #[async_trait]
    impl PdfEngine for NoEngine {
        async fn render(&self, _html: &str) -> Result<Vec<u8>, PdfEngineError> {
            Err(PdfEngineError::Unavailable)
        }
    }

    struct StaticPdf;

    #[async_trait]
    impl PdfEngine for StaticPdf {
        async fn render(&self, _html: &str) -> Result<Vec<u8>, PdfEngineError> {
            Ok(b"%PDF-1.7 fake".to_vec())
        }
    }

    fn work_entry(title: &str) -> JourneyEntry {
        let now = chrono::Utc::now().fixed_offset();
        JourneyEntry {
            id: Uuid::new_v4(),
            entry_type: EntryType::Work,
            title: title.to_string(),
            organization: "Acme".to_string(),
            location: "Remote".to_string(),
            start_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            end_date: None,
            is_current: true,
            description: "Builds backends.".to_string(),
            achievements: vec![],
            technologies: vec!["Rust".to_string()],
            is_active: true,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    struct RecordingNotifier(Mutex<Vec<String>>);

    impl CvNotifier for RecordingNotifier {
        fn notify_generated(&self, filename: &str) {
            self.0.lock().unwrap().push(filename.to_string());
        }
    }

    fn use_case(
        settings: SiteSettings,
        entries: Vec<JourneyEntry>,
        engine: Arc<dyn PdfEngine>,
    ) -> GenerateCvUseCase {
        use_case_with_notifier(settings, entries, engine, Arc::new(NullCvNotifier))
    }

    fn use_case_with_notifier(
        settings: SiteSettings,
        entries: Vec<JourneyEntry>,
        engine: Arc<dyn PdfEngine>,
        notifier: Arc<dyn CvNotifier>,
    ) -> GenerateCvUseCase {
        GenerateCvUseCase::new(
            Arc::new(FixedSettings(settings)),
            Arc::new(FixedJourney(entries)),
            engine,
            notifier,
        )
    }

    #[tokio::test]
    async fn assemble_substitutes_example_content_for_empty_sections() {
        let use_case = use_case(SiteSettings::default(), vec![], Arc::new(NoEngine));

        let data = use_case.assemble().await.unwrap();
        assert_eq!(data.name, "Professional Name");
        assert!(!data.experience.is_empty());
        assert!(!data.education.is_empty());
        assert!(!data.skills.is_empty());
        assert!(!data.achievements.is_empty());
    }

    #[tokio::test]
    async fn assemble_prefers_real_timeline_and_skills() {
        let mut settings = SiteSettings::default();
        settings.owner_name = "Grace Hopper".to_string();
        settings.skills_expertise = vec![
            SkillExpertise {
                name: "Rust".to_string(),
                category: "languages".to_string(),
                level: 5,
                description: String::new(),
            },
            SkillExpertise {
                name: "COBOL".to_string(),
                category: "languages".to_string(),
                level: 5,
                description: String::new(),
            },
        ];
        let use_case = use_case(settings, vec![work_entry("Rear Admiral")], Arc::new(NoEngine));

        let data = use_case.assemble().await.unwrap();
        assert_eq!(data.name, "Grace Hopper");
        assert_eq!(data.experience.len(), 1);
        assert_eq!(data.experience[0].title, "Rear Admiral");
        assert_eq!(data.skills.len(), 1);
        assert_eq!(data.skills[0].skills, vec!["Rust", "COBOL"]);
        // Education still falls back when the timeline has none.
        assert!(!data.education.is_empty());
    }

    #[tokio::test]
    async fn generate_returns_pdf_when_engine_renders() {
        let mut settings = SiteSettings::default();
        settings.owner_name = "Grace Hopper".to_string();
        let use_case = use_case(settings, vec![], Arc::new(StaticPdf));

        let doc = use_case.execute(CvFormat::Modern, vec![]).await.unwrap();
        assert_eq!(doc.content_type, "application/pdf");
        assert!(doc.filename.starts_with("Grace_Hopper_CV_"));
        assert!(doc.filename.ends_with(".pdf"));
    }

    #[tokio::test]
    async fn generate_falls_back_to_printable_html() {
        let use_case = use_case(SiteSettings::default(), vec![], Arc::new(NoEngine));

        let doc = use_case.execute(CvFormat::Minimal, vec![]).await.unwrap();
        assert_eq!(doc.content_type, "text/html; charset=utf-8");
        let page = String::from_utf8(doc.bytes).unwrap();
        assert!(page.contains("window.print()"));
    }

    #[tokio::test]
    async fn generate_notifies_with_the_served_filename() {
        let notifier = Arc::new(RecordingNotifier(Mutex::new(vec![])));
        let use_case = use_case_with_notifier(
            SiteSettings::default(),
            vec![],
            Arc::new(StaticPdf),
            notifier.clone(),
        );

        let doc = use_case.execute(CvFormat::Modern, vec![]).await.unwrap();
        assert_eq!(*notifier.0.lock().unwrap(), vec![doc.filename]);
    }

    #[tokio::test]
    async fn fallback_document_is_notified_too() {
        let notifier = Arc::new(RecordingNotifier(Mutex::new(vec![])));
        let use_case = use_case_with_notifier(
            SiteSettings::default(),
            vec![],
            Arc::new(NoEngine),
            notifier.clone(),
        );

        use_case.execute(CvFormat::Modern, vec![]).await.unwrap();
        let sent = notifier.0.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].ends_with("_CV.html"));
    }
}
