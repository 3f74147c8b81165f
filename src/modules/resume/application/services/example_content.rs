//! Built-in placeholder content for curriculum sections that have no data
//! yet. A fresh installation still downloads a complete looking document.

use chrono::NaiveDate;

use crate::modules::resume::application::domain::entities::{
    AchievementEntry, EducationEntry, ExperienceEntry, SkillGroup,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn summary() -> String {
    "Experienced Full Stack Developer with a passion for creating innovative web \
     applications and solving complex technical challenges. Proven track record of \
     delivering high-quality software solutions using modern technologies and best \
     practices. Strong problem-solving skills and ability to work effectively in \
     collaborative team environments."
        .to_string()
}

pub fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Senior Full Stack Developer".to_string(),
            company: "Tech Company Inc.".to_string(),
            location: "City, State".to_string(),
            start_date: date(2022, 1, 1),
            end_date: None,
            is_current: true,
            duration: "2+ years".to_string(),
            description: "Lead development of scalable web applications using modern \
                          frameworks and technologies."
                .to_string(),
            achievements: vec![
                "Developed and deployed 5+ production applications".to_string(),
                "Improved application performance by 40%".to_string(),
                "Mentored junior developers and established coding standards".to_string(),
            ],
            technologies: vec![
                "Rust".to_string(),
                "PostgreSQL".to_string(),
                "React".to_string(),
                "Docker".to_string(),
            ],
        },
        ExperienceEntry {
            title: "Frontend Developer".to_string(),
            company: "Digital Agency".to_string(),
            location: "City, State".to_string(),
            start_date: date(2020, 6, 1),
            end_date: Some(date(2021, 12, 31)),
            is_current: false,
            duration: "1 year 6 months".to_string(),
            description: "Created responsive web interfaces and interactive user \
                          experiences."
                .to_string(),
            achievements: vec![
                "Built 10+ responsive websites".to_string(),
                "Improved user engagement by 25%".to_string(),
            ],
            technologies: vec![
                "JavaScript".to_string(),
                "Vue.js".to_string(),
                "CSS3".to_string(),
            ],
        },
    ]
}

pub fn education() -> Vec<EducationEntry> {
    vec![EducationEntry {
        degree: "Bachelor of Science in Computer Science".to_string(),
        institution: "University of Technology".to_string(),
        location: "City, State".to_string(),
        start_date: date(2016, 9, 1),
        end_date: Some(date(2020, 5, 31)),
        description: "Graduated Magna Cum Laude with focus on Software Engineering"
            .to_string(),
        achievements: vec![
            "GPA: 3.8/4.0".to_string(),
            "Dean's List for 6 semesters".to_string(),
        ],
    }]
}

pub fn skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            category: "programming_languages".to_string(),
            skills: vec![
                "Python".to_string(),
                "JavaScript".to_string(),
                "TypeScript".to_string(),
                "Rust".to_string(),
            ],
        },
        SkillGroup {
            category: "frameworks_libraries".to_string(),
            skills: vec![
                "Django".to_string(),
                "React".to_string(),
                "Vue.js".to_string(),
                "Node.js".to_string(),
            ],
        },
        SkillGroup {
            category: "databases".to_string(),
            skills: vec![
                "PostgreSQL".to_string(),
                "MongoDB".to_string(),
                "Redis".to_string(),
            ],
        },
        SkillGroup {
            category: "tools_technologies".to_string(),
            skills: vec![
                "Docker".to_string(),
                "Git".to_string(),
                "AWS".to_string(),
                "CI/CD".to_string(),
            ],
        },
    ]
}

pub fn achievements() -> Vec<AchievementEntry> {
    vec![
        AchievementEntry {
            title: "AWS Certified Solutions Architect".to_string(),
            organization: "Amazon Web Services".to_string(),
            date: date(2023, 6, 1),
            description: "Professional-level certification in cloud architecture"
                .to_string(),
        },
        AchievementEntry {
            title: "Best Innovation Award".to_string(),
            organization: "Tech Company Inc.".to_string(),
            date: date(2023, 12, 1),
            description: "Recognition for developing an innovative solution that \
                          improved efficiency"
                .to_string(),
        },
    ]
}
