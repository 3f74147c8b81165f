use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::portfolio::application::domain::entities::CategoryRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    Published,
    Featured,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Featured => "featured",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(PostStatus::Draft),
            "published" => Some(PostStatus::Published),
            "featured" => Some(PostStatus::Featured),
            _ => None,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, PostStatus::Published | PostStatus::Featured)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author_id: Option<Uuid>,
    pub category: Option<CategoryRef>,
    /// Comma-separated, lowercased.
    pub tags: String,
    pub status: PostStatus,
    pub featured_image: String,
    pub meta_title: String,
    pub meta_description: String,
    pub views_count: i64,
    pub reading_time: i32,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl BlogPost {
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// Minutes at roughly 200 words per minute, never below one.
pub fn reading_time_minutes(content: &str) -> i32 {
    let words = content.split_whitespace().count();
    ((words + 199) / 200).max(1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_time_minutes(""), 1);
        let short = "word ".repeat(150);
        assert_eq!(reading_time_minutes(&short), 1);
        let medium = "word ".repeat(201);
        assert_eq!(reading_time_minutes(&medium), 2);
        let long = "word ".repeat(1000);
        assert_eq!(reading_time_minutes(&long), 5);
    }

    #[test]
    fn tag_list_normalizes_entries() {
        let post = BlogPost {
            id: Uuid::new_v4(),
            title: String::new(),
            slug: String::new(),
            excerpt: String::new(),
            content: String::new(),
            author_id: None,
            category: None,
            tags: "Rust, Async ,, web".to_string(),
            status: PostStatus::Draft,
            featured_image: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            views_count: 0,
            reading_time: 1,
            published_at: None,
            created_at: Utc::now().fixed_offset(),
            updated_at: Utc::now().fixed_offset(),
        };
        assert_eq!(post.tag_list(), vec!["rust", "async", "web"]);
    }
}
