use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub client_name: String,
    pub client_position: String,
    pub client_company: String,
    pub client_email: String,
    /// Base64 data URL.
    pub client_photo: String,
    pub content: String,
    /// 1 through 5.
    pub rating: i16,
    pub project_id: Option<Uuid>,
    pub is_featured: bool,
    pub is_approved: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}
