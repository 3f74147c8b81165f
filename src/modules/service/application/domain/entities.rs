use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceOffering {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub icon: String,
    /// Free-form label, e.g. "2-4 weeks".
    pub delivery_time: String,
    pub features: Vec<String>,
    pub process_steps: Vec<String>,
    pub starting_price: Option<Decimal>,
    pub price_unit: String,
    pub is_active: bool,
    pub is_featured: bool,
    pub order: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}
