use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Work,
    Education,
    Certification,
    Achievement,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Work => "work",
            EntryType::Education => "education",
            EntryType::Certification => "certification",
            EntryType::Achievement => "achievement",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "work" => Some(EntryType::Work),
            "education" => Some(EntryType::Education),
            "certification" => Some(EntryType::Certification),
            "achievement" => Some(EntryType::Achievement),
            _ => None,
        }
    }
}

/// One station of the professional timeline: a job, a degree, a
/// certification or an award.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyEntry {
    pub id: Uuid,
    pub entry_type: EntryType,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl JourneyEntry {
    /// Human readable span, e.g. "2 years 3 months". Open-ended entries
    /// count up to today.
    pub fn duration(&self) -> String {
        let end = if self.is_current || self.end_date.is_none() {
            Utc::now().date_naive()
        } else {
            self.end_date.unwrap_or(self.start_date)
        };
        duration_label(self.start_date, end)
    }
}

pub(crate) fn duration_label(start: NaiveDate, end: NaiveDate) -> String {
    if end < start {
        return "Less than a month".to_string();
    }
    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    if months <= 0 {
        return "Less than a month".to_string();
    }
    let years = months / 12;
    let months = months % 12;
    let mut parts = Vec::new();
    if years == 1 {
        parts.push("1 year".to_string());
    } else if years > 1 {
        parts.push(format!("{years} years"));
    }
    if months == 1 {
        parts.push("1 month".to_string());
    } else if months > 1 {
        parts.push(format!("{months} months"));
    }
    parts.join(" ")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqItem {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn entry_type_round_trips_wire_names() {
        for entry_type in [
            EntryType::Work,
            EntryType::Education,
            EntryType::Certification,
            EntryType::Achievement,
        ] {
            assert_eq!(EntryType::parse(entry_type.as_str()), Some(entry_type));
        }
        assert_eq!(EntryType::parse("job"), None);
    }

    #[test]
    fn duration_combines_years_and_months() {
        assert_eq!(
            duration_label(date(2020, 1, 1), date(2022, 4, 1)),
            "2 years 3 months"
        );
    }

    #[test]
    fn duration_with_exact_years() {
        assert_eq!(duration_label(date(2019, 6, 1), date(2020, 6, 1)), "1 year");
    }

    #[test]
    fn duration_under_a_month() {
        assert_eq!(
            duration_label(date(2023, 3, 10), date(2023, 3, 20)),
            "Less than a month"
        );
    }

    #[test]
    fn duration_partial_month_rounds_down() {
        // 2020-01-15 to 2020-03-10 is one full month plus change.
        assert_eq!(duration_label(date(2020, 1, 15), date(2020, 3, 10)), "1 month");
    }
}
