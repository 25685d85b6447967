use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::store::{Document, Fields};

#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO date (`YYYY-MM-DD`) this lesson is taught on; drives the
    /// current-lesson rotation.
    pub lesson_date: Option<NaiveDate>,
    pub is_current: bool,
    pub pdf_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub year: Option<i64>,
    pub quarter: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Lesson {
    pub const COLLECTION: &'static str = "sabbath_school_lessons";
    pub const REQUIRED_FIELDS: &'static [&'static str] = &["title", "description"];
    pub const PDF_FIELD: &'static str = "pdfUrl";
    pub const THUMBNAIL_FIELD: &'static str = "thumbnailUrl";

    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.str_field("title").unwrap_or_default().to_string(),
            description: doc.str_field("description").unwrap_or_default().to_string(),
            lesson_date: parse_date(doc.str_field("lessonDate")),
            is_current: doc.bool_field("isCurrent").unwrap_or(false),
            pdf_url: doc
                .str_field(Self::PDF_FIELD)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            thumbnail_url: doc
                .str_field(Self::THUMBNAIL_FIELD)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            year: doc.i64_field("year"),
            quarter: doc.i64_field("quarter"),
            start_date: parse_date(doc.str_field("startDate")),
            end_date: parse_date(doc.str_field("endDate")),
        }
    }
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLesson {
    pub title: String,
    pub description: String,
    pub lesson_date: NaiveDate,
    pub year: i32,
    pub quarter: u8,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl CreateLesson {
    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("title".to_string(), json!(self.title));
        fields.insert("description".to_string(), json!(self.description));
        fields.insert(
            "lessonDate".to_string(),
            json!(self.lesson_date.format("%Y-%m-%d").to_string()),
        );
        fields.insert("isCurrent".to_string(), json!(false));
        fields.insert("year".to_string(), json!(self.year));
        fields.insert("quarter".to_string(), json!(self.quarter));
        if let Some(date) = self.start_date {
            fields.insert(
                "startDate".to_string(),
                json!(date.format("%Y-%m-%d").to_string()),
            );
        }
        if let Some(date) = self.end_date {
            fields.insert(
                "endDate".to_string(),
                json!(date.format("%Y-%m-%d").to_string()),
            );
        }
        fields
    }
}
