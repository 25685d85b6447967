use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::store::{Document, Fields};

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// Rich-text body stored as an HTML fragment.
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    pub const COLLECTION: &'static str = "blog";
    /// Blog posts require attribution on top of the usual title + body.
    pub const REQUIRED_FIELDS: &'static [&'static str] = &["title", "content", "author"];
    pub const IMAGE_FIELD: &'static str = "imageURL";

    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.str_field("title").unwrap_or_default().to_string(),
            content: doc.str_field("content").unwrap_or_default().to_string(),
            author: doc
                .str_field("author")
                .filter(|s| !s.is_empty())
                .unwrap_or("Unknown author")
                .to_string(),
            image_url: doc
                .str_field(Self::IMAGE_FIELD)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            created_at: doc.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl CreateBlogPost {
    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("title".to_string(), json!(self.title));
        fields.insert("content".to_string(), json!(self.content));
        fields.insert("author".to_string(), json!(self.author));
        fields
    }
}
