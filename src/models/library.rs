use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::store::{Document, Fields};

#[derive(Debug, Clone, Serialize)]
pub struct LibraryDocument {
    pub id: String,
    pub title: String,
    pub category: String,
    pub file_url: Option<String>,
}

impl LibraryDocument {
    pub const COLLECTION: &'static str = "library";
    pub const REQUIRED_FIELDS: &'static [&'static str] = &["title", "category"];
    pub const FILE_FIELD: &'static str = "fileUrl";

    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.str_field("title").unwrap_or_default().to_string(),
            category: doc.str_field("category").unwrap_or_default().to_string(),
            file_url: doc
                .str_field(Self::FILE_FIELD)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    pub fn matches(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLibraryDocument {
    pub title: String,
    pub category: String,
}

impl CreateLibraryDocument {
    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("title".to_string(), json!(self.title));
        fields.insert("category".to_string(), json!(self.category));
        fields
    }
}
