use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::store::{Document, Fields};

#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    /// Rich-text bio stored as an HTML fragment.
    pub metadata: String,
    pub image_url: Option<String>,
}

impl Member {
    pub const COLLECTION: &'static str = "members";
    pub const REQUIRED_FIELDS: &'static [&'static str] = &["name", "metadata"];
    pub const IMAGE_FIELD: &'static str = "imageUrl";

    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.str_field("name").unwrap_or_default().to_string(),
            metadata: doc.str_field("metadata").unwrap_or_default().to_string(),
            image_url: doc
                .str_field(Self::IMAGE_FIELD)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMember {
    pub name: String,
    pub metadata: String,
}

impl CreateMember {
    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".to_string(), json!(self.name.trim()));
        fields.insert("metadata".to_string(), json!(self.metadata));
        fields
    }
}
