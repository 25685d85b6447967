use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::store::{Document, Fields};

#[derive(Debug, Clone, Serialize)]
pub struct PrayerRequest {
    pub id: String,
    pub name: String,
    pub request: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PrayerRequest {
    pub const COLLECTION: &'static str = "prayerRequests";
    pub const REQUIRED_FIELDS: &'static [&'static str] = &["name", "request"];

    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.str_field("name").unwrap_or_default().to_string(),
            request: doc.str_field("request").unwrap_or_default().to_string(),
            phone: doc
                .str_field("phone")
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            email: doc
                .str_field("email")
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            created_at: doc.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrayerRequest {
    pub name: String,
    pub request: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CreatePrayerRequest {
    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".to_string(), json!(self.name));
        fields.insert("request".to_string(), json!(self.request));
        if let Some(phone) = self.phone {
            fields.insert("phone".to_string(), json!(phone));
        }
        if let Some(email) = self.email {
            fields.insert("email".to_string(), json!(email));
        }
        fields
    }
}
