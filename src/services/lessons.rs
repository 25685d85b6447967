//! Sabbath-school lesson rotation.
//!
//! At most one lesson window is "current" at a time. The switch is one
//! atomic batch: clear `isCurrent` on every lesson that carries it, set
//! it on every lesson dated today. Committing both sides together means
//! no reader ever observes zero or multiple current lessons mid-switch.

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::error::Result;
use crate::models::Lesson;
use crate::store::{DocumentStore, Fields, WriteBatch};

const DATE_FIELD: &str = "lessonDate";
const CURRENT_FIELD: &str = "isCurrent";

fn current_flag(value: bool) -> Fields {
    let mut fields = Fields::new();
    fields.insert(CURRENT_FIELD.to_string(), json!(value));
    fields
}

/// Make the lesson(s) dated `today` current, clearing every
/// previously-current lesson in the same commit. Returns how many
/// lessons were made current; zero means no lesson is dated today and
/// nothing was written.
pub async fn rotate_current<S: DocumentStore>(store: &S, today: NaiveDate) -> Result<usize> {
    let date = today.format("%Y-%m-%d").to_string();

    let todays = store
        .query_eq(Lesson::COLLECTION, DATE_FIELD, &Value::String(date.clone()))
        .await?;
    if todays.is_empty() {
        tracing::info!("no lesson dated {}", date);
        return Ok(0);
    }

    let current = store
        .query_eq(Lesson::COLLECTION, CURRENT_FIELD, &Value::Bool(true))
        .await?;

    let mut batch = WriteBatch::new();
    for doc in &current {
        batch.update(Lesson::COLLECTION, &doc.id, current_flag(false));
    }
    for doc in &todays {
        batch.update(Lesson::COLLECTION, &doc.id, current_flag(true));
    }

    store.commit(batch).await?;
    tracing::info!(
        "rotated current lesson: {} set, {} cleared",
        todays.len(),
        current.len()
    );
    Ok(todays.len())
}
