use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::models::{BlogPost, GalleryItem, Lesson, LibraryDocument, Member, PrayerRequest};
use crate::services::listsync::ListSync;
use crate::services::preview;
use crate::store::{Document, HttpStore, Ordering};
use crate::Config;

/// Display order for each collection. The member directory reads
/// earliest-joined first; everything else reads newest first.
pub fn display_ordering(collection: &str) -> Ordering {
    if collection == Member::COLLECTION {
        Ordering::ascending("createdAt")
    } else {
        Ordering::descending("createdAt")
    }
}

fn title_of(collection: &str, doc: &Document) -> String {
    let field = match collection {
        c if c == Member::COLLECTION || c == PrayerRequest::COLLECTION => "name",
        _ => "title",
    };
    doc.str_field(field).unwrap_or("(untitled)").to_string()
}

fn body_of(collection: &str, doc: &Document) -> Option<String> {
    let field = match collection {
        c if c == BlogPost::COLLECTION => "content",
        c if c == Member::COLLECTION => "metadata",
        c if c == PrayerRequest::COLLECTION => "request",
        c if c == GalleryItem::COLLECTION || c == Lesson::COLLECTION => "description",
        c if c == LibraryDocument::COLLECTION => "category",
        _ => return None,
    };
    doc.str_field(field).map(str::to_string)
}

pub async fn run(config: &Path, collection: &str) -> Result<()> {
    let config = Config::load(config)?;
    let store = Arc::new(HttpStore::new(&config.store)?);
    let sync = ListSync::new(store);

    let docs = sync.load(collection, &display_ordering(collection)).await?;

    let limit = if collection == Member::COLLECTION {
        config.content.profile_preview_words
    } else {
        config.content.article_preview_words
    };

    println!("{} documents in {}", docs.len(), collection);
    for doc in &docs {
        let title = title_of(collection, doc);
        println!("\n{}  [{}]", title, doc.id);
        println!("  created {}", doc.created_at.format("%B %d, %Y"));
        if let Some(body) = body_of(collection, doc) {
            let text = preview::preview(&body, limit);
            if !text.is_empty() {
                println!("  {}", text);
            }
        }
    }

    Ok(())
}
