use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::models::{BlogPost, CreateBlogPost};
use crate::services::listsync::{Attachment, ListSync};
use crate::services::upload::{HttpUploader, MediaFile};
use crate::store::HttpStore;
use crate::Config;

pub async fn run(
    config: &Path,
    title: String,
    author: String,
    body: Option<String>,
    body_file: Option<PathBuf>,
    image: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load(config)?;

    let content = match (body, body_file) {
        (Some(body), None) => body,
        (None, Some(path)) => std::fs::read_to_string(&path)?,
        (Some(_), Some(_)) => anyhow::bail!("pass either --body or --body-file, not both"),
        (None, None) => anyhow::bail!("a post needs --body or --body-file"),
    };

    let store = Arc::new(HttpStore::new(&config.store)?);
    let uploader = Arc::new(HttpUploader::new(&config.upload)?);
    let sync = ListSync::with_uploader(store, uploader);

    let attachment = match image {
        Some(path) => Some(Attachment::new(MediaFile::read(&path)?, BlogPost::IMAGE_FIELD)),
        None => None,
    };

    let fields = CreateBlogPost {
        title,
        content,
        author,
    }
    .into_fields();

    let doc = sync
        .create(
            BlogPost::COLLECTION,
            fields,
            BlogPost::REQUIRED_FIELDS,
            attachment,
        )
        .await?;

    println!("Created blog post {}", doc.id);
    Ok(())
}
