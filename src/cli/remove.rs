use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::services::listsync::{Confirmation, ListSync};
use crate::store::HttpStore;
use crate::Config;

pub async fn run(config: &Path, collection: &str, id: &str, yes: bool) -> Result<()> {
    // Deletes must never run silently.
    if !yes {
        anyhow::bail!("refusing to delete {collection}/{id}: re-run with --yes to confirm");
    }

    let config = Config::load(config)?;
    let store = Arc::new(HttpStore::new(&config.store)?);
    let sync = ListSync::new(store);

    sync.remove(collection, id, Confirmation::Confirmed).await?;
    println!("Removed {} from {}", id, collection);
    Ok(())
}
