use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::cli::list::display_ordering;
use crate::services::listsync::ListSync;
use crate::store::HttpStore;
use crate::Config;

pub async fn run(config: &Path, collection: &str) -> Result<()> {
    let config = Config::load(config)?;
    let store = Arc::new(HttpStore::new(&config.store)?);
    let sync = ListSync::new(store);

    let mut subscription = sync
        .subscribe(collection, &display_ordering(collection))
        .await?;

    println!("Watching {} (Ctrl-C to stop)", collection);
    // The subscription guard drops on return, which also stops the
    // poll task behind it.
    while let Some(snapshot) = subscription.next().await {
        println!("-- {} documents --", snapshot.len());
        for doc in &snapshot {
            let title = doc
                .str_field("title")
                .or_else(|| doc.str_field("name"))
                .unwrap_or("(untitled)");
            println!("{}  [{}]", title, doc.id);
        }
    }

    Ok(())
}
